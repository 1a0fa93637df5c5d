use crate::protocols::arp::hardware_type::HardwareType;
use crate::protocols::arp::operation::Operation;
use crate::protocols::ethernet::ether_type::EtherType;
use crate::protocols::ethernet::mac::MacAddress;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

// ARP Protocol
// RFC 826: https://datatracker.ietf.org/doc/html/rfc826

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Arp {
    pub hardware_type: HardwareType,
    pub protocol_type: EtherType,

    pub hardware_address_length: u8,
    pub protocol_address_length: u8,

    pub operation: Operation,

    pub sender_mac: MacAddress,
    pub sender_ip: Ipv4Addr,

    pub target_mac: MacAddress,
    pub target_ip: Ipv4Addr,
}

impl Arp {
    pub fn is_request(&self) -> bool {
        self.operation == Operation::Request
    }
}

pub mod hardware_type;
pub mod operation;

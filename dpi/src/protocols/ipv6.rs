use crate::protocols::ip::protocol::IpNextLevelProtocol;
use serde::{Deserialize, Serialize};
use std::net::Ipv6Addr;

// IPv6 Protocol
// RFC 8200: https://datatracker.ietf.org/doc/html/rfc8200

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IPv6 {
    pub version: u8,
    pub traffic_class: u8,
    pub flow_label: u32,
    pub payload_length: u16,
    pub next_header: IpNextLevelProtocol,
    pub hop_limit: u8,
    pub address_source: Ipv6Addr,
    pub address_destination: Ipv6Addr,
}

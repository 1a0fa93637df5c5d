use crate::protocols::ethernet::ether_type::EtherType;
use crate::protocols::ethernet::mac::MacAddress;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Ethernet II
// IEEE 802.3: https://standards.ieee.org/ieee/802.3/10422/

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Ethernet {
    pub destination_mac: MacAddress,
    pub source_mac: MacAddress,
    pub ether_type: EtherType,
}

#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq)]
pub enum EthernetError {
    #[error("Failed to decode MAC address from hex")]
    MacFailedHexDecode,

    #[error("Invalid MAC address string length")]
    MacInvalidStringLength,
}

pub mod ether_type;
pub mod mac;

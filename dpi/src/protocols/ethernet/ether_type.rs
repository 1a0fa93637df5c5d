use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(
    Clone, Copy, Debug, Display, Serialize, Deserialize, PartialEq, IntoPrimitive, FromPrimitive,
)]
#[repr(u16)]
#[serde(from = "u16", into = "u16")]
pub enum EtherType {
    #[strum(to_string = "ARP")]
    Arp = 0x0806,
    #[strum(to_string = "Frame Relay ARP")]
    ArpFrameRelay = 0x0808,
    #[strum(to_string = "RARP")]
    ArpReverse = 0x8035,
    #[strum(to_string = "IPv4")]
    Ipv4 = 0x0800,
    #[strum(to_string = "IPv6")]
    Ipv6 = 0x86DD,
    #[strum(to_string = "LLDP")]
    Lldp = 0x88CC,
    #[strum(to_string = "802.1Q VLAN")]
    Vlan = 0x8100,

    #[num_enum(catch_all)]
    #[strum(to_string = "Unknown")]
    Unknown(u16),
}

impl EtherType {
    pub fn code(&self) -> u16 {
        u16::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(EtherType::from(0x86DD_u16), EtherType::Ipv6);
        assert_eq!(EtherType::from(0x8847_u16), EtherType::Unknown(0x8847));
        assert_eq!(EtherType::Unknown(0x888E).code(), 0x888E);
    }

    #[test]
    fn test_code_and_name() {
        assert_eq!(EtherType::Arp.code(), 0x0806);
        assert_eq!(EtherType::Ipv4.to_string(), "IPv4");
        assert_eq!(EtherType::Unknown(0x88A8).to_string(), "Unknown");
    }

    #[test]
    fn test_serialized_as_code() {
        assert_eq!(serde_json::to_string(&EtherType::Ipv4).unwrap(), "2048");

        let ether_type: EtherType = serde_json::from_str("34887").unwrap();
        assert_eq!(ether_type, EtherType::Unknown(0x8847));
    }
}

use serde::{Deserialize, Serialize};
use std::fmt::Formatter;

/// Guide: How to Add a Protocol
/// 1. Add it to the `ProtocolId` enum and to `ProtocolId::key` / `From<&str>`.
/// 2. Put the field group struct in its own module, e.g. `protocols::custom_protocol`.
/// 3. Add a `ProtocolData` variant for it and link the variant in `ProtocolData::id`.
///
/// Protocols without a dedicated struct can still travel inside a frame as
/// `ProtocolData::Generic`, identified by `ProtocolId::Other`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProtocolId {
    Ethernet,

    Arp,

    IPv4,
    IPv6,

    ICMPv4,
    ICMPv6,
    TCP,
    UDP,

    // Lower-cased name of a protocol with no dedicated variant.
    Other(String),
}

impl ProtocolId {
    /// Canonical, lower-cased lookup key.
    pub fn key(&self) -> &str {
        match self {
            Self::Ethernet => "ethernet",
            Self::Arp => "arp",
            Self::IPv4 => "ipv4",
            Self::IPv6 => "ipv6",
            Self::ICMPv4 => "icmpv4",
            Self::ICMPv6 => "icmpv6",
            Self::TCP => "tcp",
            Self::UDP => "udp",
            Self::Other(name) => name.as_str(),
        }
    }
}

impl From<&str> for ProtocolId {
    fn from(value: &str) -> Self {
        let key = value.to_lowercase();
        match key.as_str() {
            "ethernet" => Self::Ethernet,
            "arp" => Self::Arp,
            "ipv4" => Self::IPv4,
            "ipv6" => Self::IPv6,
            "icmpv4" => Self::ICMPv4,
            "icmpv6" => Self::ICMPv6,
            "tcp" => Self::TCP,
            "udp" => Self::UDP,
            _ => Self::Other(key),
        }
    }
}

impl From<String> for ProtocolId {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ProtocolId> for String {
    fn from(value: ProtocolId) -> Self {
        value.key().to_string()
    }
}

impl std::fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Ethernet => "Ethernet",
            Self::Arp => "ARP",
            Self::IPv4 => "IPv4",
            Self::IPv6 => "IPv6",
            Self::ICMPv4 => "ICMPv4",
            Self::ICMPv6 => "ICMPv6",
            Self::TCP => "TCP",
            Self::UDP => "UDP",
            Self::Other(name) => name.as_str(),
        };

        write!(f, "{}", name)
    }
}

/// Field group of one decoded layer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum ProtocolData {
    Ethernet(ethernet::Ethernet),

    Arp(arp::Arp),

    IPv4(ipv4::IPv4),
    IPv6(ipv6::IPv6),

    ICMPv4(icmpv4::ICMPv4),
    ICMPv6(icmpv6::ICMPv6),

    TCP(tcp::TCP),
    UDP(udp::UDP),

    Generic(generic::Generic),
}

impl ProtocolData {
    pub fn id(&self) -> ProtocolId {
        match self {
            Self::Ethernet(_) => ProtocolId::Ethernet,
            Self::Arp(_) => ProtocolId::Arp,
            Self::IPv4(_) => ProtocolId::IPv4,
            Self::IPv6(_) => ProtocolId::IPv6,
            Self::ICMPv4(_) => ProtocolId::ICMPv4,
            Self::ICMPv6(_) => ProtocolId::ICMPv6,
            Self::TCP(_) => ProtocolId::TCP,
            Self::UDP(_) => ProtocolId::UDP,
            Self::Generic(value) => ProtocolId::from(value.name.as_str()),
        }
    }

    /// Name of the field group type, independent of the protocol it claims.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ethernet(_) => "Ethernet",
            Self::Arp(_) => "ARP",
            Self::IPv4(_) => "IPv4",
            Self::IPv6(_) => "IPv6",
            Self::ICMPv4(_) => "ICMPv4",
            Self::ICMPv6(_) => "ICMPv6",
            Self::TCP(_) => "TCP",
            Self::UDP(_) => "UDP",
            Self::Generic(_) => "Generic",
        }
    }
}

pub mod arp;
pub mod ethernet;
pub mod generic;
pub mod icmpv4;
pub mod icmpv6;
pub mod ip {
    pub mod protocol;
}
pub mod ipv4;
pub mod ipv6;
pub mod tcp;
pub mod udp;

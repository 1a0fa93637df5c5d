use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

// Assigned Internet Protocol Numbers
// https://www.iana.org/assignments/protocol-numbers/protocol-numbers.xhtml
#[derive(
    Clone, Copy, Debug, Display, Serialize, Deserialize, PartialEq, IntoPrimitive, FromPrimitive,
)]
#[repr(u8)]
#[serde(from = "u8", into = "u8")]
pub enum IpNextLevelProtocol {
    #[strum(to_string = "HOPOPT")]
    HopOpt = 0,
    ICMP = 1,
    IGMP = 2,
    IPv4 = 4,
    TCP = 6,
    UDP = 17,
    IPv6 = 41,
    #[strum(to_string = "IPv6-Route")]
    Ipv6Route = 43,
    #[strum(to_string = "IPv6-Frag")]
    Ipv6Frag = 44,
    GRE = 47,
    ESP = 50,
    AH = 51,
    #[strum(to_string = "IPv6-ICMP")]
    Ipv6Icmp = 58,
    #[strum(to_string = "IPv6-NoNxt")]
    Ipv6NoNxt = 59,
    #[strum(to_string = "IPv6-Opts")]
    Ipv6Opts = 60,
    OSPF = 89,
    SCTP = 132,

    #[num_enum(catch_all)]
    #[strum(to_string = "Unknown")]
    Unknown(u8),
}

impl IpNextLevelProtocol {
    pub fn code(&self) -> u8 {
        u8::from(*self)
    }
}

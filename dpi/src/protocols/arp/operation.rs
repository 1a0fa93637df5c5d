use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

// Operation codes
// RFC 5494: https://datatracker.ietf.org/doc/html/rfc5494
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Serialize,
    Deserialize,
    EnumIter,
    PartialEq,
    IntoPrimitive,
    FromPrimitive,
)]
#[repr(u16)]
#[serde(from = "u16", into = "u16")]
pub enum Operation {
    Request = 1,
    Reply = 2,

    #[strum(to_string = "Reverse Request")]
    RequestReverse = 3,
    #[strum(to_string = "Reverse Reply")]
    ReplyReverse = 4,

    #[strum(to_string = "DRARP Request")]
    DrarpRequest = 5,
    #[strum(to_string = "DRARP Reply")]
    DrarpReply = 6,
    #[strum(to_string = "DRARP Error")]
    DrarpError = 7,

    #[strum(to_string = "InARP Request")]
    InArpRequest = 8,
    #[strum(to_string = "InARP Reply")]
    InArpReply = 9,

    #[strum(to_string = "ARP NAK")]
    ArpNak = 10,

    #[num_enum(catch_all)]
    #[strum(to_string = "Unknown")]
    Unknown(u16),
}

impl Operation {
    pub fn code(&self) -> u16 {
        u16::from(*self)
    }
}

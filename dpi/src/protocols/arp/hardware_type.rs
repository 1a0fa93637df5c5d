use num_enum::{FromPrimitive, IntoPrimitive};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(
    Clone, Copy, Debug, Display, Serialize, Deserialize, PartialEq, IntoPrimitive, FromPrimitive,
)]
#[repr(u16)]
#[serde(from = "u16", into = "u16")]
pub enum HardwareType {
    Ethernet = 1,
    #[strum(to_string = "IEEE 802")]
    Ieee802 = 6,
    #[strum(to_string = "ARCNET")]
    Arcnet = 7,
    #[strum(to_string = "Frame Relay")]
    FrameRelay = 15,
    #[strum(to_string = "ATM")]
    Atm = 16,
    #[strum(to_string = "HDLC")]
    Hdlc = 17,
    #[strum(to_string = "Fibre Channel")]
    FibreChannel = 18,
    #[strum(to_string = "Serial Line")]
    SerialLine = 20,
    #[strum(to_string = "InfiniBand")]
    InfiniBand = 32,

    #[num_enum(catch_all)]
    #[strum(to_string = "Unknown")]
    Unknown(u16),
}

impl HardwareType {
    pub fn code(&self) -> u16 {
        u16::from(*self)
    }
}

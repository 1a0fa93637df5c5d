use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

// ICMPv4 Protocol
// RFC 792: https://datatracker.ietf.org/doc/html/rfc792

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ICMPv4 {
    pub message_type: u8,
    pub code: u8,
    pub checksum: u16,
    #[serde(default)]
    pub data: Vec<u8>,
}

impl ICMPv4 {
    pub fn message_type_name(&self) -> String {
        match MessageType::try_from_primitive(self.message_type) {
            Ok(value) => value.to_string(),
            Err(_) => "Unknown".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Display, PartialEq, TryFromPrimitive)]
#[repr(u8)]
pub enum MessageType {
    #[strum(to_string = "Echo Reply")]
    EchoReply = 0,
    #[strum(to_string = "Destination Unreachable")]
    DestinationUnreachable = 3,
    #[strum(to_string = "Source Quench")]
    SourceQuench = 4,
    Redirect = 5,
    #[strum(to_string = "Echo Request")]
    EchoRequest = 8,
    #[strum(to_string = "Router Advertisement")]
    RouterAdvertisement = 9,
    #[strum(to_string = "Router Solicitation")]
    RouterSolicitation = 10,
    #[strum(to_string = "Time Exceeded")]
    TimeExceeded = 11,
    #[strum(to_string = "Parameter Problem")]
    ParameterProblem = 12,
    Timestamp = 13,
    #[strum(to_string = "Timestamp Reply")]
    TimestampReply = 14,
    #[strum(to_string = "Information Request")]
    InformationRequest = 15,
    #[strum(to_string = "Information Reply")]
    InformationReply = 16,
    #[strum(to_string = "Address Mask Request")]
    AddressMaskRequest = 17,
    #[strum(to_string = "Address Mask Reply")]
    AddressMaskReply = 18,
    Traceroute = 30,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_name() {
        let icmp = ICMPv4 {
            message_type: 8,
            code: 0,
            checksum: 0x4008,
            data: vec![],
        };
        assert_eq!(icmp.message_type_name(), "Echo Request");

        let icmp = ICMPv4 {
            message_type: 42,
            ..icmp
        };
        assert_eq!(icmp.message_type_name(), "Unknown");
    }
}

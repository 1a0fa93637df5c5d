use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

// ICMPv6 Protocol
// RFC 4443: https://datatracker.ietf.org/doc/html/rfc4443

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ICMPv6 {
    pub message_type: u8,
    pub code: u8,
    pub checksum: u16,
    #[serde(default)]
    pub data: Vec<u8>,
}

impl ICMPv6 {
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
    #[strum(to_string = "Destination Unreachable")]
    DestinationUnreachable = 1,
    #[strum(to_string = "Packet Too Big")]
    PacketTooBig = 2,
    #[strum(to_string = "Time Exceeded")]
    TimeExceeded = 3,
    #[strum(to_string = "Parameter Problem")]
    ParameterProblem = 4,

    #[strum(to_string = "Echo Request")]
    EchoRequest = 128,
    #[strum(to_string = "Echo Reply")]
    EchoReply = 129,
    #[strum(to_string = "Multicast Listener Query")]
    MulticastListenerQuery = 130,
    #[strum(to_string = "Multicast Listener Report")]
    MulticastListenerReport = 131,
    #[strum(to_string = "Multicast Listener Done")]
    MulticastListenerDone = 132,

    // RFC 4861
    #[strum(to_string = "Router Solicitation")]
    RouterSolicitation = 133,
    #[strum(to_string = "Router Advertisement")]
    RouterAdvertisement = 134,
    #[strum(to_string = "Neighbor Solicitation")]
    NeighborSolicitation = 135,
    #[strum(to_string = "Neighbor Advertisement")]
    NeighborAdvertisement = 136,
    #[strum(to_string = "Redirect Message")]
    RedirectMessage = 137,

    // RFC 3810
    #[strum(to_string = "Multicast Listener Report v2")]
    MulticastListenerReportV2 = 143,
}

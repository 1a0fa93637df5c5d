use serde::{Deserialize, Serialize};

// TCP Protocol
// RFC 9293: https://datatracker.ietf.org/doc/html/rfc9293

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TCP {
    pub port_source: u16,
    pub port_destination: u16,
    pub sequence_number: u32,
    pub acknowledgement_number: u32,
    pub data_offset: u16,
    pub reserved: u8,
    pub flags: Flags,
    pub window: u16,
    pub checksum: u16,
    pub urgent_pointer: u16,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Flags {
    pub congestion_window_reduced: bool,
    pub ecn_echo: bool,
    pub urgent: bool,
    pub acknowledgment: bool,
    pub push: bool,
    pub reset: bool,
    pub syn: bool,
    pub fin: bool,
}

impl Flags {
    // Most significant bit first, as on the wire.
    fn ordered(&self) -> [(bool, &'static str); 8] {
        [
            (self.congestion_window_reduced, "CWR"),
            (self.ecn_echo, "ECE"),
            (self.urgent, "URG"),
            (self.acknowledgment, "ACK"),
            (self.push, "PSH"),
            (self.reset, "RST"),
            (self.syn, "SYN"),
            (self.fin, "FIN"),
        ]
    }

    pub fn bits(&self) -> u8 {
        self.ordered()
            .iter()
            .fold(0, |bits, (set, _)| (bits << 1) | u8::from(*set))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.ordered()
            .into_iter()
            .filter(|(set, _)| *set)
            .map(|(_, name)| name)
            .collect()
    }
}

impl From<u8> for Flags {
    fn from(bits: u8) -> Self {
        let bit = |index: u8| bits & (1 << index) != 0;
        Self {
            congestion_window_reduced: bit(7),
            ecn_echo: bit(6),
            urgent: bit(5),
            acknowledgment: bit(4),
            push: bit(3),
            reset: bit(2),
            syn: bit(1),
            fin: bit(0),
        }
    }
}

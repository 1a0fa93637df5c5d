use crate::protocols::ipv4::IPv4;
use crate::protocols::ipv6::IPv6;
use crate::protocols::{ProtocolData, ProtocolId};
use crate::utils;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

pub const MICROS_PER_SECOND: i128 = 1_000_000;

/// One captured packet, decoded layer by layer by a frame source.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DecodedFrame {
    pub number: u64,
    #[serde(default)]
    pub interface: Option<String>,
    pub length: u32,
    pub timestamp: Timestamp,

    // Layer order as decoded, outermost first. Entries may repeat.
    pub protocol_queue: Vec<String>,
    // At most one field group per protocol id.
    #[serde(default, deserialize_with = "distinct_layers")]
    pub layers: Vec<ProtocolData>,

    #[serde(default, with = "utils::hex_bytes")]
    pub payload: Vec<u8>,
}

impl DecodedFrame {
    /// Field group attached for `id`, if the layer was decoded.
    pub fn layer(&self, id: &ProtocolId) -> Option<&ProtocolData> {
        self.layers.iter().find(|layer| layer.id() == *id)
    }

    pub fn ipv4(&self) -> Option<&IPv4> {
        match self.layer(&ProtocolId::IPv4) {
            Some(ProtocolData::IPv4(value)) => Some(value),
            _ => None,
        }
    }

    pub fn ipv6(&self) -> Option<&IPv6> {
        match self.layer(&ProtocolId::IPv6) {
            Some(ProtocolData::IPv6(value)) => Some(value),
            _ => None,
        }
    }
}

fn distinct_layers<'de, D>(deserializer: D) -> Result<Vec<ProtocolData>, D::Error>
where
    D: Deserializer<'de>,
{
    let layers = Vec::<ProtocolData>::deserialize(deserializer)?;

    let mut seen = HashSet::new();
    for layer in &layers {
        let id = layer.id();
        if seen.contains(&id) {
            return Err(serde::de::Error::custom(format!(
                "duplicate field group for {id}"
            )));
        }
        seen.insert(id);
    }

    Ok(layers)
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Timestamp {
    pub tv_sec: i64,
    pub tv_usec: i64,
}

impl Timestamp {
    /// Microseconds since the Unix epoch. Out-of-range `tv_usec` carries into seconds.
    pub fn total_micros(&self) -> i128 {
        i128::from(self.tv_sec) * MICROS_PER_SECOND + i128::from(self.tv_usec)
    }

    /// Seconds since the epoch with exactly six fractional digits.
    pub fn epoch_string(&self) -> String {
        let total = self.total_micros();
        let sign = if total < 0 { "-" } else { "" };
        let magnitude = total.unsigned_abs();
        let micros = MICROS_PER_SECOND.unsigned_abs();

        format!(
            "{sign}{}.{:06}",
            magnitude / micros,
            magnitude % micros
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocols::generic::Generic;
    use crate::protocols::udp::UDP;

    #[test]
    fn test_epoch_string() {
        let timestamp = Timestamp {
            tv_sec: 1_700_000_000,
            tv_usec: 42,
        };
        assert_eq!(timestamp.epoch_string(), "1700000000.000042");
    }

    #[test]
    fn test_epoch_string_carries_micros() {
        let timestamp = Timestamp {
            tv_sec: 10,
            tv_usec: 1_500_000,
        };
        assert_eq!(timestamp.epoch_string(), "11.500000");
    }

    #[test]
    fn test_epoch_string_negative() {
        let timestamp = Timestamp {
            tv_sec: -1,
            tv_usec: -500_000,
        };
        assert_eq!(timestamp.epoch_string(), "-1.500000");
    }

    fn frame() -> DecodedFrame {
        DecodedFrame {
            number: 7,
            interface: None,
            length: 64,
            timestamp: Timestamp::default(),
            protocol_queue: vec!["UDP".to_string(), "DNS".to_string()],
            layers: vec![
                ProtocolData::UDP(UDP {
                    port_source: 53,
                    port_destination: 40000,
                    length: 30,
                    checksum: 0,
                }),
                ProtocolData::Generic(Generic {
                    name: "DNS".to_string(),
                    fields: vec![("id".to_string(), "0x76f2".to_string())],
                }),
            ],
            payload: b"hi".to_vec(),
        }
    }

    #[test]
    fn test_layer_lookup() {
        let frame = frame();

        assert!(matches!(
            frame.layer(&ProtocolId::UDP),
            Some(ProtocolData::UDP(_))
        ));
        assert!(matches!(
            frame.layer(&ProtocolId::from("dns")),
            Some(ProtocolData::Generic(_))
        ));
        assert!(frame.layer(&ProtocolId::TCP).is_none());
        assert!(frame.ipv4().is_none());
    }

    #[test]
    fn test_json() {
        let frame = frame();
        let json = serde_json::to_string(&frame).unwrap();
        assert!(json.contains("\"payload\":\"6869\""));

        let decoded: DecodedFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, frame);
    }

    #[test]
    fn test_json_duplicate_layers() {
        let mut frame = frame();
        frame.protocol_queue.push("UDP".to_string());
        frame.layers.push(frame.layers[0].clone());
        let json = serde_json::to_string(&frame).unwrap();

        let error = serde_json::from_str::<DecodedFrame>(&json).unwrap_err();
        assert!(error.to_string().contains("duplicate field group for UDP"));
    }

    #[test]
    fn test_json_generic_layers_by_name() {
        let mut frame = frame();
        frame.layers.push(ProtocolData::Generic(Generic {
            name: "mDNS".to_string(),
            fields: vec![],
        }));
        let json = serde_json::to_string(&frame).unwrap();
        assert!(serde_json::from_str::<DecodedFrame>(&json).is_ok());

        frame.layers.push(ProtocolData::Generic(Generic {
            name: "dns".to_string(),
            fields: vec![],
        }));
        let json = serde_json::to_string(&frame).unwrap();
        assert!(serde_json::from_str::<DecodedFrame>(&json).is_err());
    }

    #[test]
    fn test_json_optional_fields() {
        let json = r#"{
            "number": 1,
            "length": 42,
            "timestamp": { "tv_sec": 0, "tv_usec": 0 },
            "protocol_queue": ["Ethernet"]
        }"#;
        let frame: DecodedFrame = serde_json::from_str(json).unwrap();

        assert_eq!(frame.interface, None);
        assert!(frame.layers.is_empty());
        assert!(frame.payload.is_empty());
    }
}

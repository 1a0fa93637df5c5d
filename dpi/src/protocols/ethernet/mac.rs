use crate::protocols::ethernet::EthernetError;
use serde::{Deserialize, Serialize};
use std::fmt::Formatter;

pub const LENGTH_BYTES: usize = 6;

#[derive(Clone, Debug, Eq, Hash, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "String", into = "String")]
pub struct MacAddress(pub [u8; LENGTH_BYTES]);

impl From<[u8; LENGTH_BYTES]> for MacAddress {
    fn from(value: [u8; LENGTH_BYTES]) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for MacAddress {
    type Error = EthernetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let s = value.replace(":", "").replace(".", "").replace("-", "");
        let bytes = hex::decode(&s).map_err(|_| EthernetError::MacFailedHexDecode)?;
        let bytes = <[u8; LENGTH_BYTES]>::try_from(bytes)
            .map_err(|_| EthernetError::MacInvalidStringLength)?;

        Ok(Self(bytes))
    }
}

impl TryFrom<String> for MacAddress {
    type Error = EthernetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<MacAddress> for String {
    fn from(value: MacAddress) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let string = format!(
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        );

        write!(f, "{}", string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_colon_separated() {
        let mac = MacAddress::try_from("00:1a:2b:3c:4d:5e").unwrap();
        assert_eq!(mac, MacAddress([0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]));
    }

    #[test]
    fn test_parse_cisco_dotted() {
        let mac = MacAddress::try_from("001a.2b3c.4d5e").unwrap();
        assert_eq!(mac, MacAddress([0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E]));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            MacAddress::try_from("00:1A:2B:3C:4D"),
            Err(EthernetError::MacInvalidStringLength)
        );
        assert_eq!(
            MacAddress::try_from("zz:1A:2B:3C:4D:5E"),
            Err(EthernetError::MacFailedHexDecode)
        );
    }

    #[test]
    fn test_display_uppercase() {
        let mac = MacAddress::try_from("33-33-00-00-00-fb").unwrap();
        assert_eq!(mac.to_string(), "33:33:00:00:00:FB");
    }

    #[test]
    fn test_serde_as_string() {
        let mac = MacAddress::try_from("01:00:5E:02:02:04").unwrap();
        let json = serde_json::to_string(&mac).unwrap();
        assert_eq!(json, "\"01:00:5E:02:02:04\"");

        let decoded: MacAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, mac);
    }
}

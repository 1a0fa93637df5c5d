use crate::render::{Block, RenderError, Renderer};
use crate::renderers;
use dpi::frame::DecodedFrame;
use dpi::protocols::{ProtocolData, ProtocolId};

pub struct ArpRenderer;

impl Renderer for ArpRenderer {
    fn render(&self, layer: &ProtocolData, _: &DecodedFrame) -> Result<Block, RenderError> {
        let arp = match layer {
            ProtocolData::Arp(value) => value,
            _ => return Err(RenderError::unexpected(ProtocolId::Arp, layer)),
        };

        let header = if arp.is_request() {
            format!("ARP Who has {} ? -> Tell {}", arp.target_ip, arp.sender_ip)
        } else {
            format!("ARP {} -> Is at {}", arp.sender_ip, arp.sender_mac)
        };

        Ok(Block::new(header)
            .detail(format!(
                "Hardware Type: {} | Protocol Type: {} ({})",
                arp.hardware_type.code(),
                arp.protocol_type,
                renderers::hex16(arp.protocol_type.code())
            ))
            .detail(format!(
                "Operation: {} ({})",
                arp.operation.code(),
                arp.operation
            ))
            .detail(format!(
                "Sender MAC: {} | Sender IP: {}",
                arp.sender_mac, arp.sender_ip
            ))
            .detail(format!(
                "Target MAC: {} | Target IP: {}",
                arp.target_mac, arp.target_ip
            )))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::renderers::tests::frame_with;
    use dpi::protocols::arp::Arp;
    use dpi::protocols::arp::hardware_type::HardwareType;
    use dpi::protocols::arp::operation::Operation;
    use dpi::protocols::ethernet::ether_type::EtherType;
    use dpi::protocols::ethernet::mac::MacAddress;
    use std::net::Ipv4Addr;
    use strum::IntoEnumIterator;

    pub fn arp(operation: Operation) -> Arp {
        Arp {
            hardware_type: HardwareType::Ethernet,
            protocol_type: EtherType::Ipv4,
            hardware_address_length: 6,
            protocol_address_length: 4,
            operation,
            sender_mac: MacAddress::try_from("00:1E:68:51:4F:A9").unwrap(),
            sender_ip: Ipv4Addr::new(10, 0, 0, 1),
            target_mac: MacAddress::try_from("00:00:00:00:00:00").unwrap(),
            target_ip: Ipv4Addr::new(10, 0, 0, 5),
        }
    }

    fn render(operation: Operation) -> Block {
        let layer = ProtocolData::Arp(arp(operation));
        let frame = frame_with(vec![layer.clone()]);
        ArpRenderer.render(&layer, &frame).unwrap()
    }

    #[test]
    fn test_arp_request() {
        let block = render(Operation::Request);
        assert_eq!(block.header, "ARP Who has 10.0.0.5 ? -> Tell 10.0.0.1");
        assert_eq!(
            block.details,
            vec![
                "Hardware Type: 1 | Protocol Type: IPv4 (0x0800)".to_string(),
                "Operation: 1 (Request)".to_string(),
                "Sender MAC: 00:1E:68:51:4F:A9 | Sender IP: 10.0.0.1".to_string(),
                "Target MAC: 00:00:00:00:00:00 | Target IP: 10.0.0.5".to_string(),
            ]
        );
    }

    #[test]
    fn test_arp_reply() {
        let block = render(Operation::Reply);
        assert_eq!(block.header, "ARP 10.0.0.1 -> Is at 00:1E:68:51:4F:A9");
        assert_eq!(block.details[1], "Operation: 2 (Reply)");
    }

    #[test]
    fn test_unassigned_operation() {
        let block = render(Operation::from(25_u16));
        assert_eq!(block.header, "ARP 10.0.0.1 -> Is at 00:1E:68:51:4F:A9");
        assert_eq!(block.details[1], "Operation: 25 (Unknown)");
    }

    #[test]
    fn test_unknown_hardware_and_protocol_type() {
        let mut arp = arp(Operation::Request);
        arp.hardware_type = HardwareType::from(24_u16);
        arp.protocol_type = EtherType::from(0x8847_u16);
        let layer = ProtocolData::Arp(arp);
        let frame = frame_with(vec![layer.clone()]);

        let block = ArpRenderer.render(&layer, &frame).unwrap();
        assert_eq!(block.details[0], "Hardware Type: 24 | Protocol Type: Unknown (0x8847)");
    }

    #[test]
    fn test_only_request_asks() {
        let unassigned = (11_u16..=25).map(Operation::from);
        for operation in Operation::iter().chain(unassigned) {
            let block = render(operation);
            if operation.code() == 1 {
                assert!(block.header.starts_with("ARP Who has "));
            } else {
                assert!(block.header.contains(" -> Is at "), "{operation}");
            }
        }
    }
}

use crate::render::{Block, RenderError, Renderer};
use crate::renderers::{self, UNAVAILABLE};
use dpi::frame::DecodedFrame;
use dpi::protocols::{ProtocolData, ProtocolId};

/// Addressing comes from the frame's IPv4 layer; without it the route renders as `? -> ?`.
pub struct ICMPv4Renderer;

impl Renderer for ICMPv4Renderer {
    fn render(&self, layer: &ProtocolData, frame: &DecodedFrame) -> Result<Block, RenderError> {
        let icmp = match layer {
            ProtocolData::ICMPv4(value) => value,
            _ => return Err(RenderError::unexpected(ProtocolId::ICMPv4, layer)),
        };

        let header = match frame.ipv4() {
            Some(ipv4) => {
                renderers::route("ICMPv4", ipv4.address_source, ipv4.address_destination)
            },
            None => {
                log::debug!("Frame #{}: ICMPv4 without IPv4 layer", frame.number);
                renderers::route("ICMPv4", UNAVAILABLE, UNAVAILABLE)
            },
        };

        Ok(Block::new(header).detail(format!(
            "Type: {} ({}) | Checksum: {}",
            icmp.message_type,
            icmp.message_type_name(),
            renderers::hex16(icmp.checksum)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::ipv4::tests::icmp_ipv4;
    use crate::renderers::tests::frame_with;
    use dpi::protocols::icmpv4::ICMPv4;

    fn echo_request() -> ProtocolData {
        ProtocolData::ICMPv4(ICMPv4 {
            message_type: 8,
            code: 0,
            checksum: 0x4008,
            data: vec![0x00, 0x01, 0x0F, 0x55],
        })
    }

    #[test]
    fn test_icmpv4() {
        let layer = echo_request();
        let frame = frame_with(vec![ProtocolData::IPv4(icmp_ipv4()), layer.clone()]);

        let block = ICMPv4Renderer.render(&layer, &frame).unwrap();
        assert_eq!(block.header, "ICMPv4 ....172.16.255.1 -> 67.215.65.132");
        assert_eq!(
            block.details,
            vec!["Type: 8 (Echo Request) | Checksum: 0x4008".to_string()]
        );
    }

    #[test]
    fn test_icmpv4_without_ipv4() {
        let layer = echo_request();
        let frame = frame_with(vec![layer.clone()]);

        let block = ICMPv4Renderer.render(&layer, &frame).unwrap();
        assert_eq!(block.header, "ICMPv4 ....? -> ?");
        assert_eq!(block.details.len(), 1);
    }
}

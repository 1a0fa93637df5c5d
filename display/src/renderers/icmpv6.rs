use crate::render::{Block, RenderError, Renderer};
use crate::renderers::{self, UNAVAILABLE};
use dpi::frame::DecodedFrame;
use dpi::protocols::{ProtocolData, ProtocolId};

/// Addressing comes from the frame's IPv6 layer; without it the route renders as `? -> ?`.
pub struct ICMPv6Renderer;

impl Renderer for ICMPv6Renderer {
    fn render(&self, layer: &ProtocolData, frame: &DecodedFrame) -> Result<Block, RenderError> {
        let icmp = match layer {
            ProtocolData::ICMPv6(value) => value,
            _ => return Err(RenderError::unexpected(ProtocolId::ICMPv6, layer)),
        };

        let header = match frame.ipv6() {
            Some(ipv6) => {
                renderers::route("ICMPv6", ipv6.address_source, ipv6.address_destination)
            },
            None => {
                log::debug!("Frame #{}: ICMPv6 without IPv6 layer", frame.number);
                renderers::route("ICMPv6", UNAVAILABLE, UNAVAILABLE)
            },
        };

        Ok(Block::new(header)
            .detail(format!(
                "Type: {} ({}) | Subtype: {}",
                icmp.message_type,
                icmp.message_type_name(),
                icmp.code
            ))
            .detail(format!("Checksum: {}", renderers::hex16(icmp.checksum))))
    }
}

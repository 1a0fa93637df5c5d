use crate::render::{Block, RenderError, Renderer};
use crate::renderers;
use dpi::frame::DecodedFrame;
use dpi::protocols::{ProtocolData, ProtocolId};

pub struct IPv6Renderer;

impl Renderer for IPv6Renderer {
    fn render(&self, layer: &ProtocolData, _: &DecodedFrame) -> Result<Block, RenderError> {
        let ipv6 = match layer {
            ProtocolData::IPv6(value) => value,
            _ => return Err(RenderError::unexpected(ProtocolId::IPv6, layer)),
        };

        Ok(Block::new(renderers::route(
            "IPv6",
            ipv6.address_source,
            ipv6.address_destination,
        ))
        .detail(format!(
            "Traffic Class: 0x{:02x} | Flow Label: 0x{:05x}",
            ipv6.traffic_class, ipv6.flow_label
        ))
        .detail(format!(
            "Payload Length: {} | Hop Limit: {}",
            ipv6.payload_length, ipv6.hop_limit
        )))
    }
}

use crate::render::{Block, RenderError, Renderer};
use crate::renderers;
use dpi::frame::DecodedFrame;
use dpi::protocols::{ProtocolData, ProtocolId};

pub struct IPv4Renderer;

impl Renderer for IPv4Renderer {
    fn render(&self, layer: &ProtocolData, _: &DecodedFrame) -> Result<Block, RenderError> {
        let ipv4 = match layer {
            ProtocolData::IPv4(value) => value,
            _ => return Err(RenderError::unexpected(ProtocolId::IPv4, layer)),
        };

        Ok(Block::new(renderers::route(
            "IPv4",
            ipv4.address_source,
            ipv4.address_destination,
        ))
        .detail(format!(
            "Traffic Class: {}",
            ipv4.differentiated_services_code_point
        ))
        .detail(format!(
            "Total Length: {} | ID: {}",
            ipv4.total_length, ipv4.identification
        ))
        .detail(format!(
            "Flags: 0x{:x} ({}) | TTL: {}",
            ipv4.flags,
            renderers::names_or_dash(&ipv4.flag_names()),
            ipv4.time_to_live
        ))
        .detail(format!(
            "Protocol: {} | Checksum: {}",
            ipv4.protocol_inner,
            renderers::hex16(ipv4.checksum)
        )))
    }
}

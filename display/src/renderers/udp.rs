use crate::render::{Block, RenderError, Renderer};
use crate::renderers;
use dpi::frame::DecodedFrame;
use dpi::protocols::{ProtocolData, ProtocolId};

pub struct UdpRenderer;

impl Renderer for UdpRenderer {
    fn render(&self, layer: &ProtocolData, _: &DecodedFrame) -> Result<Block, RenderError> {
        let udp = match layer {
            ProtocolData::UDP(value) => value,
            _ => return Err(RenderError::unexpected(ProtocolId::UDP, layer)),
        };

        Ok(
            Block::new(renderers::route("UDP", udp.port_source, udp.port_destination))
                .detail(format!("Length: {} | Checksum: {}", udp.length, udp.checksum)),
        )
    }
}

use crate::render::{Block, RenderError, Renderer};
use crate::renderers;
use dpi::frame::DecodedFrame;
use dpi::protocols::{ProtocolData, ProtocolId};

pub struct EthernetRenderer;

impl Renderer for EthernetRenderer {
    fn render(&self, layer: &ProtocolData, _: &DecodedFrame) -> Result<Block, RenderError> {
        let ethernet = match layer {
            ProtocolData::Ethernet(value) => value,
            _ => return Err(RenderError::unexpected(ProtocolId::Ethernet, layer)),
        };

        Ok(Block::new(renderers::route(
            "Ethernet",
            &ethernet.source_mac,
            &ethernet.destination_mac,
        )))
    }
}

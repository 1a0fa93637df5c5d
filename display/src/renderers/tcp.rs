use crate::render::{Block, RenderError, Renderer};
use crate::renderers;
use dpi::frame::DecodedFrame;
use dpi::protocols::{ProtocolData, ProtocolId};

pub struct TcpRenderer;

impl Renderer for TcpRenderer {
    fn render(&self, layer: &ProtocolData, _: &DecodedFrame) -> Result<Block, RenderError> {
        let tcp = match layer {
            ProtocolData::TCP(value) => value,
            _ => return Err(RenderError::unexpected(ProtocolId::TCP, layer)),
        };

        // Bit 8 is NS, the low bit of the reserved nibble.
        let flags = (u16::from(tcp.reserved & 0x1) << 8) | u16::from(tcp.flags.bits());

        Ok(
            Block::new(renderers::route("TCP", tcp.port_source, tcp.port_destination))
                .detail(format!(
                    "Sequence Number: {} | ACK: {}",
                    tcp.sequence_number, tcp.acknowledgement_number
                ))
                .detail(format!(
                    "Flags: 0x{:03x} ({})",
                    flags,
                    renderers::names_or_dash(&tcp.flags.names())
                ))
                .detail(format!(
                    "Window Size: {} | Checksum: {}",
                    tcp.window,
                    renderers::hex16(tcp.checksum)
                ))
                .detail(format!("Urgent Pointer: {}", tcp.urgent_pointer)),
        )
    }
}

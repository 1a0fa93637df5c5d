use dpi::frame::DecodedFrame;
use dpi::protocols::{ProtocolData, ProtocolId};
use thiserror::Error;

/// Turns one field group into displayable text.
///
/// `layer` is the group the dispatcher matched; `frame` is read-only context
/// for renderers that need fields of another layer (ICMP reads IP addressing).
pub trait Renderer {
    fn render(&self, layer: &ProtocolData, frame: &DecodedFrame) -> Result<Block, RenderError>;
}

impl<F> Renderer for F
where
    F: Fn(&ProtocolData, &DecodedFrame) -> Result<Block, RenderError>,
{
    fn render(&self, layer: &ProtocolData, frame: &DecodedFrame) -> Result<Block, RenderError> {
        self(layer, frame)
    }
}

/// Header line of a layer followed by its detail lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub header: String,
    pub details: Vec<String>,
}

impl Block {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            details: vec![],
        }
    }

    pub fn detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("expected {expected} field group, found {found}")]
    UnexpectedLayer {
        expected: ProtocolId,
        found: &'static str,
    },

    #[error("{0}")]
    Custom(String),
}

impl RenderError {
    pub fn unexpected(expected: ProtocolId, found: &ProtocolData) -> Self {
        Self::UnexpectedLayer {
            expected,
            found: found.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dpi::protocols::generic::Generic;

    #[test]
    fn test_block_builder() {
        let block = Block::new("UDP ....53 -> 40000").detail("Length: 30 | Checksum: 0");
        assert_eq!(block.header, "UDP ....53 -> 40000");
        assert_eq!(block.details, vec!["Length: 30 | Checksum: 0".to_string()]);
    }

    #[test]
    fn test_unexpected_layer_message() {
        let layer = ProtocolData::Generic(Generic {
            name: "tcp".to_string(),
            fields: vec![],
        });
        let error = RenderError::unexpected(ProtocolId::UDP, &layer);
        assert_eq!(error.to_string(), "expected UDP field group, found Generic");
    }
}

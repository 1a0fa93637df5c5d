use crate::render::Renderer;
use crate::renderers::{
    arp::ArpRenderer, ethernet::EthernetRenderer, icmpv4::ICMPv4Renderer,
    icmpv6::ICMPv6Renderer, ipv4::IPv4Renderer, ipv6::IPv6Renderer, tcp::TcpRenderer,
    udp::UdpRenderer,
};
use dpi::protocols::ProtocolId;
use std::collections::HashMap;

/// Renderers keyed by protocol. Filled before rendering starts and read-only afterwards.
pub struct RendererRegistry {
    renderers: HashMap<ProtocolId, Box<dyn Renderer>>,
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl RendererRegistry {
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(ProtocolId::Ethernet, EthernetRenderer);
        registry.register(ProtocolId::Arp, ArpRenderer);
        registry.register(ProtocolId::IPv4, IPv4Renderer);
        registry.register(ProtocolId::IPv6, IPv6Renderer);
        registry.register(ProtocolId::ICMPv4, ICMPv4Renderer);
        registry.register(ProtocolId::ICMPv6, ICMPv6Renderer);
        registry.register(ProtocolId::TCP, TcpRenderer);
        registry.register(ProtocolId::UDP, UdpRenderer);
        registry
    }

    /// Returns the renderer previously registered for `id`, if any.
    pub fn register<R>(&mut self, id: ProtocolId, renderer: R) -> Option<Box<dyn Renderer>>
    where
        R: Renderer + 'static,
    {
        log::debug!("Renderer registered for {}", id.key());
        self.renderers.insert(id, Box::new(renderer))
    }

    pub fn get(&self, id: &ProtocolId) -> Option<&dyn Renderer> {
        self.renderers.get(id).map(|renderer| renderer.as_ref())
    }

    pub fn contains(&self, id: &ProtocolId) -> bool {
        self.renderers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Block, RenderError};
    use dpi::frame::DecodedFrame;
    use dpi::protocols::ProtocolData;

    #[test]
    fn test_builtin_protocols() {
        let registry = RendererRegistry::with_builtin();
        assert_eq!(registry.len(), 8);

        for id in [
            ProtocolId::Ethernet,
            ProtocolId::Arp,
            ProtocolId::IPv4,
            ProtocolId::IPv6,
            ProtocolId::ICMPv4,
            ProtocolId::ICMPv6,
            ProtocolId::TCP,
            ProtocolId::UDP,
        ] {
            assert!(registry.contains(&id), "{id} has no renderer");
        }
        assert!(!registry.contains(&ProtocolId::from("sctp")));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = RendererRegistry::empty();
        assert!(registry.is_empty());

        let renderer = |_: &ProtocolData, _: &DecodedFrame| -> Result<Block, RenderError> {
            Ok(Block::new("custom"))
        };
        assert!(registry.register(ProtocolId::from("dns"), renderer).is_none());
        assert!(registry.register(ProtocolId::from("DNS"), renderer).is_some());
        assert_eq!(registry.len(), 1);
        assert!(registry.get(&ProtocolId::Other("dns".to_string())).is_some());
    }
}

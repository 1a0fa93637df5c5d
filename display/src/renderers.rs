pub mod arp;
pub mod ethernet;
pub mod icmpv4;
pub mod icmpv6;
pub mod ipv4;
pub mod ipv6;
pub mod tcp;
pub mod udp;

pub const UNAVAILABLE: &str = "?";

// Header line of a layer: "<name> ....<source> -> <destination>".
pub(crate) fn route(
    name: &str, source: impl std::fmt::Display, destination: impl std::fmt::Display,
) -> String {
    format!("{name} ....{source} -> {destination}")
}

pub(crate) fn hex16(value: u16) -> String {
    format!("0x{:04x}", value)
}

pub(crate) fn names_or_dash(names: &[&str]) -> String {
    if names.is_empty() {
        return "-".to_string();
    }
    names.join(", ")
}

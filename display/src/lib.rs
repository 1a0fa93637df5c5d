// Library lints
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(unsafe_code)]

// Renderer panics are contained with catch_unwind.
#[cfg(not(panic = "unwind"))]
compile_error!("display requires panic = \"unwind\"");

pub mod header;
pub mod observer;
pub mod registry;
pub mod render;
pub mod renderers;
pub mod sink;
pub mod text;

pub const INDENT: &str = "    ";
pub const SEPARATOR_WIDTH: usize = 50;

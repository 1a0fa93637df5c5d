use crate::header::{self, TimeZone};
use crate::registry::RendererRegistry;
use crate::render::Block;
use crate::sink::{OutputSink, SinkError};
use crate::{INDENT, text};
use dpi::frame::DecodedFrame;
use dpi::protocols::ProtocolId;
use dpi::subject::{FrameObserver, FrameSubject};
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};

pub const BANNER: &str =
    "[>>>] Frame renderer initialized. Waiting for incoming data...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub display_data: bool,
    pub time_zone: TimeZone,
}

/// What dispatching one protocol queue entry produced.
#[derive(Clone, Debug, PartialEq)]
pub enum DispatchOutcome {
    Rendered(Block),
    // Entry queued but no field group attached to the frame.
    UndecodedLayer(String),
    // Field group attached, no renderer registered.
    UnsupportedProtocol(String),
    Failed { protocol: String, reason: String },
}

impl DispatchOutcome {
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Rendered(block) => {
                let mut lines = Vec::with_capacity(block.details.len() + 1);
                lines.push(format!("{INDENT}[+] {}", block.header));
                lines.extend(
                    block
                        .details
                        .iter()
                        .map(|detail| format!("{INDENT}{INDENT}{detail}")),
                );
                lines
            },
            Self::UndecodedLayer(protocol) => vec![format!(
                "{INDENT}[+] Unknown Protocol: {protocol} (No attribute found)"
            )],
            Self::UnsupportedProtocol(protocol) => vec![format!(
                "{INDENT}[+] Unknown Protocol: {protocol} (No display method)"
            )],
            Self::Failed { protocol, reason } => {
                vec![format!("{INDENT}[!] Render error in {protocol}: {reason}")]
            },
        }
    }
}

/// Renders every frame it is notified about as indented text lines.
pub struct ScreenObserver<S: OutputSink> {
    registry: RendererRegistry,
    sink: S,
    options: DisplayOptions,
}

impl<S: OutputSink> ScreenObserver<S> {
    pub fn new(sink: S, options: DisplayOptions) -> Self {
        Self::with_registry(RendererRegistry::with_builtin(), sink, options)
    }

    pub fn with_registry(registry: RendererRegistry, sink: S, options: DisplayOptions) -> Self {
        Self {
            registry,
            sink,
            options,
        }
    }

    /// Announces the observer on its sink and hands it over to `subject`.
    pub fn subscribe(mut self, subject: &mut impl FrameSubject)
    where
        S: 'static,
    {
        let announced = self
            .sink
            .write_line(BANNER)
            .and_then(|_| self.sink.flush());
        if let Err(err) = announced {
            log_sink_error(&err);
        }

        subject.register(Box::new(self));
    }

    /// One outcome per protocol queue entry, in queue order.
    pub fn dispatch(&self, frame: &DecodedFrame) -> Vec<DispatchOutcome> {
        frame
            .protocol_queue
            .iter()
            .map(|protocol| self.dispatch_one(frame, protocol))
            .collect()
    }

    fn dispatch_one(&self, frame: &DecodedFrame, protocol: &str) -> DispatchOutcome {
        let id = ProtocolId::from(protocol);

        let layer = match frame.layer(&id) {
            Some(value) => value,
            None => return DispatchOutcome::UndecodedLayer(protocol.to_string()),
        };

        let renderer = match self.registry.get(&id) {
            Some(value) => value,
            None => return DispatchOutcome::UnsupportedProtocol(protocol.to_string()),
        };

        let result = panic::catch_unwind(AssertUnwindSafe(|| renderer.render(layer, frame)));
        match result {
            Ok(Ok(block)) => DispatchOutcome::Rendered(block),
            Ok(Err(err)) => {
                log::warn!("Frame #{}: {} renderer failed. Error: {err}", frame.number, id);
                DispatchOutcome::Failed {
                    protocol: protocol.to_string(),
                    reason: err.to_string(),
                }
            },
            Err(_) => {
                log::error!("Frame #{}: {} renderer panicked", frame.number, id);
                DispatchOutcome::Failed {
                    protocol: protocol.to_string(),
                    reason: "renderer panicked".to_string(),
                }
            },
        }
    }

    /// Every line of `frame`, from the opening separator to the closing one.
    pub fn render_lines(&self, frame: &DecodedFrame) -> Vec<String> {
        let mut lines = header::lines(frame, self.options.time_zone);

        for outcome in self.dispatch(frame) {
            lines.extend(outcome.lines());
        }

        if self.options.display_data && !frame.payload.is_empty() {
            lines.extend(payload_lines(frame));
        }

        lines.push(header::separator());
        lines
    }

    pub fn render_frame(&mut self, frame: &DecodedFrame) -> Result<(), SinkError> {
        for line in self.render_lines(frame) {
            self.sink.write_line(&line)?;
        }
        self.sink.flush()
    }
}

impl<S: OutputSink> FrameObserver for ScreenObserver<S> {
    fn on_frame(&mut self, frame: &DecodedFrame) {
        if let Err(err) = self.render_frame(frame) {
            log::error!("Frame #{}: output failed.", frame.number);
            log_sink_error(&err);
        }
    }
}

fn payload_lines(frame: &DecodedFrame) -> Vec<String> {
    let decoded = text::decode_lossy(&frame.payload);
    if decoded.substitutions > 0 {
        log::debug!(
            "Frame #{}: {} invalid byte sequences replaced in payload",
            frame.number,
            decoded.substitutions
        );
    }

    let mut lines = vec![format!("{INDENT}[+] DATA:")];
    lines.extend(
        decoded
            .text
            .lines()
            .map(|line| format!("{INDENT}{INDENT}{line}")),
    );
    lines
}

fn log_sink_error(err: &SinkError) {
    let mut message = format!("Output sink error: {err}");
    if let Some(additional_info) = err.additional_info() {
        message.push_str(&format!(" Additional info: {additional_info}"));
    }
    log::error!("{}", message);
}

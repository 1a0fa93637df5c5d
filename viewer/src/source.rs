use dpi::frame::DecodedFrame;
use dpi::subject::{FrameBroadcaster, FrameObserver, FrameSubject};
use std::io::BufRead;
use thiserror::Error;

/// Replays frames stored one JSON document per line.
pub struct ReplaySource<R: BufRead> {
    reader: R,
    broadcaster: FrameBroadcaster,
}

impl<R: BufRead> ReplaySource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            broadcaster: FrameBroadcaster::new(),
        }
    }

    /// Notifies observers of every frame in the input. Returns the number of frames delivered.
    pub fn run(&mut self) -> Result<usize, SourceError> {
        if self.broadcaster.is_empty() {
            log::warn!("Replay started without observers.");
        }

        let mut delivered: usize = 0;
        let mut buffer = String::new();
        let mut line_number: usize = 0;
        loop {
            buffer.clear();
            if self.reader.read_line(&mut buffer)? == 0 {
                break;
            }
            line_number += 1;

            let line = buffer.trim();
            if line.is_empty() {
                continue;
            }

            let frame: DecodedFrame = match serde_json::from_str(line) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("Line {line_number}: frame skipped. Error: {err}");
                    continue;
                },
            };

            log::trace!("Frame #{} read from line {line_number}", frame.number);
            self.broadcaster.notify(&frame);
            delivered += 1;
        }

        Ok(delivered)
    }
}

impl<R: BufRead> FrameSubject for ReplaySource<R> {
    fn register(&mut self, observer: Box<dyn FrameObserver>) {
        self.broadcaster.register(observer);
    }
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO Error.")]
    IOError(#[from] std::io::Error),
}

impl SourceError {
    pub fn additional_info(&self) -> Option<String> {
        match self {
            SourceError::IOError(err) => Some(err.to_string()),
        }
    }
}

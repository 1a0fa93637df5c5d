use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use thiserror::Error;

/// Line-oriented destination of rendered frames.
pub trait OutputSink {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError>;

    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO Error.")]
    IOError(#[from] std::io::Error),
}

impl SinkError {
    pub fn additional_info(&self) -> Option<String> {
        match self {
            SinkError::IOError(err) => Some(err.to_string()),
        }
    }
}

/// Sink over any byte stream: stdout, a file, a socket.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// In-memory sink. Clones share one buffer, so a handle kept aside
/// sees what an observer wrote.
#[derive(Clone, Debug, Default)]
pub struct LineCollector {
    lines: Rc<RefCell<Vec<String>>>,
}

impl LineCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn take(&self) -> Vec<String> {
        self.lines.take()
    }
}

impl OutputSink for LineCollector {
    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}

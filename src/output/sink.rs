//! Line delivery strategies for rendered output.
//!
//! Row construction is independent of how a finished line reaches its
//! destination. [`LineSink`] isolates the delivery step so the streamed
//! and interactive strategies share all of the rendering code and differ
//! only in where a line goes.

use std::io::Write;

use console::Term;

use crate::Result;

/// Receives rendered lines one at a time, in emission order.
pub trait LineSink {
    /// Deliver one finished line (without trailing newline).
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Appends lines in natural scroll order to any writer.
///
/// Safe to redirect or pipe; output order is the row order.
pub struct StreamSink<W: Write> {
    writer: W,
}

impl<W: Write> StreamSink<W> {
    /// Wrap a writer (stdout, a file, a buffer).
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for StreamSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

/// Writes through the attached terminal.
///
/// In overwrite mode each line position is cleared before the line is
/// written, so a fixed-width table replaces stale screen content in
/// place. Overwrite mode only engages when stdout is an interactive
/// terminal; redirected output degrades to plain streaming, which keeps
/// the rendered lines identical either way.
pub struct TermSink {
    term: Term,
    overwrite: bool,
}

impl TermSink {
    /// Sink on stdout. `overwrite` requests in-place line delivery; it is
    /// ignored when stdout is not a terminal.
    pub fn stdout(overwrite: bool) -> Self {
        let term = Term::stdout();
        let overwrite = overwrite && term.is_term();
        Self { term, overwrite }
    }
}

impl LineSink for TermSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        if self.overwrite {
            self.term.clear_line()?;
        }
        self.term.write_line(line)?;
        Ok(())
    }
}

/// Captures lines in memory, for tests and programmatic consumers.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured lines in emission order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl LineSink for MemorySink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

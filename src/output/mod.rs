//! Output formatting: render the merged table as text lines.
//!
//! This module handles the fourth and final stage of the pipeline -
//! walking the merged table and the allocated widths into finished
//! lines, delivered one at a time through a sink. It provides:
//!
//! - **render**: banner, header rule, fill-down, truncation/padding,
//!   empty-row suppression, summary line
//! - **LineSink**: the delivery seam, with streamed ([`StreamSink`]),
//!   terminal ([`TermSink`]) and in-memory ([`MemorySink`]) strategies
//!
//! Output is produced line by line and never buffered whole, so large
//! result sets stream.

pub mod render;
pub mod sink;

pub use render::{render, RenderStats};
pub use sink::{LineSink, MemorySink, StreamSink, TermSink};

use console::Term;

/// Default width when no terminal is attached.
const FALLBACK_WIDTH: usize = 80;

/// Column count of the attached terminal, or 80 when stdout is not a
/// terminal (e.g. redirected to a file).
pub fn detect_width() -> usize {
    let term = Term::stdout();
    if term.is_term() {
        let (_, cols) = term.size();
        cols as usize
    } else {
        FALLBACK_WIDTH
    }
}

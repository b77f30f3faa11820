//! Non-fatal per-document diagnostics.
//!
//! Problems local to one document never abort a query: evaluation
//! failures and shape mismatches are recorded here and surfaced to the
//! caller alongside the rendered output, while processing continues with
//! the next document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What went wrong with a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Query evaluation failed for the document
    EvaluationFailed,
    /// The document's result shape did not fit the table
    ShapeMismatch,
}

/// A single recoverable problem tied to one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Label of the affected document (e.g. its file name)
    pub label: String,
    /// Failure category
    pub kind: DiagnosticKind,
    /// Human-readable reason
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.message)
    }
}

/// Ordered collection of diagnostics for one query run.
///
/// Entries are kept in processing order, so they correlate with the
/// document sequence the caller supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic for the named document.
    pub fn record(
        &mut self,
        label: impl Into<String>,
        kind: DiagnosticKind,
        message: impl Into<String>,
    ) {
        self.entries.push(Diagnostic {
            label: label.into(),
            kind,
            message: message.into(),
        });
    }

    /// All recorded entries, in processing order.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

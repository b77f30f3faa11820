//! Error types for querytab

use thiserror::Error;

/// Errors that can occur while collecting or rendering query results
#[derive(Error, Debug)]
pub enum QuerytabError {
    /// A document could not be evaluated
    #[error("document '{label}': {message}")]
    Document { label: String, message: String },

    /// Failed to write rendered output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuerytabError {
    /// Wrap an evaluation failure for the named document.
    pub fn document(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Document {
            label: label.into(),
            message: message.into(),
        }
    }
}

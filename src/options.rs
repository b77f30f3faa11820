//! Per-query rendering configuration.
//!
//! This module contains the configuration type that controls how one
//! query's results are merged and rendered. Options are fixed for the
//! life of a query.

use serde::{Deserialize, Serialize};

/// Rendering configuration for a single query.
///
/// All flags default to off: no label column, empty rows suppressed,
/// one row per match, cells free-flowing past their column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Show a leading "File Name" column with one label per document
    pub show_file_labels: bool,
    /// Emit rows even when all their data cells are empty
    pub display_empty_rows: bool,
    /// Reduce each document's matches to a single row, joining distinct
    /// values per column with ", "
    pub flatten_results: bool,
    /// Cut cell contents to the allocated column width
    pub truncate_long_items: bool,
}

impl RenderOptions {
    /// Create options with all flags off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the file label column
    pub fn with_file_labels(mut self, show: bool) -> Self {
        self.show_file_labels = show;
        self
    }

    /// Builder: set empty row display
    pub fn with_empty_rows(mut self, display: bool) -> Self {
        self.display_empty_rows = display;
        self
    }

    /// Builder: set per-document flattening
    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten_results = flatten;
        self
    }

    /// Builder: set cell truncation
    pub fn with_truncate(mut self, truncate: bool) -> Self {
        self.truncate_long_items = truncate;
        self
    }
}

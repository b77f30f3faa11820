//! Merging per-document matrices into a single table.

use serde::{Deserialize, Serialize};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::query::result::QueryResult;

/// Header text for the leading label column.
pub const FILE_LABEL_HEADER: &str = "File Name";

/// The single rectangular grid produced by stacking all per-document
/// results for one query. Row 0 is the header row; every grid position
/// holds a string (empty for blank cells).
///
/// Built exclusively by [`merge`] and immutable afterwards; the renderer
/// consumes it and the caller discards it before the next query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedTable {
    query: String,
    cols: usize,
    grid: Vec<Vec<String>>,
}

impl MergedTable {
    /// The query expression this table was built for.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows, header row included. Always at least 1.
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Cell value at `(row, col)`; row 0 is the header row.
    pub fn get(&self, row: usize, col: usize) -> &str {
        &self.grid[row][col]
    }
}

/// Merge a query's per-document matrices into one table.
///
/// Row 0 carries the headers (preceded by [`FILE_LABEL_HEADER`] when the
/// label column is on). Each document then contributes its rows at the
/// running offset: flattened to one row when the flatten option is set
/// and the matrix has more than one row, a single blank placeholder row
/// when it has none. Cells that fall outside the declared column count
/// are dropped and reported, never fatal.
pub fn merge(result: &QueryResult, diagnostics: &mut Diagnostics) -> MergedTable {
    let options = result.options();
    let total_cols = result.total_cols();
    let label_col = usize::from(options.show_file_labels);
    let mut grid = vec![vec![String::new(); total_cols]; result.total_rows() + 1];

    if options.show_file_labels {
        grid[0][0] = FILE_LABEL_HEADER.to_string();
    }
    for (i, header) in result.headers().iter().enumerate() {
        grid[0][label_col + i] = header.clone();
    }

    let mut cursor = 1;
    for (label, matrix) in result.documents() {
        let flat;
        let matrix = if options.flatten_results && matrix.rows() > 1 {
            flat = matrix.flattened();
            &flat
        } else {
            matrix
        };

        // Every document claims at least one row, so a matchless
        // document still shows its label on a blank line.
        if options.show_file_labels {
            grid[cursor][0] = label.to_string();
        }

        let mut dropped = 0;
        for row in 0..matrix.rows() {
            for col in 0..matrix.cols() {
                let target = label_col + col;
                if cursor + row >= grid.len() || target >= total_cols {
                    dropped += 1;
                    continue;
                }
                grid[cursor + row][target] = matrix.get(row, col).to_string();
            }
        }
        if dropped > 0 {
            diagnostics.record(
                label,
                DiagnosticKind::ShapeMismatch,
                format!(
                    "{} value(s) fell outside the {}-column table and were dropped",
                    dropped, total_cols
                ),
            );
        }

        cursor += matrix.rows().max(1);
    }

    MergedTable {
        query: result.query().to_string(),
        cols: total_cols,
        grid,
    }
}

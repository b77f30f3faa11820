//! Rectangular per-document result grids.

use serde::{Deserialize, Serialize};

/// A rectangular grid of single-line cell values for one document.
///
/// Dimensions are fixed at construction; absent values are empty strings
/// rather than a nullable sentinel, so aggregation and rendering never
/// branch on missing cells. Newlines and carriage returns are stripped
/// when a cell is written: every stored cell is single-line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<String>,
}

impl DocMatrix {
    /// Create a `rows x cols` matrix of empty cells. Zero rows is a valid
    /// shape for a document without matches.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![String::new(); rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell value at `(row, col)`.
    ///
    /// Panics when the position is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> &str {
        &self.cells[row * self.cols + col]
    }

    /// Write a cell, stripping newline and carriage return characters.
    ///
    /// Panics when the position is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: &str) {
        self.cells[row * self.cols + col] = strip_line_breaks(value);
    }

    /// Reduce to a single row by joining each column's distinct,
    /// non-empty values in first-seen order with `", "`. A column with
    /// only empty values becomes an empty cell.
    pub fn flattened(&self) -> DocMatrix {
        let mut flat = DocMatrix::new(1, self.cols);
        for col in 0..self.cols {
            let mut seen: Vec<&str> = Vec::new();
            for row in 0..self.rows {
                let value = self.get(row, col);
                if !value.is_empty() && !seen.contains(&value) {
                    seen.push(value);
                }
            }
            flat.set(0, col, &seen.join(", "));
        }
        flat
    }
}

fn strip_line_breaks(value: &str) -> String {
    if value.contains(['\n', '\r']) {
        value.replace(['\n', '\r'], "")
    } else {
        value.to_string()
    }
}

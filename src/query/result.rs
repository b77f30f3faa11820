//! Per-query accumulating state.
//!
//! A `QueryResult` collects one query's worth of per-document matrices
//! as the batch is processed, then hands the whole set to the merge step.
//! It is created when a query begins, consumed once, and discarded before
//! the next query starts; no state survives across queries.

use serde::{Deserialize, Serialize};

use crate::options::RenderOptions;
use crate::query::matrix::DocMatrix;

/// One query's accumulated results across a document batch.
///
/// Documents are kept in processing order; labels and matrices are
/// aligned by index. `headers` is set once, from the first document that
/// produces any matches, and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    query: String,
    options: RenderOptions,
    headers: Vec<String>,
    labels: Vec<String>,
    matrices: Vec<DocMatrix>,
}

impl QueryResult {
    /// Start accumulating results for a query expression.
    pub fn new(query: impl Into<String>, options: RenderOptions) -> Self {
        Self {
            query: query.into(),
            options,
            headers: Vec::new(),
            labels: Vec::new(),
            matrices: Vec::new(),
        }
    }

    /// The query expression, printed verbatim in the banner.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Rendering configuration for this query.
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Column headers, empty until some document matches.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Assign headers. The first assignment wins; later calls are
    /// ignored so headers stay stable for the life of the query.
    pub fn set_headers(&mut self, headers: Vec<String>) {
        if self.headers.is_empty() {
            self.headers = headers;
        }
    }

    /// Append one document's label and matrix.
    pub fn push_document(&mut self, label: impl Into<String>, matrix: DocMatrix) {
        self.labels.push(label.into());
        self.matrices.push(matrix);
    }

    /// Number of documents accumulated so far.
    pub fn document_count(&self) -> usize {
        self.matrices.len()
    }

    /// Labels and matrices in processing order.
    pub fn documents(&self) -> impl Iterator<Item = (&str, &DocMatrix)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.matrices.iter())
    }

    /// Data rows the merged table will hold. Flattening yields one row
    /// per document; otherwise rows sum up, with a matchless document
    /// still claiming one placeholder row.
    pub fn total_rows(&self) -> usize {
        if self.options.flatten_results {
            self.matrices.len()
        } else {
            self.matrices
                .iter()
                .map(|m| m.rows().max(1))
                .sum()
        }
    }

    /// Columns of the merged table, including the label column when the
    /// file label option is on.
    pub fn total_cols(&self) -> usize {
        if self.options.show_file_labels {
            self.headers.len() + 1
        } else {
            self.headers.len()
        }
    }
}

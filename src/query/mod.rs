//! Per-query accumulation: one matrix per document.
//!
//! This module handles the second stage of the pipeline - collecting the
//! evaluated matrices for a single query as the document batch is
//! processed. It provides:
//!
//! - **DocMatrix**: rectangular grid of single-line cells for one document
//! - **QueryResult**: a query's accumulating state (headers, labels,
//!   matrices, options), consumed once by the merge step
//!
//! ## Example
//!
//! ```rust,ignore
//! use querytab::query::{DocMatrix, QueryResult};
//!
//! let mut result = QueryResult::new("//Title/*", options);
//! result.set_headers(vec!["Id".into(), "Name".into()]);
//! result.push_document("a.xml", matrix);
//! // result.total_rows() / result.total_cols() size the merged table
//! ```

pub mod matrix;
pub mod result;

pub use matrix::DocMatrix;
pub use result::QueryResult;

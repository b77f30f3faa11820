//! # querytab
//!
//! Tabulate path-query matches from document batches into aligned,
//! fixed-width text tables for a terminal.
//!
//! ## Overview
//!
//! One query runs against a batch of structured documents; each document
//! yields matches grouped by field/tag name. querytab reconciles those
//! ragged per-document shapes into a single rectangular table, solves
//! column widths under a terminal-width budget, and streams the rendered
//! rows line by line. Per-document failures never abort a query: they
//! are collected on a diagnostic channel while processing continues.
//!
//! Document parsing and query execution stay on the caller's side of the
//! [`QueryEvaluator`] seam - querytab starts where evaluated matches end.
//!
//! ## Features
//!
//! - **Ragged input, rectangular output**: documents with differing row
//!   counts (including none) stack into one table, keeping row/document
//!   correlation through an optional label column with fill-down
//! - **Flatten reduction**: per-document collapse of multi-row matches
//!   into one row of distinct, comma-joined values
//! - **Width allocation**: shortest-first greedy fit under a hard width
//!   budget, with graceful degradation when the terminal is too narrow
//! - **Truncate or free-flow**: cells cut to their column or left whole
//! - **Pluggable delivery**: streamed (redirect-safe) or interactive
//!   terminal sinks share the same rendering code
//!
//! ## Example
//!
//! ```rust
//! use querytab::{
//!     run_query, MatchGroup, MemorySink, QueryEvaluator, RenderOptions, Result,
//! };
//!
//! /// Documents carry their label and pre-grouped matches.
//! struct Catalog;
//!
//! impl QueryEvaluator for Catalog {
//!     type Document = (&'static str, Vec<MatchGroup>);
//!
//!     fn evaluate(&self, doc: &Self::Document, _query: &str) -> Result<Vec<MatchGroup>> {
//!         Ok(doc.1.clone())
//!     }
//!
//!     fn label(&self, doc: &Self::Document) -> String {
//!         doc.0.to_string()
//!     }
//! }
//!
//! let documents = vec![
//!     (
//!         "a.xml",
//!         vec![
//!             MatchGroup::new("Id", vec!["1".to_string(), "2".to_string()]),
//!             MatchGroup::new("Name", vec!["Foo".to_string(), "Bar".to_string()]),
//!         ],
//!     ),
//!     ("b.xml", vec![]),
//! ];
//!
//! let mut sink = MemorySink::new();
//! let report = run_query(
//!     &Catalog,
//!     &documents,
//!     "//Title/*",
//!     RenderOptions::new().with_file_labels(true),
//!     60,
//!     &mut sink,
//! )?;
//!
//! assert_eq!(report.displayed, 2); // b.xml's blank row is suppressed
//! assert_eq!(report.total, 3);
//! # Ok::<(), querytab::QuerytabError>(())
//! ```

pub mod diagnostics;
pub mod error;
pub mod options;
pub mod output;
pub mod pipeline;
pub mod query;
pub mod source;
pub mod table;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::QuerytabError;
pub use options::RenderOptions;
pub use output::{detect_width, render, LineSink, MemorySink, RenderStats, StreamSink, TermSink};
pub use pipeline::{run_query, QueryReport};
pub use query::{DocMatrix, QueryResult};
pub use source::{collect_query, group_headers, groups_to_matrix, MatchGroup, QueryEvaluator};
pub use table::{allocate_widths, merge, MergedTable, FILE_LABEL_HEADER};

/// Result type for querytab operations
pub type Result<T> = std::result::Result<T, QuerytabError>;

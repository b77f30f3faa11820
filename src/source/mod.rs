//! Document evaluation seam: obtain per-document match groups.
//!
//! This module handles the first stage of the pipeline - turning a
//! caller-supplied document batch into per-document matrices. Parsing
//! documents and executing the query language are the caller's concern,
//! reached through the [`QueryEvaluator`] trait; this stage owns the
//! batch loop, header discovery, and per-document error recovery.
//!
//! ## Example
//!
//! ```rust,ignore
//! use querytab::source::{collect_query, QueryEvaluator};
//!
//! let result = collect_query(&evaluator, &documents, "//Title/*", options, &mut diags);
//! // result holds one matrix per document, ready to merge
//! ```

pub mod collect;
pub mod groups;

pub use collect::{collect_query, QueryEvaluator};
pub use groups::{group_headers, groups_to_matrix, MatchGroup};

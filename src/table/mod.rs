//! Aggregation: one rectangular table per query.
//!
//! This module handles the third stage of the pipeline - reconciling the
//! ragged per-document matrices into a single grid and solving the
//! column width problem under the terminal budget. It provides:
//!
//! - **MergedTable**: the stacked grid, header row included
//! - **merge**: the aggregation step (flatten reduction, label column,
//!   bounds-checked copy)
//! - **allocate_widths**: shortest-first greedy width allocation with a
//!   late shrink backstop
//!
//! ## Example
//!
//! ```rust,ignore
//! use querytab::table::{allocate_widths, merge};
//!
//! let table = merge(&result, &mut diags);
//! let widths = allocate_widths(&table, 120, result.options().truncate_long_items);
//! ```

pub mod merge;
pub mod widths;

pub use merge::{merge, MergedTable, FILE_LABEL_HEADER};
pub use widths::allocate_widths;

//! One-shot composition of the pipeline stages.
//!
//! `run_query` wires collect → merge → allocate → render for a single
//! query and reports what happened. Queries are strictly sequential:
//! each call owns its accumulating state exclusively and drops it before
//! returning, so nothing carries over between queries.

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::options::RenderOptions;
use crate::output::render::render;
use crate::output::sink::LineSink;
use crate::source::collect::{collect_query, QueryEvaluator};
use crate::table::merge::merge;
use crate::table::widths::allocate_widths;
use crate::Result;

/// Outcome of one rendered query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryReport {
    /// Data rows actually emitted
    pub displayed: usize,
    /// Data rows in the merged table
    pub total: usize,
    /// Documents processed
    pub documents: usize,
    /// Non-fatal problems encountered along the way
    pub diagnostics: Diagnostics,
}

/// Run one query over a document batch and render the result table.
///
/// Documents are evaluated in order through the [`QueryEvaluator`] seam;
/// per-document failures are recorded in the report's diagnostics and do
/// not abort the run. An empty batch is not an error: it renders a
/// header-only table with a `0 out of 0` summary. Only sink I/O failures
/// propagate as `Err`.
pub fn run_query<E: QueryEvaluator>(
    evaluator: &E,
    documents: &[E::Document],
    query: &str,
    options: RenderOptions,
    total_width: usize,
    sink: &mut dyn LineSink,
) -> Result<QueryReport> {
    let mut diagnostics = Diagnostics::new();
    let result = collect_query(evaluator, documents, query, options, &mut diagnostics);
    let table = merge(&result, &mut diagnostics);
    let widths = allocate_widths(&table, total_width, options.truncate_long_items);
    let stats = render(&table, &widths, options, total_width, sink)?;

    Ok(QueryReport {
        displayed: stats.displayed,
        total: stats.total,
        documents: documents.len(),
        diagnostics,
    })
}

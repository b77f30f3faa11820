//! Driving one query across a batch of documents.
//!
//! Evaluation itself lives behind the [`QueryEvaluator`] seam: the
//! caller owns document parsing and query execution, this module owns
//! the processing loop and its error policy. A document that fails to
//! evaluate contributes a diagnostic and a placeholder row, never an
//! aborted query.

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::options::RenderOptions;
use crate::query::matrix::DocMatrix;
use crate::query::result::QueryResult;
use crate::source::groups::{group_headers, groups_to_matrix, MatchGroup};
use crate::Result;

/// Evaluates queries against caller-owned documents.
///
/// Implementations group matches by field/tag name in sibling order.
/// Returning `Err` marks the document as failed for the current query;
/// the batch continues with the next document.
pub trait QueryEvaluator {
    /// The caller's document representation.
    type Document;

    /// Run a query against one document, grouped by field/tag name.
    fn evaluate(&self, document: &Self::Document, query: &str) -> Result<Vec<MatchGroup>>;

    /// Display label for the document (e.g. its file name).
    fn label(&self, document: &Self::Document) -> String;
}

/// Run one query over a document batch, in order, accumulating a
/// [`QueryResult`].
///
/// Headers come from the first document that produces any matches.
/// Failed documents are recorded in `diagnostics` and claim a
/// placeholder row; ragged match groups are padded (and reported) by
/// [`groups_to_matrix`].
pub fn collect_query<E: QueryEvaluator>(
    evaluator: &E,
    documents: &[E::Document],
    query: &str,
    options: RenderOptions,
    diagnostics: &mut Diagnostics,
) -> QueryResult {
    let mut result = QueryResult::new(query, options);

    for document in documents {
        let label = evaluator.label(document);
        match evaluator.evaluate(document, query) {
            Ok(groups) => {
                if result.headers().is_empty() && !groups.is_empty() {
                    result.set_headers(group_headers(&groups));
                }
                let (matrix, padded) = groups_to_matrix(&groups);
                if padded {
                    diagnostics.record(
                        label.as_str(),
                        DiagnosticKind::ShapeMismatch,
                        "match groups have unequal lengths; short groups padded with empty cells",
                    );
                }
                result.push_document(label, matrix);
            }
            Err(err) => {
                diagnostics.record(
                    label.as_str(),
                    DiagnosticKind::EvaluationFailed,
                    err.to_string(),
                );
                result.push_document(label, DocMatrix::new(0, 0));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuerytabError;

    /// Evaluator over pre-grouped fixtures; a `None` payload fails.
    struct FixtureEvaluator;

    type Fixture = (&'static str, Option<Vec<MatchGroup>>);

    impl QueryEvaluator for FixtureEvaluator {
        type Document = Fixture;

        fn evaluate(&self, document: &Fixture, _query: &str) -> Result<Vec<MatchGroup>> {
            document
                .1
                .clone()
                .ok_or_else(|| QuerytabError::document(document.0, "parse failure"))
        }

        fn label(&self, document: &Fixture) -> String {
            document.0.to_string()
        }
    }

    fn matched(values: &[(&str, &[&str])]) -> Option<Vec<MatchGroup>> {
        Some(
            values
                .iter()
                .map(|(name, items)| {
                    MatchGroup::new(*name, items.iter().map(|v| v.to_string()).collect())
                })
                .collect(),
        )
    }

    #[test]
    fn test_headers_from_first_matching_document() {
        let docs: Vec<Fixture> = vec![
            ("a.xml", matched(&[])),
            ("b.xml", matched(&[("Id", &["1"]), ("Name", &["Foo"])])),
            ("c.xml", matched(&[("Other", &["x"])])),
        ];
        let mut diags = Diagnostics::new();
        let result = collect_query(
            &FixtureEvaluator,
            &docs,
            "//Title/*",
            RenderOptions::new(),
            &mut diags,
        );

        assert_eq!(result.headers(), ["Id", "Name"]);
        assert_eq!(result.document_count(), 3);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_failed_document_records_diagnostic_and_continues() {
        let docs: Vec<Fixture> = vec![
            ("broken.xml", None),
            ("ok.xml", matched(&[("Id", &["1"])])),
        ];
        let mut diags = Diagnostics::new();
        let result = collect_query(
            &FixtureEvaluator,
            &docs,
            "//Id",
            RenderOptions::new(),
            &mut diags,
        );

        assert_eq!(diags.len(), 1);
        assert_eq!(diags.entries()[0].label, "broken.xml");
        assert_eq!(diags.entries()[0].kind, DiagnosticKind::EvaluationFailed);
        // the failed document still holds its slot in the batch
        assert_eq!(result.document_count(), 2);
        assert_eq!(result.headers(), ["Id"]);
    }

    #[test]
    fn test_ragged_groups_report_shape_mismatch() {
        let docs: Vec<Fixture> = vec![(
            "a.xml",
            matched(&[("Id", &["1", "2"]), ("Name", &["Foo"])]),
        )];
        let mut diags = Diagnostics::new();
        collect_query(
            &FixtureEvaluator,
            &docs,
            "//Title/*",
            RenderOptions::new(),
            &mut diags,
        );

        assert_eq!(diags.len(), 1);
        assert_eq!(diags.entries()[0].kind, DiagnosticKind::ShapeMismatch);
    }
}

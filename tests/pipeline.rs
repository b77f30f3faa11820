//! End-to-end tests for the query rendering pipeline

use querytab::{
    collect_query, merge, run_query, DiagnosticKind, Diagnostics, MatchGroup, MemorySink,
    QueryEvaluator, QuerytabError, RenderOptions, Result,
};

/// A pre-evaluated document: label plus grouped matches, or a marker
/// that evaluation should fail.
struct Doc {
    label: &'static str,
    groups: Option<Vec<MatchGroup>>,
}

impl Doc {
    fn with_matches(label: &'static str, groups: &[(&str, &[&str])]) -> Self {
        Self {
            label,
            groups: Some(
                groups
                    .iter()
                    .map(|(name, values)| {
                        MatchGroup::new(*name, values.iter().map(|v| v.to_string()).collect())
                    })
                    .collect(),
            ),
        }
    }

    fn empty(label: &'static str) -> Self {
        Self::with_matches(label, &[])
    }

    fn failing(label: &'static str) -> Self {
        Self {
            label,
            groups: None,
        }
    }
}

struct FakeEvaluator;

impl QueryEvaluator for FakeEvaluator {
    type Document = Doc;

    fn evaluate(&self, document: &Doc, _query: &str) -> Result<Vec<MatchGroup>> {
        document
            .groups
            .clone()
            .ok_or_else(|| QuerytabError::document(document.label, "malformed document"))
    }

    fn label(&self, document: &Doc) -> String {
        document.label.to_string()
    }
}

fn sample_docs() -> Vec<Doc> {
    vec![
        Doc::with_matches("a.xml", &[("Id", &["1", "2"]), ("Name", &["Foo", "Bar"])]),
        Doc::empty("b.xml"),
    ]
}

#[test]
fn test_two_documents_with_labels() {
    let mut sink = MemorySink::new();
    let report = run_query(
        &FakeEvaluator,
        &sample_docs(),
        "//Title/*",
        RenderOptions::new().with_file_labels(true),
        40,
        &mut sink,
    )
    .unwrap();

    let lines = sink.lines();
    assert_eq!(lines[0], "Query: //Title/*");

    // the label fills down over a.xml's second row; b.xml stays hidden
    let data: Vec<&String> = lines.iter().filter(|l| l.contains('|')).collect();
    assert_eq!(data.len(), 3);
    assert!(data[0].starts_with("File Name"));
    assert!(data[1].starts_with("a.xml") && data[1].contains("Foo"));
    assert!(data[2].starts_with("a.xml") && data[2].contains("Bar"));

    assert_eq!(report.displayed, 2);
    assert_eq!(report.total, 3); // 2 rows from a.xml + 1 placeholder for b.xml
    assert_eq!(
        lines.last().unwrap(),
        "Displaying 2 out of 3 total items."
    );
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_flatten_collapses_each_document() {
    let mut sink = MemorySink::new();
    let report = run_query(
        &FakeEvaluator,
        &sample_docs(),
        "//Title/*",
        RenderOptions::new().with_file_labels(true).with_flatten(true),
        40,
        &mut sink,
    )
    .unwrap();

    assert!(sink
        .lines()
        .iter()
        .any(|l| l.contains("1, 2") && l.contains("Foo, Bar")));
    assert_eq!(report.displayed, 1);
    assert_eq!(report.total, 2); // one row per document when flattened
}

#[test]
fn test_empty_rows_shown_on_request() {
    let mut sink = MemorySink::new();
    let report = run_query(
        &FakeEvaluator,
        &sample_docs(),
        "//Title/*",
        RenderOptions::new().with_file_labels(true).with_empty_rows(true),
        40,
        &mut sink,
    )
    .unwrap();

    assert!(sink.lines().iter().any(|l| l.starts_with("b.xml")));
    assert_eq!(report.displayed, 3);
}

#[test]
fn test_failing_document_is_reported_not_fatal() {
    let docs = vec![
        Doc::failing("broken.xml"),
        Doc::with_matches("ok.xml", &[("Id", &["7"])]),
    ];
    let mut sink = MemorySink::new();
    let report = run_query(
        &FakeEvaluator,
        &docs,
        "//Id",
        RenderOptions::new().with_file_labels(true),
        40,
        &mut sink,
    )
    .unwrap();

    assert_eq!(report.documents, 2);
    assert_eq!(report.diagnostics.len(), 1);
    let diag = &report.diagnostics.entries()[0];
    assert_eq!(diag.label, "broken.xml");
    assert_eq!(diag.kind, DiagnosticKind::EvaluationFailed);
    assert!(diag.message.contains("malformed document"));

    // the good document still rendered
    assert!(sink.lines().iter().any(|l| l.starts_with("ok.xml")));
}

#[test]
fn test_no_documents_renders_header_only() {
    let mut sink = MemorySink::new();
    let report = run_query(
        &FakeEvaluator,
        &[],
        "//Title/*",
        RenderOptions::new(),
        40,
        &mut sink,
    )
    .unwrap();

    assert_eq!(report.documents, 0);
    assert_eq!(report.displayed, 0);
    assert_eq!(report.total, 0);
    assert_eq!(
        sink.lines().last().unwrap(),
        "Displaying 0 out of 0 total items."
    );
}

#[test]
fn test_truncated_output_fits_width_budget() {
    let docs = vec![Doc::with_matches(
        "a.xml",
        &[
            ("Synopsis", &["a very long synopsis that will not fit as is"]),
            ("Notes", &["another sprawling cell value worth clipping"]),
        ],
    )];
    let total_width = 30;
    let mut sink = MemorySink::new();
    run_query(
        &FakeEvaluator,
        &docs,
        "//Synopsis",
        RenderOptions::new().with_truncate(true),
        total_width,
        &mut sink,
    )
    .unwrap();

    for line in sink.lines().iter().filter(|l| l.contains('|')) {
        assert!(
            line.chars().count() <= total_width,
            "line wider than budget: {:?}",
            line
        );
    }
}

#[test]
fn test_merged_table_serializes_to_json() {
    let mut diags = Diagnostics::new();
    let result = collect_query(
        &FakeEvaluator,
        &sample_docs(),
        "//Title/*",
        RenderOptions::new().with_file_labels(true),
        &mut diags,
    );
    let table = merge(&result, &mut diags);

    let json = serde_json::to_value(&table).expect("merged table serializes");
    assert_eq!(json["query"], "//Title/*");
    assert_eq!(json["grid"][0][0], "File Name");
    assert_eq!(json["grid"][0][1], "Id");
    assert_eq!(json["grid"][1][2], "Foo");
}

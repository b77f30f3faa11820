//! Grouped matches and their positional table shape.

use serde::{Deserialize, Serialize};

use crate::query::matrix::DocMatrix;

/// The matches for a query within one document, partitioned by field or
/// tag name, in original sibling order.
///
/// Groups are interpreted positionally: group *k*, item *i* contributes
/// the cell at row *i*, column *k*. This assumes sibling structures
/// repeat with the same shape; see [`groups_to_matrix`] for how unequal
/// group lengths are handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchGroup {
    /// Field or tag name; becomes the column header
    pub name: String,
    /// Matched values in sibling order
    pub values: Vec<String>,
}

impl MatchGroup {
    /// Create a group from a name and its matched values.
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Column headers derived from a document's groups, in group order.
pub fn group_headers(groups: &[MatchGroup]) -> Vec<String> {
    groups.iter().map(|g| g.name.clone()).collect()
}

/// Lay groups out positionally as a matrix.
///
/// Row count is the longest group's length; shorter groups are padded
/// with empty cells. The second return value reports whether padding
/// occurred, so callers can record the shape mismatch.
pub fn groups_to_matrix(groups: &[MatchGroup]) -> (DocMatrix, bool) {
    let cols = groups.len();
    let rows = groups.iter().map(|g| g.values.len()).max().unwrap_or(0);
    let padded = groups.iter().any(|g| g.values.len() != rows);

    let mut matrix = DocMatrix::new(rows, cols);
    for (col, group) in groups.iter().enumerate() {
        for (row, value) in group.values.iter().enumerate() {
            matrix.set(row, col, value);
        }
    }
    (matrix, padded)
}

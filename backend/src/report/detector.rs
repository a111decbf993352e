//! Picks the column the ratings chart averages over.
//!
//! The heuristic is a plain substring match on lower-cased column names. It
//! has known false positives (`avg_runtime` matches `avg`) and those are
//! kept as-is.

use common::model::column::ColumnDescriptor;

/// Substrings that mark a column as rating-like. Order does not matter within
/// one column.
pub const RATING_KEYWORDS: [&str; 5] = ["rating", "score", "vote", "avg", "stars"];

/// A column name that came out of [`detect_rating_column`].
///
/// This is the only value the chart query will splice into SQL text. It can
/// only be built from an inspected schema, so the name always refers to a
/// column that existed when the schema was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedColumn(String);

impl DetectedColumn {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn into_name(self) -> String {
        self.0
    }
}

/// Returns the first column, in table order, whose name contains any of
/// [`RATING_KEYWORDS`]. Later qualifying columns are never looked at.
pub fn detect_rating_column(columns: &[ColumnDescriptor]) -> Option<DetectedColumn> {
    let mut ordered: Vec<&ColumnDescriptor> = columns.iter().collect();
    ordered.sort_by_key(|c| c.position);

    ordered
        .into_iter()
        .find(|c| is_rating_like(&c.name))
        .map(|c| DetectedColumn(c.name.clone()))
}

fn is_rating_like(name: &str) -> bool {
    let lower = name.to_lowercase();
    RATING_KEYWORDS.iter().any(|k| lower.contains(k))
}

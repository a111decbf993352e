use crate::model::record::CatalogRecord;
use serde::{Deserialize, Serialize};

/// Highest box office figure in the table, or the sentinel when it could not be read.
///
/// `Unavailable` covers an empty table as well as a failed query, and renders
/// differently from a genuine `Value(0.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum TopMeasure {
    Unavailable,
    Value(f64),
}

/// Bar chart data for the ratings card: parallel label and value sequences.
///
/// A title whose rating cells are all NULL averages to NULL, hence `Option`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<(String, Option<f64>)> for ChartSeries {
    fn from_iter<I: IntoIterator<Item = (String, Option<f64>)>>(iter: I) -> Self {
        let (labels, values) = iter.into_iter().unzip();
        Self { labels, values }
    }
}

/// Everything the dashboard needs for one render.
///
/// Every field is always populated; read failures show up as the documented
/// defaults (0, `Unavailable`, empty sequences), never as a missing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPayload {
    pub total_records: u64,
    pub top_measure: TopMeasure,
    /// `top_measure` formatted for display, e.g. `₹1,234,567` or `—`.
    pub top_measure_display: String,
    pub preview: Vec<CatalogRecord>,
    pub chart: ChartSeries,
    /// Column the chart averages, when one was detected.
    pub rating_column: Option<String>,
}

use serde::{Deserialize, Serialize};

/// A single catalog entry as shown in the ranked preview.
///
/// Only the fixed display columns are carried here. Any other column of the
/// table is passed through by the CSV export and never reaches this struct.
///
/// The engine does not own the table schema, so every display column is
/// optional and decoded leniently: a REAL `year` is truncated, a numeric
/// `imdb_id` becomes text, and cells that cannot be read as the expected kind
/// come back as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub movie_id: Option<i64>,
    pub title: String,
    pub year: Option<i64>,
    pub imdb_id: Option<String>,
    /// Box office figure, already coerced to `0` when the stored value is NULL.
    pub box_office: f64,
    pub runtime_minutes: Option<f64>,
    pub director: Option<String>,
}

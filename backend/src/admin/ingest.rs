//! Loads catalog rows from a CSV file into the table.
//!
//! The loader does not clean or convert values: each cell is handed to SQLite
//! as text (empty cells as NULL) and column affinity does the rest.

use crate::error::{ReportError, Result};
use crate::report::schema::table_columns;
use crate::store::{quote_ident, Store};
use log::{info, warn};
use regex::Regex;
use rusqlite::params_from_iter;
use std::path::PathBuf;

/// What a finished ingestion run loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    pub rows: usize,
    pub columns: Vec<String>,
    /// Source columns with no matching table column.
    pub skipped_columns: Vec<String>,
}

/// Populates or refreshes the catalog table.
pub trait IngestionPipeline: Send + Sync {
    fn run(&self, store: &Store) -> Result<IngestSummary>;
}

/// Replaces the table contents with the rows of one CSV file.
#[derive(Debug, Clone)]
pub struct CsvIngestion {
    source: PathBuf,
}

impl CsvIngestion {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Validate each CSV header cell: non-empty, letters, digits, marks, spaces,
/// `-` and `_` only.
fn validate_header_cells(headers: &csv::StringRecord, header_re: &Regex) -> Result<()> {
    for cell in headers.iter() {
        let f = cell.trim();
        if f.is_empty() {
            return Err(ReportError::InvalidHeader(
                "CSV header cells must not be empty".to_string(),
            ));
        }
        if !header_re.is_match(f) {
            return Err(ReportError::InvalidHeader(format!(
                "CSV header cell '{}' must contain only letters, digits, spaces, '-' or '_'",
                f
            )));
        }
    }
    Ok(())
}

impl IngestionPipeline for CsvIngestion {
    fn run(&self, store: &Store) -> Result<IngestSummary> {
        let mut reader = csv::Reader::from_path(&self.source)?;
        let headers = reader.headers()?.clone();

        let header_re = Regex::new(r"^[\p{L}\p{M}\p{N}\s\-_]+$")
            .map_err(|e| ReportError::InvalidHeader(format!("Regex error: {}", e)))?;
        validate_header_cells(&headers, &header_re)?;

        store.with_connection_mut(|conn| {
            // Only header names that exist in the live schema reach the SQL text.
            let known = table_columns(conn, store.table())?;
            if known.is_empty() {
                return Err(ReportError::InvalidHeader(format!(
                    "table '{}' has no columns; initialize the schema first",
                    store.table()
                )));
            }

            let mut kept: Vec<(usize, String)> = Vec::new();
            let mut skipped = Vec::new();
            for (idx, cell) in headers.iter().enumerate() {
                let cell = cell.trim();
                match known.iter().find(|c| c.name.eq_ignore_ascii_case(cell)) {
                    Some(col) => kept.push((idx, col.name.clone())),
                    None => skipped.push(cell.to_string()),
                }
            }
            if kept.is_empty() {
                return Err(ReportError::InvalidHeader(format!(
                    "no CSV column matches a column of '{}'",
                    store.table()
                )));
            }
            if !skipped.is_empty() {
                warn!("ingestion skipping unknown column(s): {:?}", skipped);
            }

            let column_list = kept
                .iter()
                .map(|(_, name)| quote_ident(name))
                .collect::<Vec<_>>()
                .join(", ");
            let placeholders = (1..=kept.len())
                .map(|i| format!("?{}", i))
                .collect::<Vec<_>>()
                .join(", ");
            let insert_sql = format!(
                "INSERT INTO {} ({}) VALUES ({})",
                store.quoted_table(),
                column_list,
                placeholders
            );

            let tx = conn.transaction()?;
            tx.execute(&format!("DELETE FROM {}", store.quoted_table()), [])?;
            let mut rows = 0usize;
            {
                let mut stmt = tx.prepare(&insert_sql)?;
                for record in reader.records() {
                    let record = record?;
                    let values = kept.iter().map(|(idx, _)| {
                        record
                            .get(*idx)
                            .map(str::trim)
                            .filter(|v| !v.is_empty())
                    });
                    stmt.execute(params_from_iter(values))?;
                    rows += 1;
                }
            }
            tx.commit()?;

            info!(
                "ingested {} row(s) from {:?} into {}",
                rows,
                self.source,
                store.table()
            );
            Ok(IngestSummary {
                rows,
                columns: kept.into_iter().map(|(_, name)| name).collect(),
                skipped_columns: skipped,
            })
        })
    }
}

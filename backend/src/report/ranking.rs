//! Bounded, ordered queries over the catalog table.
//!
//! Row limits are always bound as statement parameters. The only text ever
//! spliced into these statements is a quoted identifier: the configured table
//! name, and for the ratings chart a [`DetectedColumn`] taken from the live
//! schema.

use crate::error::Result;
use crate::report::detector::DetectedColumn;
use crate::store::quote_ident;
use common::model::record::CatalogRecord;
use common::model::report::ChartSeries;
use log::debug;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection};

/// A prepared-to-run ranking statement and the row cap bound into it.
#[derive(Debug, Clone)]
pub struct RankingQuery {
    sql: String,
    limit: u32,
}

impl RankingQuery {
    /// Fixed display columns ordered by box office, highest first.
    ///
    /// NULL box office counts as `0` for ordering and in the returned rows.
    /// Ties fall back to `rowid`, i.e. the order rows sit in the table.
    pub fn top_by_measure(table: &str, limit: u32) -> Self {
        let sql = format!(
            "SELECT movie_id, title, year, imdb_id, IFNULL(box_office, 0) AS box_office, \
             runtime_minutes, director \
             FROM {} \
             ORDER BY box_office DESC, rowid ASC \
             LIMIT ?1",
            quote_ident(table)
        );
        Self { sql, limit }
    }

    /// The highest box office figure alone, with the same NULL handling and
    /// ordering as [`RankingQuery::top_by_measure`]. No display column is
    /// selected, so their contents cannot affect the result.
    pub fn top_measure(table: &str) -> Self {
        let sql = format!(
            "SELECT IFNULL(box_office, 0) AS box_office \
             FROM {} \
             ORDER BY box_office DESC, rowid ASC \
             LIMIT ?1",
            quote_ident(table)
        );
        Self { sql, limit: 1 }
    }

    /// Per-title mean of the detected rating column, rounded to two places,
    /// highest first.
    pub fn rating_chart(table: &str, column: &DetectedColumn, limit: u32) -> Self {
        let sql = format!(
            "SELECT title, ROUND(AVG(CAST({col} AS REAL)), 2) AS avg_rating \
             FROM {table} \
             GROUP BY title \
             ORDER BY avg_rating DESC \
             LIMIT ?1",
            col = quote_ident(column.name()),
            table = quote_ident(table)
        );
        Self { sql, limit }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Runs a [`RankingQuery::top_by_measure`] statement.
    ///
    /// Cells are read by storage class rather than by declared type, so a
    /// table loaded with unexpected types still yields every row.
    pub fn records(&self, conn: &Connection) -> Result<Vec<CatalogRecord>> {
        debug!("ranking query (limit {}): {}", self.limit, self.sql);
        let mut stmt = conn.prepare(&self.sql)?;
        let rows = stmt
            .query_map(params![self.limit as i64], |row| {
                Ok(CatalogRecord {
                    movie_id: integer_cell(row.get_ref(0)?),
                    title: text_cell(row.get_ref(1)?).unwrap_or_default(),
                    year: integer_cell(row.get_ref(2)?),
                    imdb_id: text_cell(row.get_ref(3)?),
                    box_office: real_cell(row.get_ref(4)?).unwrap_or(0.0),
                    runtime_minutes: real_cell(row.get_ref(5)?),
                    director: text_cell(row.get_ref(6)?),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Runs a [`RankingQuery::top_measure`] statement. `None` when the table
    /// has no rows.
    pub fn measure(&self, conn: &Connection) -> Result<Option<f64>> {
        debug!("measure query: {}", self.sql);
        let mut stmt = conn.prepare(&self.sql)?;
        let mut rows = stmt.query(params![self.limit as i64])?;
        match rows.next()? {
            Some(row) => Ok(Some(real_cell(row.get_ref(0)?).unwrap_or(0.0))),
            None => Ok(None),
        }
    }

    /// Runs a [`RankingQuery::rating_chart`] statement.
    pub fn chart(&self, conn: &Connection) -> Result<ChartSeries> {
        debug!("chart query (limit {}): {}", self.limit, self.sql);
        let mut stmt = conn.prepare(&self.sql)?;
        let series = stmt
            .query_map(params![self.limit as i64], |row| {
                Ok((
                    text_cell(row.get_ref(0)?).unwrap_or_default(),
                    real_cell(row.get_ref(1)?),
                ))
            })?
            .collect::<std::result::Result<ChartSeries, _>>()?;
        Ok(series)
    }
}

/// Whole-number reading of a cell. Reals are truncated, numeric text is
/// parsed, anything else is `None`.
fn integer_cell(value: ValueRef<'_>) -> Option<i64> {
    match value {
        ValueRef::Integer(i) => Some(i),
        ValueRef::Real(f) if f.is_finite() => Some(f.trunc() as i64),
        ValueRef::Text(t) => {
            let text = std::str::from_utf8(t).ok()?.trim();
            text.parse::<i64>().ok().or_else(|| {
                text.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.trunc() as i64)
            })
        }
        _ => None,
    }
}

/// Numeric reading of a cell. Numeric text is parsed, anything else is `None`.
fn real_cell(value: ValueRef<'_>) -> Option<f64> {
    match value {
        ValueRef::Integer(i) => Some(i as f64),
        ValueRef::Real(f) => Some(f),
        ValueRef::Text(t) => std::str::from_utf8(t).ok()?.trim().parse().ok(),
        _ => None,
    }
}

/// Text reading of a cell. Numbers are rendered, NULL is `None`.
fn text_cell(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    }
}

/// `COUNT(*)` over the catalog table.
pub fn count_records(conn: &Connection, table: &str) -> Result<u64> {
    let sql = format!("SELECT COUNT(*) FROM {}", quote_ident(table));
    let count: i64 = conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(count.max(0) as u64)
}

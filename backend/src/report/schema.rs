//! # Schema Inspection
//!
//! Reads column metadata for the catalog table through `pragma_table_info`,
//! with the table name bound as a parameter rather than spliced into SQL.
//! The result feeds the rating column detector, the ingestion whitelist and
//! the `check-columns` tool.

use crate::error::{Fallback, Result};
use crate::store::Store;
use common::model::column::ColumnDescriptor;
use rusqlite::{params, Connection};

/// Columns of the catalog table in definition order.
///
/// Never fails: an unreachable store or a missing table both come back as an
/// empty list, which callers read as "no columns known".
pub fn inspect_columns(store: &Store) -> Vec<ColumnDescriptor> {
    try_inspect_columns(store).or_fallback("schema inspection", Vec::new())
}

/// Like [`inspect_columns`] but reports store failures to the caller.
pub fn try_inspect_columns(store: &Store) -> Result<Vec<ColumnDescriptor>> {
    store.with_connection(|conn| table_columns(conn, store.table()))
}

/// Reads `pragma_table_info` for `table` on an already open connection.
/// A table that does not exist simply has no rows.
pub(crate) fn table_columns(conn: &Connection, table: &str) -> Result<Vec<ColumnDescriptor>> {
    let mut stmt =
        conn.prepare("SELECT cid, name, type FROM pragma_table_info(?1) ORDER BY cid")?;
    let columns = stmt
        .query_map(params![table], |row| {
            let cid: i64 = row.get(0)?;
            Ok(ColumnDescriptor {
                name: row.get(1)?,
                position: cid as usize,
                declared_type: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(columns)
}

//! Whole-table CSV export.
//!
//! Unlike the dashboard reads, export does not degrade: a store failure is
//! returned to the caller, and an empty table is reported as
//! [`Export::NoData`] instead of a header-only file.

use crate::error::Result;
use crate::store::Store;
use log::info;
use rusqlite::types::ValueRef;

pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// A finished CSV file ready to be sent as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Export {
    Csv(CsvExport),
    NoData,
}

/// Serializes every row and column of the catalog table, in table order,
/// with a header row of column names.
pub fn export_table(store: &Store) -> Result<Export> {
    let (headers, rows) = store.with_connection(|conn| {
        let mut stmt = conn.prepare(&format!("SELECT * FROM {}", store.quoted_table()))?;
        let headers: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let width = headers.len();
        let rows = stmt
            .query_map([], |row| {
                (0..width)
                    .map(|i| row.get_ref(i).map(field_text))
                    .collect::<rusqlite::Result<Vec<String>>>()
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok((headers, rows))
    })?;

    if rows.is_empty() {
        return Ok(Export::NoData);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&headers)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;

    info!(
        "exported {} row(s) x {} column(s) from {}",
        rows.len(),
        headers.len(),
        store.table()
    );

    Ok(Export::Csv(CsvExport {
        bytes,
        content_type: CSV_CONTENT_TYPE,
        filename: format!("{}.csv", store.table()),
        rows: rows.len(),
    }))
}

/// Text form of one SQLite cell. NULL becomes an empty field.
pub fn field_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) | ValueRef::Blob(t) => String::from_utf8_lossy(t).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_text_covers_every_storage_class() {
        assert_eq!(field_text(ValueRef::Null), "");
        assert_eq!(field_text(ValueRef::Integer(1999)), "1999");
        assert_eq!(field_text(ValueRef::Real(8.5)), "8.5");
        assert_eq!(field_text(ValueRef::Text(b"Heat")), "Heat");
    }
}

//! Scoped access to the SQLite file backing the catalog.
//!
//! Every operation borrows a fresh connection for exactly its own duration.
//! The connection is dropped, and therefore closed, on every return path
//! including errors and early returns.

use crate::error::{ReportError, Result};
use log::debug;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

/// Location of the catalog table: database file plus table name.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    table: String,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            table: table.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// The table name quoted for use as an SQL identifier.
    pub fn quoted_table(&self) -> String {
        quote_ident(&self.table)
    }

    /// Runs `f` on a read-only connection. A missing database file is an error,
    /// never silently created.
    pub fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(&self.path, flags).map_err(|source| {
            ReportError::StoreUnavailable {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!("opened {:?} read-only", self.path);
        f(&conn)
    }

    /// Runs `f` on a read-write connection, creating the database file if needed.
    /// Only the administrative actions write.
    pub fn with_connection_mut<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        let mut conn =
            Connection::open(&self.path).map_err(|source| ReportError::StoreUnavailable {
                path: self.path.clone(),
                source,
            })?;
        debug!("opened {:?} read-write", self.path);
        f(&mut conn)
    }
}

/// Quotes an SQL identifier, doubling any embedded double quote.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

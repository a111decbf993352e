//! Schema initialization: runs the configured DDL script behind the
//! `init-db` action.

use crate::error::{ReportError, Result};
use crate::store::Store;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Executes a DDL script verbatim against the store.
#[derive(Debug, Clone)]
pub struct SchemaInitializer {
    script: PathBuf,
}

impl SchemaInitializer {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
        }
    }

    /// Reads the script and runs it as one batch. Creates the database file
    /// when it does not exist yet.
    pub fn run(&self, store: &Store) -> Result<()> {
        let sql = fs::read_to_string(&self.script).map_err(|source| ReportError::Io {
            path: self.script.clone(),
            source,
        })?;
        store.with_connection_mut(|conn| {
            conn.execute_batch(&sql)?;
            Ok(())
        })?;
        info!(
            "initialized {:?} from script {:?}",
            store.path(),
            self.script
        );
        Ok(())
    }
}

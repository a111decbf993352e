//! Shared application state handed to every request handler.
//!
//! `AppState` is built once in `main.rs` and registered as `web::Data`. It
//! only describes *where* things are (store location, script path, ingestion
//! pipeline); it caches nothing. Every handler re-reads the store, so two
//! concurrent requests never share a connection or any mutable data.

use crate::admin::ingest::{CsvIngestion, IngestionPipeline};
use crate::admin::init_db::SchemaInitializer;
use crate::config::Config;
use crate::error::{ReportError, Result};
use crate::report::ReportService;
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Read side: dashboard payloads, preview, count and export.
    pub reports: ReportService,

    /// Runs the DDL script behind the init-db action.
    pub initializer: SchemaInitializer,

    /// Populates the catalog table behind the run-etl action. Behind a trait
    /// object so tests and other deployments can swap the loader.
    pub ingestion: Arc<dyn IngestionPipeline>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let store = Store::new(&config.database, &config.table);
        Self {
            reports: ReportService::new(store, &config.currency),
            initializer: SchemaInitializer::new(&config.schema),
            ingestion: Arc::new(CsvIngestion::new(&config.ingest_source)),
        }
    }

    pub fn store(&self) -> &Store {
        self.reports.store()
    }
}

/// Runs synchronous store work on Tokio's blocking pool so handlers never
/// stall the async workers.
pub async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|join_err| ReportError::Task(format!("join error: {}", join_err)))
}

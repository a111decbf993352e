//! Error type for the reporting engine and the degrade-to-default combinator
//! used by every read path.

use log::warn;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The database file could not be opened.
    #[error("store unavailable at {path:?}: {source}")]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed: missing table, missing column, bad row type.
    #[error("query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("i/o error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The ingestion source has a header this table cannot accept.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// A blocking task panicked or was cancelled before producing a result.
    #[error("task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// Substitutes a documented default when a read step fails.
///
/// Read paths never surface store failures to the dashboard; they log the
/// failing step and carry on with `default`.
pub trait Fallback<T> {
    fn or_fallback(self, step: &str, default: T) -> T;
}

impl<T> Fallback<T> for Result<T> {
    fn or_fallback(self, step: &str, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                warn!("{} failed, using default: {}", step, e);
                default
            }
        }
    }
}

//! # Reporting engine
//!
//! Everything with actual decision logic lives here:
//!
//! - `schema`: reads column metadata for the catalog table.
//! - `detector`: picks a rating-like column from that metadata.
//! - `ranking`: bounded box office rankings and the ratings aggregation.
//! - `assembler`: runs the reads above into one `ReportPayload`.
//! - `export`: whole-table CSV export.
//!
//! [`ReportService`] is the face the HTTP layer talks to. It holds no state
//! beyond where the store is; every call re-reads from scratch.

pub mod assembler;
pub mod detector;
pub mod export;
pub mod format;
pub mod ranking;
pub mod schema;

use crate::error::Result;
use crate::report::assembler::{ReportAssembler, ReportLimits};
use crate::report::export::Export;
use crate::store::Store;
use common::model::record::CatalogRecord;
use common::model::report::ReportPayload;

/// Row cap for the dedicated preview page.
pub const FULL_PREVIEW_LIMIT: u32 = 100;

/// Outcome of a full preview request.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    Rows(Vec<CatalogRecord>),
    Empty,
}

#[derive(Debug, Clone)]
pub struct ReportService {
    store: Store,
    currency: String,
}

impl ReportService {
    pub fn new(store: Store, currency: impl Into<String>) -> Self {
        Self {
            store,
            currency: currency.into(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    fn assembler(&self) -> ReportAssembler<'_> {
        ReportAssembler::new(&self.store, &self.currency)
    }

    /// Home page payload: ten preview rows, six chart bars.
    pub fn build_summary_report(&self) -> ReportPayload {
        self.assembler().build(ReportLimits::SUMMARY)
    }

    /// Up to [`FULL_PREVIEW_LIMIT`] rows ranked by box office.
    pub fn build_full_preview(&self) -> Preview {
        let rows = self.assembler().preview(FULL_PREVIEW_LIMIT);
        if rows.is_empty() {
            Preview::Empty
        } else {
            Preview::Rows(rows)
        }
    }

    pub fn record_count(&self) -> u64 {
        self.assembler().record_count()
    }

    pub fn export_table(&self) -> Result<Export> {
        export::export_table(&self.store)
    }
}

//! Builds the dashboard payload from a handful of independent reads.
//!
//! Each step opens its own connection and has its own default. The steps are
//! not a transaction: rows may change between the count and the preview, and
//! that is acceptable for a dashboard.
//!
//! ## Workflow
//!
//! 1.  **Count**: `COUNT(*)` over the table, `0` on failure.
//! 2.  **Top measure**: the highest box office figure, `Unavailable` when the
//!     table is empty or the read fails.
//! 3.  **Preview**: ranked display rows, empty on failure.
//! 4.  **Detection**: a fresh schema read picks the rating column, if any.
//! 5.  **Chart**: per-title averages over that column, empty when no column
//!     qualifies or the read fails.

use crate::error::Fallback;
use crate::report::detector::detect_rating_column;
use crate::report::format::display_top_measure;
use crate::report::ranking::{count_records, RankingQuery};
use crate::report::schema::inspect_columns;
use crate::store::Store;
use common::model::record::CatalogRecord;
use common::model::report::{ChartSeries, ReportPayload, TopMeasure};

/// Row caps for one report build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLimits {
    pub preview: u32,
    pub chart: u32,
}

impl ReportLimits {
    /// Home page: ten preview rows, six chart bars.
    pub const SUMMARY: ReportLimits = ReportLimits {
        preview: 10,
        chart: 6,
    };
}

pub struct ReportAssembler<'a> {
    store: &'a Store,
    currency: &'a str,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(store: &'a Store, currency: &'a str) -> Self {
        Self { store, currency }
    }

    /// Number of rows in the catalog table.
    ///
    /// # Returns
    /// The row count, or `0` when the store or table cannot be read.
    pub fn record_count(&self) -> u64 {
        self.store
            .with_connection(|conn| count_records(conn, self.store.table()))
            .or_fallback("record count", 0)
    }

    /// Highest box office figure, read from the measure column alone.
    /// `Unavailable` only when the table is empty or the query fails.
    pub fn top_measure(&self) -> TopMeasure {
        self.store
            .with_connection(|conn| RankingQuery::top_measure(self.store.table()).measure(conn))
            .map(|top| top.map_or(TopMeasure::Unavailable, TopMeasure::Value))
            .or_fallback("top measure", TopMeasure::Unavailable)
    }

    /// Up to `limit` display rows ranked by box office.
    ///
    /// # Arguments
    /// * `limit` - Row cap, bound into the query.
    ///
    /// # Returns
    /// The ranked rows, or an empty list when the ranking cannot be read.
    pub fn preview(&self, limit: u32) -> Vec<CatalogRecord> {
        self.store
            .with_connection(|conn| {
                RankingQuery::top_by_measure(self.store.table(), limit).records(conn)
            })
            .or_fallback("preview", Vec::new())
    }

    /// Ratings chart over whichever column the detector picks from a fresh
    /// look at the schema. The column is picked once and used for every bar.
    pub fn rating_chart(&self, limit: u32) -> (Option<String>, ChartSeries) {
        let columns = inspect_columns(self.store);
        let Some(column) = detect_rating_column(&columns) else {
            return (None, ChartSeries::default());
        };

        let chart = self
            .store
            .with_connection(|conn| {
                RankingQuery::rating_chart(self.store.table(), &column, limit).chart(conn)
            })
            .or_fallback("rating chart", ChartSeries::default());
        (Some(column.into_name()), chart)
    }

    /// Runs every step in order. Never fails; each field degrades on its own.
    pub fn build(&self, limits: ReportLimits) -> ReportPayload {
        let total_records = self.record_count();
        let top_measure = self.top_measure();
        let preview = self.preview(limits.preview);
        let (rating_column, chart) = self.rating_chart(limits.chart);

        ReportPayload {
            total_records,
            top_measure_display: display_top_measure(top_measure, self.currency),
            top_measure,
            preview,
            chart,
            rating_column,
        }
    }
}

//! # Report Service Module
//!
//! Read-only endpoints under `/api/report`. None of them can fail because of
//! the store: an empty or unreachable catalog produces the documented
//! defaults, so the dashboard always has a complete payload to render.
//!
//! ## Registered Routes:
//!
//! *   **`GET /api/report`**: the home summary (`ReportPayload` as JSON):
//!     record count, top box office, ten preview rows, six chart bars.
//!
//! *   **`GET /api/report/preview`**: up to 100 rows ranked by box office.
//!     Answers `404` when there is nothing to show.
//!
//! *   **`GET /api/report/count`**: `{ "total_records": n }`.

mod count;
mod preview;
mod summary;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/report";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(summary::process))
        .route("/preview", get().to(preview::process))
        .route("/count", get().to(count::process))
}

//! # Summary Report Handler
//!
//! Serves `GET /api/report`, the payload behind the dashboard home page.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` clones the `ReportService` out of the shared state.
//!
//! 2.  **Assembly**: the report is built on the blocking pool by
//!     `ReportService::build_summary_report`, which runs the count, top measure,
//!     preview and ratings chart reads one after another.
//!
//! 3.  **HTTP Response**: the `ReportPayload` is returned as JSON. Store failures
//!     never reach this point; they already became defaults inside the payload.

use crate::state::{blocking, AppState};
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for the `GET /api/report` endpoint.
///
/// # Arguments
/// * `state` - Shared application state holding the report service.
///
/// # Returns
/// - `200 OK` with the `ReportPayload` as JSON, degraded fields included.
/// - `500 Internal Server Error` only if the blocking task itself is lost.
pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let reports = state.reports.clone();
    match blocking(move || reports.build_summary_report()).await {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => HttpResponse::InternalServerError().body(format!("Report error: {}", e)),
    }
}

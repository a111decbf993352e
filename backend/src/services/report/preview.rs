//! # Full Preview Handler
//!
//! Serves `GET /api/report/preview`: up to `FULL_PREVIEW_LIMIT` rows ranked by
//! box office, for the dedicated preview page.

use crate::report::Preview;
use crate::state::{blocking, AppState};
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for the `GET /api/report/preview` endpoint.
///
/// # Arguments
/// * `state` - Shared application state holding the report service.
///
/// # Returns
/// - `200 OK` with the ranked `CatalogRecord` rows as JSON.
/// - `404 Not Found` with `No preview available` when there are no rows, or
///   the ranking could not be read.
/// - `500 Internal Server Error` if the blocking task is lost.
pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let reports = state.reports.clone();
    match blocking(move || reports.build_full_preview()).await {
        Ok(Preview::Rows(rows)) => HttpResponse::Ok().json(rows),
        Ok(Preview::Empty) => HttpResponse::NotFound().body("No preview available"),
        Err(e) => HttpResponse::InternalServerError().body(format!("Preview error: {}", e)),
    }
}

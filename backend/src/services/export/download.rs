//! # CSV Download Handler
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` hands the export to the blocking pool.
//!
//! 2.  **Export**: `ReportService::export_table` reads every row and column and
//!     writes them through a `csv::Writer`.
//!
//! 3.  **HTTP Response**: the bytes go out as a `text/csv` attachment named after
//!     the table. An empty table and a failed read get distinct responses so the
//!     dashboard can tell "nothing yet" from "broken".

use crate::report::export::Export;
use crate::state::{blocking, AppState};
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse, Responder};
use log::error;

/// Actix web handler for the `GET /api/export/csv` endpoint.
///
/// # Arguments
/// * `state` - Shared application state holding the report service.
///
/// # Returns
/// - `200 OK` with the CSV body and a `Content-Disposition: attachment` header.
/// - `404 Not Found` with `No data to download` when the table has no rows.
/// - `500 Internal Server Error` with `Download error: …` when the read fails.
pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let reports = state.reports.clone();
    let result = blocking(move || reports.export_table())
        .await
        .and_then(|inner| inner);

    match result {
        Ok(Export::Csv(csv)) => HttpResponse::Ok()
            .content_type(csv.content_type)
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(csv.filename)],
            })
            .body(csv.bytes),
        Ok(Export::NoData) => HttpResponse::NotFound().body("No data to download"),
        Err(e) => {
            error!("export failed: {}", e);
            HttpResponse::InternalServerError().body(format!("Download error: {}", e))
        }
    }
}

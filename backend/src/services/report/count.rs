use crate::state::{blocking, AppState};
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for the `GET /api/report/count` endpoint.
///
/// # Returns
/// - `200 OK` with `{ "total_records": n }`; `n` is `0` when the store cannot be read.
/// - `500 Internal Server Error` if the blocking task is lost.
pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let reports = state.reports.clone();
    match blocking(move || reports.record_count()).await {
        Ok(total) => HttpResponse::Ok().json(serde_json::json!({ "total_records": total })),
        Err(e) => HttpResponse::InternalServerError().body(format!("Count error: {}", e)),
    }
}

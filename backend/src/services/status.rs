use crate::state::{blocking, AppState};
use actix_web::{web, HttpResponse, Responder};

/// Plain-text health line: `Server OK — <table> records: <n>`.
pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let reports = state.reports.clone();
    let table = state.store().table().to_string();
    match blocking(move || reports.record_count()).await {
        Ok(total) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Server OK — {} records: {}", table, total)),
        Err(e) => HttpResponse::InternalServerError().body(format!("Status error: {}", e)),
    }
}

use super::redirect_home;
use crate::state::{blocking, AppState};
use actix_web::{web, HttpResponse, Responder};
use log::{error, info};

/// Actix web handler for `GET|POST /api/admin/run-etl`.
///
/// Runs the configured `IngestionPipeline` and logs how much it loaded.
///
/// # Returns
/// - `303 See Other` back to `/` on success.
/// - `500 Internal Server Error` with `ETL error: …` otherwise.
pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let ingestion = state.ingestion.clone();
    let store = state.store().clone();
    let result = blocking(move || ingestion.run(&store))
        .await
        .and_then(|inner| inner);

    match result {
        Ok(summary) => {
            info!(
                "run-etl loaded {} row(s) across {} column(s)",
                summary.rows,
                summary.columns.len()
            );
            redirect_home()
        }
        Err(e) => {
            error!("run-etl failed: {}", e);
            HttpResponse::InternalServerError().body(format!("ETL error: {}", e))
        }
    }
}

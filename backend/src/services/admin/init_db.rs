use super::redirect_home;
use crate::state::{blocking, AppState};
use actix_web::{web, HttpResponse, Responder};
use log::error;

/// Actix web handler for `GET|POST /api/admin/init-db`.
///
/// Runs the configured DDL script against the store, creating the database
/// file if it does not exist yet.
///
/// # Returns
/// - `303 See Other` back to `/` on success.
/// - `500 Internal Server Error` with `Init DB error: …` otherwise.
pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let initializer = state.initializer.clone();
    let store = state.store().clone();
    let result = blocking(move || initializer.run(&store))
        .await
        .and_then(|inner| inner);

    match result {
        Ok(()) => redirect_home(),
        Err(e) => {
            error!("init-db failed: {}", e);
            HttpResponse::InternalServerError().body(format!("Init DB error: {}", e))
        }
    }
}

//! # Admin Service Module
//!
//! Actions that write to the store, under `/api/admin`. Both accept `GET` so
//! the dashboard can trigger them with a plain link, and `POST` for scripts.
//!
//! *   **`/init-db`**: runs the configured DDL script. Redirects to `/` on
//!     success, `500` with `Init DB error: …` otherwise.
//! *   **`/run-etl`**: runs the ingestion pipeline. Redirects to `/` on
//!     success, `500` with `ETL error: …` otherwise.

mod init_db;
mod run_etl;

use actix_web::http::header;
use actix_web::web::{get, post, scope};
use actix_web::{HttpResponse, Scope};

const API_PATH: &str = "/api/admin";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/init-db", get().to(init_db::process))
        .route("/init-db", post().to(init_db::process))
        .route("/run-etl", get().to(run_etl::process))
        .route("/run-etl", post().to(run_etl::process))
}

/// `303 See Other` back to the dashboard.
fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

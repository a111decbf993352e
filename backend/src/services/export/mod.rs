//! CSV export under `/api/export`.
//!
//! - `GET /api/export/csv`: the whole catalog table as a `text/csv`
//!   attachment named after the table. `404` when the table has no rows,
//!   `500` with the store error when the read fails.

mod download;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/export";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/csv", get().to(download::process))
}

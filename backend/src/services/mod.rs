//! HTTP surface. Each sub-module exposes a `configure_routes()` scope that
//! `main.rs` mounts; handlers stay thin and delegate to the engine in
//! `crate::report` or the actions in `crate::admin`.

pub mod admin;
pub mod assets;
pub mod export;
pub mod report;
pub mod status;

use crate::state::AppState;
use actix_web::web;

/// Registers every route on an actix `App`. Shared by `main.rs` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig, state: AppState) {
    cfg.app_data(web::Data::new(state))
        .service(report::configure_routes())
        .service(export::configure_routes())
        .service(admin::configure_routes())
        .route("/status", web::get().to(status::process))
        .default_service(web::route().to(assets::serve_embedded));
}

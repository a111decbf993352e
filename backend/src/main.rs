use actix_web::{App, HttpServer};
use backend::config::Config;
use backend::services;
use backend::state::AppState;
use clap::Parser;
use env_logger::Env;
use log::info;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();
    let url = config.url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    let state = AppState::from_config(&config);

    info!(
        "Server running at {} (table {} in {:?})",
        url, config.table, config.database
    );

    HttpServer::new(move || {
        let state = state.clone();
        App::new().configure(move |cfg| services::configure(cfg, state))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

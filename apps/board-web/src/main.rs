//! # Community Board
//!
//! Server-rendered browser client for the posts backend.

use std::io;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use board_infra::HttpPostApi;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;
mod views;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        backend = %config.api.base_url,
        timeout_secs = config.api.timeout.as_secs(),
        "Starting Community Board on {}:{}",
        config.host,
        config.port
    );

    let api = HttpPostApi::new(&config.api).map_err(io::Error::other)?;
    let state = AppState::new(Arc::new(api)).map_err(io::Error::other)?;

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

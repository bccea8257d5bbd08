//! # Restful Blog Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;
mod views;

use config::AppConfig;
use middleware::MethodOverride;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};
use views::Views;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting blog server on {}:{}", config.host, config.port);

    let views = Views::load(&config.template_dir).map_err(|e| {
        tracing::error!(error = ?e, dir = %config.template_dir.display(), "Failed to load templates");
        std::io::Error::other(e)
    })?;

    // The store connection is opened once here and shared by every worker.
    let state = AppState::new(&config, views).await;

    HttpServer::new(move || {
        App::new()
            .wrap(MethodOverride)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

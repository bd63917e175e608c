use std::process::ExitCode;

use tournament_api::api;
use tournament_api::config::{AppConfig, StorageBackend};
use tournament_api::infrastructure::database;
use tournament_api::services::Tournament;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let tournament = match config.storage {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; state is lost on exit");
            Tournament::in_memory()
        }
        StorageBackend::Postgres => {
            tracing::info!("Connecting to database...");
            match database::connect(&config).await {
                Ok(pool) => {
                    tracing::info!("Database connected successfully");
                    database::postgres_tournament(pool)
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to connect to database");
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    // Finish any result whose team statistics were interrupted
    if let Err(e) = tournament.results.reconcile_pending().await {
        tracing::error!(error = %e, "Startup reconciliation failed");
    }

    let app = api::router(tournament);

    tracing::info!("Server listening on {}", config.bind_addr);
    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Failed to bind address");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

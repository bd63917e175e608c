// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::Tournament;
use handlers::{health, matches, seeding, teams};

/// Builds the application router over the given tournament services
pub fn router(tournament: Tournament) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Team routes
        .route("/api/teams", post(teams::register_team).get(teams::list_teams))
        .route("/api/teams/:id", get(teams::get_team))
        // Match routes
        .route(
            "/api/matches",
            post(matches::schedule_match).get(matches::list_matches),
        )
        .route("/api/matches/:id", get(matches::get_match))
        .route("/api/matches/:id/result", post(matches::record_result))
        .route("/api/matches/:id/reconcile", post(matches::reconcile_match))
        // Seeding
        .route("/api/seeding", post(seeding::recompute_seeding))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(tournament)
}

use axum::{extract::State, Json};

use super::teams::TeamResponse;
use crate::api::errors::ApiError;
use crate::services::Tournament;

/// Recompute seeds for every team
///
/// POST /api/seeding
///
/// Responds with the teams ordered by their new seed.
pub async fn recompute_seeding(
    State(tournament): State<Tournament>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let ranked = tournament.seeding.recompute().await?;

    Ok(Json(ranked.iter().map(TeamResponse::from).collect()))
}

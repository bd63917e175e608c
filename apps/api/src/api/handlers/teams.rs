use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::domain::team::{Team, TeamId};
use crate::services::Tournament;

/// Request body for registering a team
#[derive(Debug, Deserialize)]
pub struct RegisterTeamRequest {
    pub player_one: String,
    pub player_two: String,
}

/// Team as returned by the API
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub team_id: TeamId,
    pub player_one: String,
    pub player_two: String,
    pub wins: i64,
    pub losses: i64,
    pub points_won: i64,
    pub points_lost: i64,
    pub seed_number: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            team_id: team.team_id(),
            player_one: team.player_one().to_string(),
            player_two: team.player_two().to_string(),
            wins: team.wins(),
            losses: team.losses(),
            points_won: team.points_won(),
            points_lost: team.points_lost(),
            seed_number: team.seed_number(),
            created_at: team.created_at(),
        }
    }
}

/// Register a new team
///
/// POST /api/teams
pub async fn register_team(
    State(tournament): State<Tournament>,
    payload: Result<Json<RegisterTeamRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let Json(req) = payload?;
    let team = tournament
        .teams
        .register(&req.player_one, &req.player_two)
        .await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// List all teams in registration order
///
/// GET /api/teams
pub async fn list_teams(
    State(tournament): State<Tournament>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = tournament.teams.list_all().await?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(tournament): State<Tournament>,
    path: Result<Path<TeamId>, PathRejection>,
) -> Result<Json<TeamResponse>, ApiError> {
    let Path(id) = path?;
    let team = tournament.teams.get(id).await?;

    Ok(Json(TeamResponse::from(&team)))
}

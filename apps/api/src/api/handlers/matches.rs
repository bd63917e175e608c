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

use super::teams::TeamResponse;
use crate::api::errors::ApiError;
use crate::domain::matches::{Match, MatchId, MatchStatus};
use crate::domain::team::TeamId;
use crate::services::{ResultReport, Tournament};

/// Request body for scheduling a match
#[derive(Debug, Deserialize)]
pub struct ScheduleMatchRequest {
    pub team_one_id: TeamId,
    pub team_two_id: TeamId,
}

/// Request body for recording a match result
#[derive(Debug, Deserialize)]
pub struct RecordResultRequest {
    pub winner_id: TeamId,
    pub points_won: u32,
    pub points_lost: u32,
}

/// Match as returned by the API
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub match_id: MatchId,
    pub team_one_id: TeamId,
    pub team_two_id: TeamId,
    pub status: MatchStatus,
    pub winner_id: Option<TeamId>,
    pub points_won: Option<i64>,
    pub points_lost: Option<i64>,
    pub decided_at: Option<DateTime<Utc>>,
}

impl From<&Match> for MatchResponse {
    fn from(m: &Match) -> Self {
        Self {
            match_id: m.match_id(),
            team_one_id: m.team_one_id(),
            team_two_id: m.team_two_id(),
            status: m.status(),
            winner_id: m.winner_id(),
            points_won: m.points_won(),
            points_lost: m.points_lost(),
            decided_at: m.decided_at(),
        }
    }
}

/// Match and both teams after a result
#[derive(Debug, Serialize)]
pub struct ResultResponse {
    #[serde(rename = "match")]
    pub match_record: MatchResponse,
    pub winner: TeamResponse,
    pub loser: TeamResponse,
}

impl From<&ResultReport> for ResultResponse {
    fn from(report: &ResultReport) -> Self {
        Self {
            match_record: MatchResponse::from(&report.match_record),
            winner: TeamResponse::from(&report.winner),
            loser: TeamResponse::from(&report.loser),
        }
    }
}

/// Schedule a match between two teams
///
/// POST /api/matches
pub async fn schedule_match(
    State(tournament): State<Tournament>,
    payload: Result<Json<ScheduleMatchRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MatchResponse>), ApiError> {
    let Json(req) = payload?;
    let m = tournament
        .matches
        .schedule(req.team_one_id, req.team_two_id)
        .await?;

    Ok((StatusCode::CREATED, Json(MatchResponse::from(&m))))
}

/// List all matches
///
/// GET /api/matches
pub async fn list_matches(
    State(tournament): State<Tournament>,
) -> Result<Json<Vec<MatchResponse>>, ApiError> {
    let matches = tournament.matches.list_all().await?;

    Ok(Json(matches.iter().map(MatchResponse::from).collect()))
}

/// Get a match by ID
///
/// GET /api/matches/:id
pub async fn get_match(
    State(tournament): State<Tournament>,
    path: Result<Path<MatchId>, PathRejection>,
) -> Result<Json<MatchResponse>, ApiError> {
    let Path(id) = path?;
    let m = tournament.matches.get(id).await?;

    Ok(Json(MatchResponse::from(&m)))
}

/// Record the result of a match and credit both teams
///
/// POST /api/matches/:id/result
pub async fn record_result(
    State(tournament): State<Tournament>,
    path: Result<Path<MatchId>, PathRejection>,
    payload: Result<Json<RecordResultRequest>, JsonRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    let Path(id) = path?;
    let Json(req) = payload?;
    let report = tournament
        .results
        .record_result(
            id,
            req.winner_id,
            i64::from(req.points_won),
            i64::from(req.points_lost),
        )
        .await?;

    Ok(Json(ResultResponse::from(&report)))
}

/// Apply any team statistics a decided match is missing
///
/// POST /api/matches/:id/reconcile
pub async fn reconcile_match(
    State(tournament): State<Tournament>,
    path: Result<Path<MatchId>, PathRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    let Path(id) = path?;
    let report = tournament.results.reconcile(id).await?;

    Ok(Json(ResultResponse::from(&report)))
}

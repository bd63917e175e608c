//! End-to-end API integration tests
//!
//! These tests drive the complete HTTP flows against the in-memory backend:
//! - Team registration and listing
//! - Match scheduling and result recording
//! - Seeding recomputation
//! - Error status codes

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tournament_api::api;
use tournament_api::services::Tournament;
use tower::util::ServiceExt; // for oneshot

/// Setup test application over fresh in-memory storage
fn setup_app() -> Router {
    api::router(Tournament::in_memory())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

async fn register(app: &Router, one: &str, two: &str) -> i64 {
    let (status, json) = send(
        app,
        "POST",
        "/api/teams",
        Some(json!({ "player_one": one, "player_two": two })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["team_id"].as_i64().unwrap()
}

async fn schedule(app: &Router, team_one_id: i64, team_two_id: i64) -> i64 {
    let (status, json) = send(
        app,
        "POST",
        "/api/matches",
        Some(json!({ "team_one_id": team_one_id, "team_two_id": team_two_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["match_id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_register_and_list_teams() {
    let app = setup_app();

    let (status, team) = send(
        &app,
        "POST",
        "/api/teams",
        Some(json!({ "player_one": "Alice", "player_two": "Bob" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(team["team_id"], 1);
    assert_eq!(team["player_one"], "Alice");
    assert_eq!(team["wins"], 0);
    assert_eq!(team["points_won"], 0);
    assert!(team["seed_number"].is_null());

    register(&app, "Carol", "Dave").await;

    let (status, teams) = send(&app, "GET", "/api/teams", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = teams
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["team_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);

    let (status, fetched) = send(&app, "GET", "/api/teams/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["player_two"], "Dave");
}

#[tokio::test]
async fn test_register_invalid_names_rejected() {
    let app = setup_app();

    for (one, two) in [("Alice", "alice"), ("Bob1", "Carol"), ("Alice", "")] {
        let (status, json) = send(
            &app,
            "POST",
            "/api/teams",
            Some(json!({ "player_one": one, "player_two": two })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "invalid_input");
    }
}

#[tokio::test]
async fn test_unknown_team_not_found() {
    let app = setup_app();

    let (status, json) = send(&app, "GET", "/api/teams/7", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Team not found: 7");
}

#[tokio::test]
async fn test_schedule_match_validation() {
    let app = setup_app();
    let t1 = register(&app, "Alice", "Bob").await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/matches",
        Some(json!({ "team_one_id": t1, "team_two_id": t1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/api/matches",
        Some(json!({ "team_one_id": t1, "team_two_id": 99 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_full_result_flow() {
    let app = setup_app();
    let t1 = register(&app, "Alice", "Bob").await;
    let t2 = register(&app, "Carol", "Dave").await;
    let match_id = schedule(&app, t1, t2).await;

    let (status, m) = send(&app, "GET", &format!("/api/matches/{}", match_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(m["status"], "open");
    assert!(m["winner_id"].is_null());

    let (status, result) = send(
        &app,
        "POST",
        &format!("/api/matches/{}/result", match_id),
        Some(json!({ "winner_id": t1, "points_won": 11, "points_lost": 4 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["match"]["winner_id"], t1);
    assert_eq!(result["match"]["status"], "settled");
    assert_eq!(result["winner"]["wins"], 1);
    assert_eq!(result["winner"]["points_lost"], 4);
    assert_eq!(result["loser"]["team_id"], t2);
    assert_eq!(result["loser"]["losses"], 1);
    assert_eq!(result["loser"]["points_won"], 11);

    let (status, json) = send(
        &app,
        "POST",
        &format!("/api/matches/{}/result", match_id),
        Some(json!({ "winner_id": t2, "points_won": 11, "points_lost": 9 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "already_decided");

    let (status, matches) = send(&app, "GET", "/api/matches", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(matches.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_result_errors() {
    let app = setup_app();
    let t1 = register(&app, "Alice", "Bob").await;
    let t2 = register(&app, "Carol", "Dave").await;
    let outsider = register(&app, "Erin", "Frank").await;
    let match_id = schedule(&app, t1, t2).await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/matches/99/result",
        Some(json!({ "winner_id": t1, "points_won": 11, "points_lost": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/matches/{}/result", match_id),
        Some(json!({ "winner_id": outsider, "points_won": 11, "points_lost": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/matches/{}/reconcile", match_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_requests_are_invalid_input() {
    let app = setup_app();
    let t1 = register(&app, "Alice", "Bob").await;
    let t2 = register(&app, "Carol", "Dave").await;
    let match_id = schedule(&app, t1, t2).await;
    let result_uri = format!("/api/matches/{}/result", match_id);

    let (status, json) = send(
        &app,
        "POST",
        &result_uri,
        Some(json!({ "winner_id": t1, "points_won": -1, "points_lost": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "invalid_input");
    assert!(json["error"].is_string());

    let (status, json) = send(
        &app,
        "POST",
        &result_uri,
        Some(json!({ "winner_id": t1, "points_won": 11 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "invalid_input");

    let (status, json) = send(
        &app,
        "POST",
        "/api/teams",
        Some(json!({ "player_one": "Erin" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "invalid_input");

    let (status, json) = send(&app, "GET", "/api/matches/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "invalid_input");

    let (_, m) = send(&app, "GET", &format!("/api/matches/{}", match_id), None).await;
    assert_eq!(m["status"], "open");
}

#[tokio::test]
async fn test_seeding_flow() {
    let app = setup_app();
    let a = register(&app, "Alice", "Bob").await;
    let b = register(&app, "Carol", "Dave").await;
    let c = register(&app, "Erin", "Frank").await;
    let d = register(&app, "Gina", "Hank").await;

    // a beats b conceding 2, c beats d conceding 7
    let m1 = schedule(&app, a, b).await;
    let m2 = schedule(&app, c, d).await;
    for (match_id, winner, won, lost) in [(m1, a, 11, 2), (m2, c, 11, 7)] {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/api/matches/{}/result", match_id),
            Some(json!({ "winner_id": winner, "points_won": won, "points_lost": lost })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, ranked) = send(&app, "POST", "/api/seeding", None).await;
    assert_eq!(status, StatusCode::OK);

    let order: Vec<(i64, i64)> = ranked
        .as_array()
        .unwrap()
        .iter()
        .map(|t| {
            (
                t["team_id"].as_i64().unwrap(),
                t["seed_number"].as_i64().unwrap(),
            )
        })
        .collect();
    // Losers tie on points_won and keep registration order
    assert_eq!(order, vec![(a, 1), (c, 2), (b, 3), (d, 4)]);

    let (_, team) = send(&app, "GET", &format!("/api/teams/{}", d), None).await;
    assert_eq!(team["seed_number"], 4);
}

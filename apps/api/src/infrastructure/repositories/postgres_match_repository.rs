use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::errors::{TournamentError, TournamentResult};
use crate::domain::matches::{Match, MatchId};
use crate::domain::repositories::MatchRepository;

#[derive(sqlx::FromRow)]
struct MatchRow {
    match_id: i64,
    team_one_id: i64,
    team_two_id: i64,
    winner_id: Option<i64>,
    points_won: Option<i64>,
    points_lost: Option<i64>,
    stats_settled: bool,
    created_at: DateTime<Utc>,
    decided_at: Option<DateTime<Utc>>,
}

impl MatchRow {
    fn into_match(self) -> TournamentResult<Match> {
        Match::from_persistence(
            self.match_id,
            self.team_one_id,
            self.team_two_id,
            self.winner_id,
            self.points_won,
            self.points_lost,
            self.stats_settled,
            self.created_at,
            self.decided_at,
        )
    }
}

const SELECT_MATCH: &str = r#"
    SELECT
        match_id, team_one_id, team_two_id,
        winner_id, points_won, points_lost,
        stats_settled, created_at, decided_at
    FROM matches
"#;

/// PostgreSQL implementation of MatchRepository
pub struct PostgresMatchRepository {
    pool: PgPool,
}

impl PostgresMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, match_id: MatchId) -> TournamentResult<bool> {
        let found: Option<(i64,)> =
            sqlx::query_as("SELECT match_id FROM matches WHERE match_id = $1")
                .bind(match_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(found.is_some())
    }
}

#[async_trait]
impl MatchRepository for PostgresMatchRepository {
    async fn insert(&self, m: &Match) -> TournamentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO matches (
                match_id, team_one_id, team_two_id,
                winner_id, points_won, points_lost,
                stats_settled, created_at, decided_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(m.match_id())
        .bind(m.team_one_id())
        .bind(m.team_two_id())
        .bind(m.winner_id())
        .bind(m.points_won())
        .bind(m.points_lost())
        .bind(m.stats_settled())
        .bind(m.created_at())
        .bind(m.decided_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> TournamentResult<Vec<Match>> {
        let rows: Vec<MatchRow> = sqlx::query_as(&format!("{SELECT_MATCH} ORDER BY match_id"))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(MatchRow::into_match).collect()
    }

    async fn find_by_id(&self, match_id: MatchId) -> TournamentResult<Option<Match>> {
        let row: Option<MatchRow> =
            sqlx::query_as(&format!("{SELECT_MATCH} WHERE match_id = $1"))
                .bind(match_id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(MatchRow::into_match).transpose()
    }

    async fn record_result(&self, m: &Match) -> TournamentResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE matches SET
                winner_id = $2,
                points_won = $3,
                points_lost = $4,
                decided_at = $5
            WHERE match_id = $1 AND winner_id IS NULL
            "#,
        )
        .bind(m.match_id())
        .bind(m.winner_id())
        .bind(m.points_won())
        .bind(m.points_lost())
        .bind(m.decided_at())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return if self.exists(m.match_id()).await? {
                Err(TournamentError::AlreadyDecided(m.match_id()))
            } else {
                Err(TournamentError::MatchNotFound(m.match_id()))
            };
        }

        Ok(())
    }

    async fn mark_settled(&self, match_id: MatchId) -> TournamentResult<()> {
        let result = sqlx::query(
            "UPDATE matches SET stats_settled = TRUE WHERE match_id = $1 AND winner_id IS NOT NULL",
        )
        .bind(match_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return if self.exists(match_id).await? {
                Err(TournamentError::invalid_input(format!(
                    "Match {} has no recorded result",
                    match_id
                )))
            } else {
                Err(TournamentError::MatchNotFound(match_id))
            };
        }

        Ok(())
    }

    async fn list_unsettled(&self) -> TournamentResult<Vec<Match>> {
        let rows: Vec<MatchRow> = sqlx::query_as(&format!(
            "{SELECT_MATCH} WHERE winner_id IS NOT NULL AND stats_settled = FALSE ORDER BY match_id"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(MatchRow::into_match).collect()
    }
}

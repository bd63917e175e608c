use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::errors::{TournamentError, TournamentResult};
use crate::domain::matches::MatchId;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{StatsDelta, Team, TeamId};

#[derive(sqlx::FromRow)]
struct TeamRow {
    team_id: i64,
    player_one: String,
    player_two: String,
    wins: i64,
    losses: i64,
    points_won: i64,
    points_lost: i64,
    seed_number: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TeamRow {
    fn into_team(self) -> TournamentResult<Team> {
        Team::from_persistence(
            self.team_id,
            self.player_one,
            self.player_two,
            self.wins,
            self.losses,
            self.points_won,
            self.points_lost,
            self.seed_number,
            self.created_at,
            self.updated_at,
        )
    }
}

const SELECT_TEAM: &str = r#"
    SELECT
        team_id, player_one, player_two,
        wins, losses, points_won, points_lost,
        seed_number, created_at, updated_at
    FROM teams
"#;

const INCREMENT_STATS: &str = r#"
    UPDATE teams SET
        wins = wins + $2,
        losses = losses + $3,
        points_won = points_won + $4,
        points_lost = points_lost + $5,
        updated_at = NOW()
    WHERE team_id = $1
"#;

/// PostgreSQL implementation of TeamRepository
///
/// Counter updates are single `UPDATE ... SET x = x + $n` statements, so
/// concurrent increments on one team never lose a write.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn insert(&self, team: &Team) -> TournamentResult<()> {
        sqlx::query(
            r#"
            INSERT INTO teams (
                team_id, player_one, player_two,
                wins, losses, points_won, points_lost,
                seed_number, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(team.team_id())
        .bind(team.player_one())
        .bind(team.player_two())
        .bind(team.wins())
        .bind(team.losses())
        .bind(team.points_won())
        .bind(team.points_lost())
        .bind(team.seed_number())
        .bind(team.created_at())
        .bind(team.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_all(&self) -> TournamentResult<Vec<Team>> {
        let rows: Vec<TeamRow> = sqlx::query_as(&format!("{SELECT_TEAM} ORDER BY team_id"))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(TeamRow::into_team).collect()
    }

    async fn find_by_id(&self, team_id: TeamId) -> TournamentResult<Option<Team>> {
        let row: Option<TeamRow> = sqlx::query_as(&format!("{SELECT_TEAM} WHERE team_id = $1"))
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(TeamRow::into_team).transpose()
    }

    async fn update_stats(&self, team_id: TeamId, delta: &StatsDelta) -> TournamentResult<()> {
        delta.validate()?;

        let result = sqlx::query(INCREMENT_STATS)
            .bind(team_id)
            .bind(delta.wins)
            .bind(delta.losses)
            .bind(delta.points_won)
            .bind(delta.points_lost)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TournamentError::TeamNotFound(team_id));
        }

        Ok(())
    }

    async fn set_seed(&self, team_id: TeamId, seed_number: i32) -> TournamentResult<()> {
        let result = sqlx::query(
            "UPDATE teams SET seed_number = $2, updated_at = NOW() WHERE team_id = $1",
        )
        .bind(team_id)
        .bind(seed_number)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(TournamentError::TeamNotFound(team_id));
        }

        Ok(())
    }

    async fn apply_match_stats(
        &self,
        match_id: MatchId,
        team_id: TeamId,
        delta: &StatsDelta,
    ) -> TournamentResult<bool> {
        delta.validate()?;

        let mut tx = self.pool.begin().await?;

        let claimed = sqlx::query(
            r#"
            INSERT INTO team_stat_applications (match_id, team_id)
            VALUES ($1, $2)
            ON CONFLICT (match_id, team_id) DO NOTHING
            "#,
        )
        .bind(match_id)
        .bind(team_id)
        .execute(&mut *tx)
        .await?;

        if claimed.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        let updated = sqlx::query(INCREMENT_STATS)
            .bind(team_id)
            .bind(delta.wins)
            .bind(delta.losses)
            .bind(delta.points_won)
            .bind(delta.points_lost)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(TournamentError::TeamNotFound(team_id));
        }

        tx.commit().await?;
        Ok(true)
    }
}

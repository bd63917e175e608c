// PostgreSQL pool setup and schema migrations

use std::sync::Arc;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::AppConfig;
use crate::services::Tournament;

use super::repositories::{PostgresIdAllocator, PostgresMatchRepository, PostgresTeamRepository};

/// Connects the pool and applies the embedded migrations
pub async fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Tournament services backed by PostgreSQL
pub fn postgres_tournament(pool: PgPool) -> Tournament {
    Tournament::new(
        Arc::new(PostgresTeamRepository::new(pool.clone())),
        Arc::new(PostgresMatchRepository::new(pool.clone())),
        Arc::new(PostgresIdAllocator::new(pool)),
    )
}

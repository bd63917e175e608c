use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::errors::TournamentResult;
use crate::domain::repositories::{EntityKind, IdAllocator};

/// Counter-table id allocator
///
/// One row per entity kind; the upsert increments and returns the sequence
/// in a single statement, so concurrent callers never share an id.
pub struct PostgresIdAllocator {
    pool: PgPool,
}

impl PostgresIdAllocator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdAllocator for PostgresIdAllocator {
    async fn next_id(&self, kind: EntityKind) -> TournamentResult<i64> {
        let (seq,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO counters (kind, seq)
            VALUES ($1, 1)
            ON CONFLICT (kind) DO UPDATE SET seq = counters.seq + 1
            RETURNING seq
            "#,
        )
        .bind(kind.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(seq)
    }
}

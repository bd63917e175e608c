use std::fmt;

use async_trait::async_trait;

use crate::domain::errors::TournamentResult;

/// Entity kinds that draw ids from their own sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Team,
    Match,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Team => "team",
            EntityKind::Match => "match",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issues unique, increasing ids per entity kind
///
/// Sequences must survive restarts for durable backends.
#[async_trait]
pub trait IdAllocator: Send + Sync {
    async fn next_id(&self, kind: EntityKind) -> TournamentResult<i64>;
}

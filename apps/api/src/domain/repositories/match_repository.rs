use async_trait::async_trait;

use crate::domain::errors::TournamentResult;
use crate::domain::matches::{Match, MatchId};

/// Repository trait for the Match aggregate
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Insert a newly scheduled match
    async fn insert(&self, m: &Match) -> TournamentResult<()>;

    /// All matches in insertion order
    async fn list_all(&self) -> TournamentResult<Vec<Match>>;

    /// Find a match by its ID
    async fn find_by_id(&self, match_id: MatchId) -> TournamentResult<Option<Match>>;

    /// Persist the result carried by a decided match
    ///
    /// The write only succeeds while the stored match is still open: fails
    /// with `AlreadyDecided` otherwise and `MatchNotFound` if absent.
    async fn record_result(&self, m: &Match) -> TournamentResult<()>;

    /// Flag a decided match as fully credited to both teams
    async fn mark_settled(&self, match_id: MatchId) -> TournamentResult<()>;

    /// Decided matches whose team statistics are not settled yet
    async fn list_unsettled(&self) -> TournamentResult<Vec<Match>>;
}

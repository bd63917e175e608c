use async_trait::async_trait;

use crate::domain::errors::TournamentResult;
use crate::domain::matches::MatchId;
use crate::domain::team::{StatsDelta, Team, TeamId};

/// Repository trait for the Team aggregate
///
/// Counter updates are expressed as deltas so concurrent increments on the
/// same team commute; implementations must apply each delta atomically.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a newly registered team
    async fn insert(&self, team: &Team) -> TournamentResult<()>;

    /// All teams in insertion order
    async fn list_all(&self) -> TournamentResult<Vec<Team>>;

    /// Find a team by its ID
    async fn find_by_id(&self, team_id: TeamId) -> TournamentResult<Option<Team>>;

    /// Atomically add `delta` to the team's counters
    ///
    /// Fails with `TeamNotFound` if no team has that id.
    async fn update_stats(&self, team_id: TeamId, delta: &StatsDelta) -> TournamentResult<()>;

    /// Atomically overwrite the team's seed
    ///
    /// Fails with `TeamNotFound` if no team has that id.
    async fn set_seed(&self, team_id: TeamId, seed_number: i32) -> TournamentResult<()>;

    /// Credit a match result to a team at most once
    ///
    /// Records `(match_id, team_id)` and applies `delta` in the same atomic
    /// unit. Returns `false` without touching the counters if this match was
    /// already credited to this team.
    async fn apply_match_stats(
        &self,
        match_id: MatchId,
        team_id: TeamId,
        delta: &StatsDelta,
    ) -> TournamentResult<bool>;
}

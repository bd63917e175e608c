use std::sync::Arc;

use crate::domain::errors::{TournamentError, TournamentResult};
use crate::domain::matches::MatchId;
use crate::domain::repositories::{EntityKind, IdAllocator, TeamRepository};
use crate::domain::team::{StatsDelta, Team, TeamId};

/// Owns every Team record: registration, reads and counter updates
#[derive(Clone)]
pub struct TeamRegistry {
    teams: Arc<dyn TeamRepository>,
    ids: Arc<dyn IdAllocator>,
}

impl TeamRegistry {
    pub fn new(teams: Arc<dyn TeamRepository>, ids: Arc<dyn IdAllocator>) -> Self {
        Self { teams, ids }
    }

    /// Registers a team of two players
    ///
    /// Names are validated before an id is drawn, so rejected input never
    /// consumes a sequence number.
    pub async fn register(&self, player_one: &str, player_two: &str) -> TournamentResult<Team> {
        Team::validate_players(player_one, player_two)?;

        let team_id = self.ids.next_id(EntityKind::Team).await?;
        let (team, events) = Team::register(team_id, player_one, player_two)?;
        self.teams.insert(&team).await?;

        for event in &events {
            tracing::info!(team_id, ?event, "team registered");
        }

        Ok(team)
    }

    /// All teams in registration order
    pub async fn list_all(&self) -> TournamentResult<Vec<Team>> {
        self.teams.list_all().await
    }

    pub async fn get(&self, team_id: TeamId) -> TournamentResult<Team> {
        self.teams
            .find_by_id(team_id)
            .await?
            .ok_or(TournamentError::TeamNotFound(team_id))
    }

    pub async fn update_stats(&self, team_id: TeamId, delta: &StatsDelta) -> TournamentResult<()> {
        delta.validate()?;
        self.teams.update_stats(team_id, delta).await?;
        tracing::debug!(team_id, ?delta, "team stats updated");
        Ok(())
    }

    pub async fn set_seed(&self, team_id: TeamId, seed_number: i32) -> TournamentResult<()> {
        if seed_number < 1 {
            return Err(TournamentError::invalid_input(format!(
                "Seed number must be at least 1, got {}",
                seed_number
            )));
        }
        self.teams.set_seed(team_id, seed_number).await
    }

    /// Credits one side of a match result, at most once per (match, team)
    ///
    /// Returns `false` if the match was already credited to this team.
    pub async fn apply_match_stats(
        &self,
        match_id: MatchId,
        team_id: TeamId,
        delta: &StatsDelta,
    ) -> TournamentResult<bool> {
        let applied = self.teams.apply_match_stats(match_id, team_id, delta).await?;
        if applied {
            tracing::debug!(match_id, team_id, ?delta, "match stats applied");
        }
        Ok(applied)
    }
}

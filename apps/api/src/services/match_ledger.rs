use std::sync::Arc;

use crate::domain::errors::{TournamentError, TournamentResult};
use crate::domain::matches::{Match, MatchId, MatchOutcome, MatchScore};
use crate::domain::repositories::{EntityKind, IdAllocator, MatchRepository, TeamRepository};
use crate::domain::team::TeamId;

/// Owns every Match record: scheduling, reads and result recording
#[derive(Clone)]
pub struct MatchLedger {
    matches: Arc<dyn MatchRepository>,
    teams: Arc<dyn TeamRepository>,
    ids: Arc<dyn IdAllocator>,
}

impl MatchLedger {
    pub fn new(
        matches: Arc<dyn MatchRepository>,
        teams: Arc<dyn TeamRepository>,
        ids: Arc<dyn IdAllocator>,
    ) -> Self {
        Self {
            matches,
            teams,
            ids,
        }
    }

    /// Schedules an open match between two registered teams
    pub async fn schedule(
        &self,
        team_one_id: TeamId,
        team_two_id: TeamId,
    ) -> TournamentResult<Match> {
        if team_one_id == team_two_id {
            return Err(TournamentError::invalid_input(format!(
                "A match needs two different teams, got team {} twice",
                team_one_id
            )));
        }

        for team_id in [team_one_id, team_two_id] {
            if self.teams.find_by_id(team_id).await?.is_none() {
                return Err(TournamentError::invalid_input(format!(
                    "Team {} does not exist",
                    team_id
                )));
            }
        }

        let match_id = self.ids.next_id(EntityKind::Match).await?;
        let (m, events) = Match::schedule(match_id, team_one_id, team_two_id)?;
        self.matches.insert(&m).await?;

        for event in &events {
            tracing::info!(match_id, ?event, "match scheduled");
        }

        Ok(m)
    }

    /// All matches in scheduling order
    pub async fn list_all(&self) -> TournamentResult<Vec<Match>> {
        self.matches.list_all().await
    }

    pub async fn get(&self, match_id: MatchId) -> TournamentResult<Match> {
        self.matches
            .find_by_id(match_id)
            .await?
            .ok_or(TournamentError::MatchNotFound(match_id))
    }

    /// Records the result on the match only; team statistics are the
    /// result processor's concern
    pub async fn record_result(
        &self,
        match_id: MatchId,
        winner_id: TeamId,
        score: MatchScore,
    ) -> TournamentResult<(Match, MatchOutcome)> {
        let mut m = self.get(match_id).await?;
        let (outcome, event) = m.decide(winner_id, score)?;
        self.matches.record_result(&m).await?;

        tracing::info!(match_id, ?event, "match decided");

        Ok((m, outcome))
    }

    pub async fn mark_settled(&self, match_id: MatchId) -> TournamentResult<()> {
        self.matches.mark_settled(match_id).await
    }

    /// Decided matches still waiting for team statistics
    pub async fn list_unsettled(&self) -> TournamentResult<Vec<Match>> {
        self.matches.list_unsettled().await
    }
}

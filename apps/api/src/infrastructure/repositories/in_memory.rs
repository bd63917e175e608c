// In-memory repository implementations
// Back the `memory` storage mode and the test suites; state lives for the
// lifetime of the process.

use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use crate::domain::errors::{TournamentError, TournamentResult};
use crate::domain::matches::{Match, MatchId, MatchStatus};
use crate::domain::repositories::{EntityKind, IdAllocator, MatchRepository, TeamRepository};
use crate::domain::team::{StatsDelta, Team, TeamId};

#[derive(Default)]
struct TeamTable {
    // Ids are allocated increasingly, so key order is insertion order.
    teams: BTreeMap<TeamId, Team>,
    applied: HashSet<(MatchId, TeamId)>,
}

/// Team repository held in process memory
#[derive(Default)]
pub struct InMemoryTeamRepository {
    table: RwLock<TeamTable>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn insert(&self, team: &Team) -> TournamentResult<()> {
        let mut table = self.table.write().await;
        if table.teams.contains_key(&team.team_id()) {
            return Err(TournamentError::Storage(format!(
                "Team {} already exists",
                team.team_id()
            )));
        }
        table.teams.insert(team.team_id(), team.clone());
        Ok(())
    }

    async fn list_all(&self) -> TournamentResult<Vec<Team>> {
        Ok(self.table.read().await.teams.values().cloned().collect())
    }

    async fn find_by_id(&self, team_id: TeamId) -> TournamentResult<Option<Team>> {
        Ok(self.table.read().await.teams.get(&team_id).cloned())
    }

    async fn update_stats(&self, team_id: TeamId, delta: &StatsDelta) -> TournamentResult<()> {
        let mut table = self.table.write().await;
        let team = table
            .teams
            .get_mut(&team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        team.apply(delta)?;
        Ok(())
    }

    async fn set_seed(&self, team_id: TeamId, seed_number: i32) -> TournamentResult<()> {
        let mut table = self.table.write().await;
        let team = table
            .teams
            .get_mut(&team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        team.assign_seed(seed_number)?;
        Ok(())
    }

    async fn apply_match_stats(
        &self,
        match_id: MatchId,
        team_id: TeamId,
        delta: &StatsDelta,
    ) -> TournamentResult<bool> {
        let mut table = self.table.write().await;
        if table.applied.contains(&(match_id, team_id)) {
            return Ok(false);
        }

        let team = table
            .teams
            .get_mut(&team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        team.apply(delta)?;
        table.applied.insert((match_id, team_id));

        Ok(true)
    }
}

/// Match repository held in process memory
#[derive(Default)]
pub struct InMemoryMatchRepository {
    matches: RwLock<BTreeMap<MatchId, Match>>,
}

impl InMemoryMatchRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn insert(&self, m: &Match) -> TournamentResult<()> {
        let mut matches = self.matches.write().await;
        if matches.contains_key(&m.match_id()) {
            return Err(TournamentError::Storage(format!(
                "Match {} already exists",
                m.match_id()
            )));
        }
        matches.insert(m.match_id(), m.clone());
        Ok(())
    }

    async fn list_all(&self) -> TournamentResult<Vec<Match>> {
        Ok(self.matches.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, match_id: MatchId) -> TournamentResult<Option<Match>> {
        Ok(self.matches.read().await.get(&match_id).cloned())
    }

    async fn record_result(&self, m: &Match) -> TournamentResult<()> {
        let mut matches = self.matches.write().await;
        let stored = matches
            .get_mut(&m.match_id())
            .ok_or(TournamentError::MatchNotFound(m.match_id()))?;

        if stored.status().is_decided() {
            return Err(TournamentError::AlreadyDecided(m.match_id()));
        }

        *stored = m.clone();
        Ok(())
    }

    async fn mark_settled(&self, match_id: MatchId) -> TournamentResult<()> {
        let mut matches = self.matches.write().await;
        let stored = matches
            .get_mut(&match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        stored.settle()?;
        Ok(())
    }

    async fn list_unsettled(&self) -> TournamentResult<Vec<Match>> {
        Ok(self
            .matches
            .read()
            .await
            .values()
            .filter(|m| m.status() == MatchStatus::Decided)
            .cloned()
            .collect())
    }
}

/// Per-kind counters starting at 1
#[derive(Default)]
pub struct InMemoryIdAllocator {
    sequences: Mutex<HashMap<EntityKind, i64>>,
}

impl InMemoryIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdAllocator for InMemoryIdAllocator {
    async fn next_id(&self, kind: EntityKind) -> TournamentResult<i64> {
        let mut sequences = self.sequences.lock().await;
        let seq = sequences.entry(kind).or_insert(0);
        *seq += 1;
        Ok(*seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matches::MatchScore;

    #[tokio::test]
    async fn id_sequences_are_independent_per_kind() {
        let ids = InMemoryIdAllocator::new();

        assert_eq!(ids.next_id(EntityKind::Team).await.unwrap(), 1);
        assert_eq!(ids.next_id(EntityKind::Team).await.unwrap(), 2);
        assert_eq!(ids.next_id(EntityKind::Match).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn apply_match_stats_credits_once() {
        let repo = InMemoryTeamRepository::new();
        let (team, _) = Team::register(1, "Alice", "Bob").unwrap();
        repo.insert(&team).await.unwrap();
        let delta = StatsDelta {
            wins: 1,
            losses: 0,
            points_won: 11,
            points_lost: 4,
        };

        assert!(repo.apply_match_stats(7, 1, &delta).await.unwrap());
        assert!(!repo.apply_match_stats(7, 1, &delta).await.unwrap());

        let stored = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.wins(), 1);
        assert_eq!(stored.points_lost(), 4);
    }

    #[tokio::test]
    async fn unknown_team_updates_fail() {
        let repo = InMemoryTeamRepository::new();

        assert!(matches!(
            repo.update_stats(9, &StatsDelta::default()).await,
            Err(TournamentError::TeamNotFound(9))
        ));
        assert!(matches!(
            repo.set_seed(9, 1).await,
            Err(TournamentError::TeamNotFound(9))
        ));
    }

    #[tokio::test]
    async fn record_result_only_once() {
        let repo = InMemoryMatchRepository::new();
        let (mut m, _) = Match::schedule(1, 10, 20).unwrap();
        repo.insert(&m).await.unwrap();

        m.decide(10, MatchScore::new(11, 4).unwrap()).unwrap();
        repo.record_result(&m).await.unwrap();

        assert!(matches!(
            repo.record_result(&m).await,
            Err(TournamentError::AlreadyDecided(1))
        ));
        assert_eq!(repo.list_unsettled().await.unwrap().len(), 1);

        repo.mark_settled(1).await.unwrap();
        assert!(repo.list_unsettled().await.unwrap().is_empty());
    }
}

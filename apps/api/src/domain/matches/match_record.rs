use chrono::{DateTime, Utc};

use super::events::MatchEvent;
use super::value_objects::{MatchOutcome, MatchScore, MatchStatus};
use super::MatchId;
use crate::domain::errors::{TournamentError, TournamentResult};
use crate::domain::team::TeamId;

/// Match aggregate root
///
/// A contest between two distinct teams. Created open, decided exactly
/// once, then settled once both teams have been credited.
///
/// # Invariants
/// - `team_one_id != team_two_id`
/// - `winner_id`, when set, is one of the two teams and never changes
/// - `points_won`/`points_lost` are set together with `winner_id`
/// - Only a decided match can be settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    match_id: MatchId,
    team_one_id: TeamId,
    team_two_id: TeamId,
    winner_id: Option<TeamId>,
    score: Option<MatchScore>,
    stats_settled: bool,
    created_at: DateTime<Utc>,
    decided_at: Option<DateTime<Utc>>,
}

impl Match {
    /// Schedules an open match between two teams
    ///
    /// Team existence is checked by the ledger; the aggregate only enforces
    /// that the teams differ.
    pub fn schedule(
        match_id: MatchId,
        team_one_id: TeamId,
        team_two_id: TeamId,
    ) -> TournamentResult<(Self, Vec<MatchEvent>)> {
        if team_one_id == team_two_id {
            return Err(TournamentError::invalid_input(format!(
                "A match needs two different teams, got team {} twice",
                team_one_id
            )));
        }

        let m = Self {
            match_id,
            team_one_id,
            team_two_id,
            winner_id: None,
            score: None,
            stats_settled: false,
            created_at: Utc::now(),
            decided_at: None,
        };

        let events = vec![MatchEvent::Scheduled {
            match_id,
            team_one_id,
            team_two_id,
        }];

        Ok((m, events))
    }

    /// Records the result of the match
    ///
    /// # Returns
    /// * `Ok((MatchOutcome, MatchEvent))` - Outcome to credit to the teams
    /// * `Err(AlreadyDecided)` - If a result was already recorded
    /// * `Err(InvalidInput)` - If the winner did not play in this match
    pub fn decide(
        &mut self,
        winner_id: TeamId,
        score: MatchScore,
    ) -> TournamentResult<(MatchOutcome, MatchEvent)> {
        if !self.status().can_transition_to(MatchStatus::Decided) {
            return Err(TournamentError::AlreadyDecided(self.match_id));
        }

        let loser_id = self.opponent_of(winner_id).ok_or_else(|| {
            TournamentError::invalid_input(format!(
                "Team {} did not play in match {}",
                winner_id, self.match_id
            ))
        })?;

        self.winner_id = Some(winner_id);
        self.score = Some(score);
        self.decided_at = Some(Utc::now());

        let outcome = MatchOutcome {
            match_id: self.match_id,
            winner_id,
            loser_id,
            score,
        };

        Ok((
            outcome,
            MatchEvent::Decided {
                match_id: self.match_id,
                winner_id,
                loser_id,
            },
        ))
    }

    /// Marks both teams as credited
    pub fn settle(&mut self) -> TournamentResult<MatchEvent> {
        match self.status() {
            MatchStatus::Open => Err(TournamentError::invalid_input(format!(
                "Match {} has no recorded result",
                self.match_id
            ))),
            // Settling twice is harmless; reconciliation may race a retry.
            MatchStatus::Decided | MatchStatus::Settled => {
                self.stats_settled = true;
                Ok(MatchEvent::Settled {
                    match_id: self.match_id,
                })
            }
        }
    }

    /// Outcome of a decided match, `None` while open
    pub fn outcome(&self) -> Option<MatchOutcome> {
        let winner_id = self.winner_id?;
        let score = self.score?;
        let loser_id = self.opponent_of(winner_id)?;

        Some(MatchOutcome {
            match_id: self.match_id,
            winner_id,
            loser_id,
            score,
        })
    }

    /// The other team of the match, `None` if `team_id` did not play
    pub fn opponent_of(&self, team_id: TeamId) -> Option<TeamId> {
        if team_id == self.team_one_id {
            Some(self.team_two_id)
        } else if team_id == self.team_two_id {
            Some(self.team_one_id)
        } else {
            None
        }
    }

    pub fn status(&self) -> MatchStatus {
        match (self.winner_id, self.stats_settled) {
            (None, _) => MatchStatus::Open,
            (Some(_), false) => MatchStatus::Decided,
            (Some(_), true) => MatchStatus::Settled,
        }
    }

    // ===== Getters =====

    pub fn match_id(&self) -> MatchId {
        self.match_id
    }

    pub fn team_one_id(&self) -> TeamId {
        self.team_one_id
    }

    pub fn team_two_id(&self) -> TeamId {
        self.team_two_id
    }

    pub fn winner_id(&self) -> Option<TeamId> {
        self.winner_id
    }

    pub fn points_won(&self) -> Option<i64> {
        self.score.map(|s| s.points_won())
    }

    pub fn points_lost(&self) -> Option<i64> {
        self.score.map(|s| s.points_lost())
    }

    pub fn stats_settled(&self) -> bool {
        self.stats_settled
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn decided_at(&self) -> Option<DateTime<Utc>> {
        self.decided_at
    }

    /// Reconstructs a Match from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        match_id: MatchId,
        team_one_id: TeamId,
        team_two_id: TeamId,
        winner_id: Option<TeamId>,
        points_won: Option<i64>,
        points_lost: Option<i64>,
        stats_settled: bool,
        created_at: DateTime<Utc>,
        decided_at: Option<DateTime<Utc>>,
    ) -> TournamentResult<Self> {
        let score = match (points_won, points_lost) {
            (Some(won), Some(lost)) => Some(MatchScore::new(won, lost)?),
            _ => None,
        };

        if winner_id.is_some() != score.is_some() {
            return Err(TournamentError::Storage(format!(
                "Match {} has a winner without a score",
                match_id
            )));
        }

        Ok(Self {
            match_id,
            team_one_id,
            team_two_id,
            winner_id,
            score,
            stats_settled,
            created_at,
            decided_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_match() -> Match {
        Match::schedule(1, 10, 20).unwrap().0
    }

    #[test]
    fn schedule_creates_open_match() {
        let (m, events) = Match::schedule(1, 10, 20).unwrap();

        assert_eq!(m.status(), MatchStatus::Open);
        assert_eq!(m.winner_id(), None);
        assert_eq!(m.points_won(), None);
        assert!(m.outcome().is_none());
        assert_eq!(events[0].match_id(), 1);
    }

    #[test]
    fn schedule_team_against_itself_fails() {
        assert!(matches!(
            Match::schedule(1, 10, 10),
            Err(TournamentError::InvalidInput(_))
        ));
    }

    #[test]
    fn decide_identifies_loser() {
        let mut m = open_match();

        let (outcome, event) = m.decide(20, MatchScore::new(11, 4).unwrap()).unwrap();

        assert_eq!(outcome.winner_id, 20);
        assert_eq!(outcome.loser_id, 10);
        assert_eq!(m.status(), MatchStatus::Decided);
        assert_eq!(m.winner_id(), Some(20));
        assert_eq!(m.points_won(), Some(11));
        assert_eq!(m.points_lost(), Some(4));
        assert!(m.decided_at().is_some());
        assert_eq!(
            event,
            MatchEvent::Decided {
                match_id: 1,
                winner_id: 20,
                loser_id: 10
            }
        );
        assert_eq!(m.outcome(), Some(outcome));
    }

    #[test]
    fn decide_with_outside_winner_fails() {
        let mut m = open_match();

        let result = m.decide(30, MatchScore::new(11, 4).unwrap());

        assert!(matches!(result, Err(TournamentError::InvalidInput(_))));
        assert_eq!(m.status(), MatchStatus::Open);
    }

    #[test]
    fn decide_twice_fails() {
        let mut m = open_match();
        m.decide(10, MatchScore::new(11, 4).unwrap()).unwrap();

        let result = m.decide(20, MatchScore::new(11, 9).unwrap());

        assert!(matches!(result, Err(TournamentError::AlreadyDecided(1))));
        assert_eq!(m.winner_id(), Some(10));
    }

    #[test]
    fn settle_requires_result() {
        let mut m = open_match();
        assert!(m.settle().is_err());

        m.decide(10, MatchScore::new(11, 4).unwrap()).unwrap();
        m.settle().unwrap();
        assert_eq!(m.status(), MatchStatus::Settled);
        assert!(m.settle().is_ok());
    }

    #[test]
    fn from_persistence_rejects_half_recorded_result() {
        let result = Match::from_persistence(
            1,
            10,
            20,
            Some(10),
            None,
            None,
            false,
            Utc::now(),
            None,
        );

        assert!(matches!(result, Err(TournamentError::Storage(_))));
    }
}

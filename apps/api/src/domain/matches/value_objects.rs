use serde::{Deserialize, Serialize};

use super::MatchId;
use crate::domain::errors::{TournamentError, TournamentResult};
use crate::domain::team::{StatsDelta, TeamId};

/// Lifecycle status of a match
///
/// # Status Transitions
/// ```text
/// Open -> Decided -> Settled
/// ```
///
/// `Decided` means the result is recorded but team statistics may not have
/// been fully credited yet; `Settled` means both teams were credited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Open,
    Decided,
    Settled,
}

impl MatchStatus {
    /// Checks if a transition from current status to next status is valid
    ///
    /// # Example
    /// ```
    /// use tournament_api::domain::matches::MatchStatus;
    ///
    /// assert!(MatchStatus::Open.can_transition_to(MatchStatus::Decided));
    /// assert!(!MatchStatus::Decided.can_transition_to(MatchStatus::Decided));
    /// ```
    pub fn can_transition_to(&self, next: MatchStatus) -> bool {
        use MatchStatus::*;
        matches!((self, next), (Open, Decided) | (Decided, Settled))
    }

    pub fn is_decided(&self) -> bool {
        !matches!(self, MatchStatus::Open)
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Open => write!(f, "open"),
            MatchStatus::Decided => write!(f, "decided"),
            MatchStatus::Settled => write!(f, "settled"),
        }
    }
}

/// Largest point total a single result may report
pub const MAX_POINTS: i64 = u32::MAX as i64;

/// Reported score of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchScore {
    points_won: i64,
    points_lost: i64,
}

impl MatchScore {
    pub fn new(points_won: i64, points_lost: i64) -> TournamentResult<Self> {
        if points_won < 0 || points_lost < 0 {
            return Err(TournamentError::invalid_input(
                "Points must be non-negative",
            ));
        }
        if points_won > MAX_POINTS || points_lost > MAX_POINTS {
            return Err(TournamentError::invalid_input(format!(
                "Points must not exceed {}",
                MAX_POINTS
            )));
        }
        Ok(Self {
            points_won,
            points_lost,
        })
    }

    pub fn points_won(&self) -> i64 {
        self.points_won
    }

    pub fn points_lost(&self) -> i64 {
        self.points_lost
    }
}

/// A decided match reduced to what the team registry needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub match_id: MatchId,
    pub winner_id: TeamId,
    pub loser_id: TeamId,
    pub score: MatchScore,
}

impl MatchOutcome {
    /// Increments credited to the winner
    ///
    /// The reported score is credited to both sides alike; only the
    /// win/loss counter differs.
    pub fn winner_delta(&self) -> StatsDelta {
        StatsDelta {
            wins: 1,
            losses: 0,
            points_won: self.score.points_won(),
            points_lost: self.score.points_lost(),
        }
    }

    /// Increments credited to the loser
    pub fn loser_delta(&self) -> StatsDelta {
        StatsDelta {
            wins: 0,
            losses: 1,
            points_won: self.score.points_won(),
            points_lost: self.score.points_lost(),
        }
    }
}

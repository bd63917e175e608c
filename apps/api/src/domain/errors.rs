use std::fmt;

use thiserror::Error;

use super::matches::MatchId;
use super::team::TeamId;

/// Step of result processing that failed after the match was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStep {
    /// Crediting the winning team
    WinnerStats,
    /// Crediting the losing team
    LoserStats,
    /// Marking the match as settled
    SettleMatch,
}

impl ResultStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStep::WinnerStats => "winner_stats",
            ResultStep::LoserStats => "loser_stats",
            ResultStep::SettleMatch => "settle_match",
        }
    }
}

impl fmt::Display for ResultStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the tournament domain and its repositories
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),

    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),

    #[error("Match {0} already has a recorded result")]
    AlreadyDecided(MatchId),

    /// The match was decided but team statistics were not fully applied.
    /// Resolved by reconciling the match.
    #[error("Match {match_id} decided but {step} failed: {source}")]
    PartialFailure {
        match_id: MatchId,
        step: ResultStep,
        #[source]
        source: Box<TournamentError>,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl TournamentError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        TournamentError::InvalidInput(message.into())
    }

    pub fn partial(match_id: MatchId, step: ResultStep, source: TournamentError) -> Self {
        TournamentError::PartialFailure {
            match_id,
            step,
            source: Box::new(source),
        }
    }
}

pub type TournamentResult<T> = Result<T, TournamentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_failure_names_the_step() {
        let err = TournamentError::partial(
            7,
            ResultStep::LoserStats,
            TournamentError::Storage("connection reset".to_string()),
        );

        let message = err.to_string();
        assert!(message.contains("Match 7"));
        assert!(message.contains("loser_stats"));
        assert!(message.contains("connection reset"));
    }

    #[test]
    fn not_found_messages() {
        assert_eq!(TournamentError::TeamNotFound(3).to_string(), "Team not found: 3");
        assert_eq!(TournamentError::MatchNotFound(9).to_string(), "Match not found: 9");
    }
}

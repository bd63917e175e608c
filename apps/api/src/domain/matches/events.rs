use super::MatchId;
use crate::domain::team::TeamId;

/// Domain events emitted by the Match aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// Fired when a match between two teams is scheduled
    Scheduled {
        match_id: MatchId,
        team_one_id: TeamId,
        team_two_id: TeamId,
    },
    /// Fired when a result is recorded
    Decided {
        match_id: MatchId,
        winner_id: TeamId,
        loser_id: TeamId,
    },
    /// Fired once both teams have been credited
    Settled { match_id: MatchId },
}

impl MatchEvent {
    pub fn match_id(&self) -> MatchId {
        match self {
            MatchEvent::Scheduled { match_id, .. } => *match_id,
            MatchEvent::Decided { match_id, .. } => *match_id,
            MatchEvent::Settled { match_id } => *match_id,
        }
    }
}

use std::fmt;

use crate::domain::errors::{TournamentError, TournamentResult};

/// Player name value object
///
/// # Invariants
/// - Not empty
/// - ASCII letters only (no digits, whitespace or punctuation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerName(String);

impl PlayerName {
    /// Validates and wraps a player name
    ///
    /// # Example
    /// ```
    /// use tournament_api::domain::team::value_objects::PlayerName;
    ///
    /// let name = PlayerName::new("Alice").expect("valid name");
    /// assert_eq!(name.as_str(), "Alice");
    /// assert!(PlayerName::new("Bob1").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> TournamentResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(TournamentError::invalid_input(
                "Specify names for both players",
            ));
        }
        if !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(TournamentError::invalid_input(format!(
                "Player name '{}' cannot contain numbers or special characters",
                name
            )));
        }
        Ok(PlayerName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used for the distinct-players rule
    pub fn same_player_as(&self, other: &PlayerName) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Increments applied to a team's counters in one atomic update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsDelta {
    pub wins: i64,
    pub losses: i64,
    pub points_won: i64,
    pub points_lost: i64,
}

impl StatsDelta {
    /// Rejects negative increments; counters only grow
    pub fn validate(&self) -> TournamentResult<()> {
        if self.wins < 0 || self.losses < 0 || self.points_won < 0 || self.points_lost < 0 {
            return Err(TournamentError::invalid_input(
                "Statistic increments must be non-negative",
            ));
        }
        Ok(())
    }
}

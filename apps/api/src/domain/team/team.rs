use chrono::{DateTime, Utc};

use super::events::TeamEvent;
use super::value_objects::{PlayerName, StatsDelta};
use super::TeamId;
use crate::domain::errors::{TournamentError, TournamentResult};

/// Team aggregate root
///
/// A pair of players competing as one unit, with the win/loss and point
/// statistics that seeding ranks on.
///
/// # Invariants
/// - Both player names are valid and differ case-insensitively
/// - Counters start at zero and only grow
/// - `wins + losses` equals the number of settled matches the team played
/// - `seed_number` is unset until seeding has run
///
/// # Example
/// ```
/// use tournament_api::domain::team::Team;
///
/// let (team, events) = Team::register(1, "Alice", "Bob").expect("valid team");
///
/// assert_eq!(team.player_one(), "Alice");
/// assert_eq!(team.wins(), 0);
/// assert_eq!(team.seed_number(), None);
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    team_id: TeamId,
    player_one: PlayerName,
    player_two: PlayerName,
    wins: i64,
    losses: i64,
    points_won: i64,
    points_lost: i64,
    seed_number: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Team {
    /// Registers a new team under an already allocated id
    ///
    /// # Returns
    /// * `Ok((Team, Vec<TeamEvent>))` - New team and its Registered event
    /// * `Err(TournamentError::InvalidInput)` - If either name is invalid or
    ///   both names are the same player
    pub fn register(
        team_id: TeamId,
        player_one: &str,
        player_two: &str,
    ) -> TournamentResult<(Self, Vec<TeamEvent>)> {
        let (player_one, player_two) = Self::validate_players(player_one, player_two)?;

        let now = Utc::now();
        let team = Self {
            team_id,
            player_one,
            player_two,
            wins: 0,
            losses: 0,
            points_won: 0,
            points_lost: 0,
            seed_number: None,
            created_at: now,
            updated_at: now,
        };

        let events = vec![TeamEvent::Registered {
            team_id,
            player_one: team.player_one.to_string(),
            player_two: team.player_two.to_string(),
        }];

        Ok((team, events))
    }

    /// Checks both names and that they belong to different players
    pub fn validate_players(
        player_one: &str,
        player_two: &str,
    ) -> TournamentResult<(PlayerName, PlayerName)> {
        let player_one = PlayerName::new(player_one)?;
        let player_two = PlayerName::new(player_two)?;

        if player_one.same_player_as(&player_two) {
            return Err(TournamentError::invalid_input(
                "Each player's name must be unique",
            ));
        }

        Ok((player_one, player_two))
    }

    /// Adds the delta to this team's counters
    ///
    /// Nothing changes if any counter would overflow.
    pub fn apply(&mut self, delta: &StatsDelta) -> TournamentResult<TeamEvent> {
        delta.validate()?;

        let wins = checked_counter("wins", self.wins, delta.wins)?;
        let losses = checked_counter("losses", self.losses, delta.losses)?;
        let points_won = checked_counter("points_won", self.points_won, delta.points_won)?;
        let points_lost = checked_counter("points_lost", self.points_lost, delta.points_lost)?;

        self.wins = wins;
        self.losses = losses;
        self.points_won = points_won;
        self.points_lost = points_lost;
        self.updated_at = Utc::now();

        Ok(TeamEvent::StatsUpdated {
            team_id: self.team_id,
        })
    }

    /// Overwrites the seed; seeds are 1-based
    pub fn assign_seed(&mut self, seed_number: i32) -> TournamentResult<TeamEvent> {
        if seed_number < 1 {
            return Err(TournamentError::invalid_input(format!(
                "Seed number must be at least 1, got {}",
                seed_number
            )));
        }

        self.seed_number = Some(seed_number);
        self.updated_at = Utc::now();

        Ok(TeamEvent::Seeded {
            team_id: self.team_id,
            seed_number,
        })
    }

    /// True once the team has won at least one match
    pub fn has_won(&self) -> bool {
        self.wins > 0
    }

    // ===== Getters =====

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    pub fn player_one(&self) -> &str {
        self.player_one.as_str()
    }

    pub fn player_two(&self) -> &str {
        self.player_two.as_str()
    }

    pub fn wins(&self) -> i64 {
        self.wins
    }

    pub fn losses(&self) -> i64 {
        self.losses
    }

    pub fn points_won(&self) -> i64 {
        self.points_won
    }

    pub fn points_lost(&self) -> i64 {
        self.points_lost
    }

    pub fn seed_number(&self) -> Option<i32> {
        self.seed_number
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Names are re-validated; counters are trusted as stored.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        team_id: TeamId,
        player_one: String,
        player_two: String,
        wins: i64,
        losses: i64,
        points_won: i64,
        points_lost: i64,
        seed_number: Option<i32>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> TournamentResult<Self> {
        Ok(Self {
            team_id,
            player_one: PlayerName::new(player_one)?,
            player_two: PlayerName::new(player_two)?,
            wins,
            losses,
            points_won,
            points_lost,
            seed_number,
            created_at,
            updated_at,
        })
    }
}

fn checked_counter(name: &str, current: i64, increment: i64) -> TournamentResult<i64> {
    current.checked_add(increment).ok_or_else(|| {
        TournamentError::invalid_input(format!("Adding {} to {} would overflow", increment, name))
    })
}

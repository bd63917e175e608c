use super::TeamId;

/// Domain events emitted by the Team aggregate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// Fired when a team is registered
    Registered {
        team_id: TeamId,
        player_one: String,
        player_two: String,
    },
    /// Fired when a result is credited to the team
    StatsUpdated { team_id: TeamId },
    /// Fired when seeding places the team
    Seeded { team_id: TeamId, seed_number: i32 },
}

impl TeamEvent {
    pub fn team_id(&self) -> TeamId {
        match self {
            TeamEvent::Registered { team_id, .. } => *team_id,
            TeamEvent::StatsUpdated { team_id } => *team_id,
            TeamEvent::Seeded { team_id, .. } => *team_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_carry_team_id() {
        let registered = TeamEvent::Registered {
            team_id: 4,
            player_one: "Alice".to_string(),
            player_two: "Bob".to_string(),
        };
        assert_eq!(registered.team_id(), 4);
        assert_eq!(TeamEvent::StatsUpdated { team_id: 5 }.team_id(), 5);
        assert_eq!(
            TeamEvent::Seeded {
                team_id: 6,
                seed_number: 1
            }
            .team_id(),
            6
        );
    }
}

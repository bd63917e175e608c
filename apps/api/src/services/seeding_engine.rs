use crate::domain::errors::TournamentResult;
use crate::domain::seeding;
use crate::domain::team::Team;

use super::team_registry::TeamRegistry;

/// Recomputes every team's seed from current standings
///
/// A full batch pass: re-reads all teams, ranks them and overwrites each
/// seed. Running it twice without new results assigns the same seeds.
#[derive(Clone)]
pub struct SeedingEngine {
    registry: TeamRegistry,
}

impl SeedingEngine {
    pub fn new(registry: TeamRegistry) -> Self {
        Self { registry }
    }

    /// Returns the teams ordered by their new seed
    pub async fn recompute(&self) -> TournamentResult<Vec<Team>> {
        let teams = self.registry.list_all().await?;
        let mut ranked = seeding::rank(teams);

        for (team, seed_number) in ranked.iter_mut().zip(1..) {
            self.registry.set_seed(team.team_id(), seed_number).await?;
            let event = team.assign_seed(seed_number)?;
            tracing::debug!(?event, "team seeded");
        }

        tracing::info!(teams = ranked.len(), "seeding recomputed");
        Ok(ranked)
    }
}

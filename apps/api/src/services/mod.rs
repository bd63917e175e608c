// Application services
// Orchestrate domain aggregates over the repository ports

pub mod match_ledger;
pub mod result_processor;
pub mod seeding_engine;
pub mod team_registry;

use std::sync::Arc;

pub use match_ledger::MatchLedger;
pub use result_processor::{ResultProcessor, ResultReport};
pub use seeding_engine::SeedingEngine;
pub use team_registry::TeamRegistry;

use crate::domain::repositories::{IdAllocator, MatchRepository, TeamRepository};
use crate::infrastructure::repositories::{
    InMemoryIdAllocator, InMemoryMatchRepository, InMemoryTeamRepository,
};

/// Every tournament service wired over one storage backend
///
/// Built once at startup and shared with the HTTP handlers as router state.
#[derive(Clone)]
pub struct Tournament {
    pub teams: TeamRegistry,
    pub matches: MatchLedger,
    pub results: ResultProcessor,
    pub seeding: SeedingEngine,
}

impl Tournament {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        matches: Arc<dyn MatchRepository>,
        ids: Arc<dyn IdAllocator>,
    ) -> Self {
        let registry = TeamRegistry::new(teams.clone(), ids.clone());
        let ledger = MatchLedger::new(matches, teams, ids);

        Self {
            results: ResultProcessor::new(ledger.clone(), registry.clone()),
            seeding: SeedingEngine::new(registry.clone()),
            teams: registry,
            matches: ledger,
        }
    }

    /// Tournament over process-local storage
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryTeamRepository::new()),
            Arc::new(InMemoryMatchRepository::new()),
            Arc::new(InMemoryIdAllocator::new()),
        )
    }
}

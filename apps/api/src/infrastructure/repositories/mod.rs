// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_id_allocator;
pub mod postgres_match_repository;
pub mod postgres_team_repository;

pub use in_memory::{InMemoryIdAllocator, InMemoryMatchRepository, InMemoryTeamRepository};
pub use postgres_id_allocator::PostgresIdAllocator;
pub use postgres_match_repository::PostgresMatchRepository;
pub use postgres_team_repository::PostgresTeamRepository;

// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod id_allocator;
pub mod match_repository;
pub mod team_repository;

pub use id_allocator::{EntityKind, IdAllocator};
pub use match_repository::MatchRepository;
pub use team_repository::TeamRepository;

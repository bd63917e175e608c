// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod errors;
pub mod matches;
pub mod repositories;
pub mod seeding;
pub mod team;

pub use errors::{ResultStep, TournamentError, TournamentResult};

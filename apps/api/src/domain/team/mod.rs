// Team domain module
// Contains team aggregate root, value objects, and domain events

#![allow(clippy::module_inception)]

pub mod events;
pub mod team;
pub mod value_objects;

pub use events::TeamEvent;
pub use team::Team;
pub use value_objects::{PlayerName, StatsDelta};

/// Team identifier issued by the id allocator
pub type TeamId = i64;

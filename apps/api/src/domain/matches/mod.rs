// Match domain module
// Contains the match aggregate, its status machine and result value objects

pub mod events;
pub mod match_record;
pub mod value_objects;

pub use events::MatchEvent;
pub use match_record::Match;
pub use value_objects::{MatchOutcome, MatchScore, MatchStatus, MAX_POINTS};

/// Match identifier issued by the id allocator
pub type MatchId = i64;

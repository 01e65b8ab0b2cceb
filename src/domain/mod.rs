// Domain layer module exports
// Players, teams and the value objects that validate them
// Domain is independent of console and export concerns

pub mod errors;
pub mod player;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use errors::{RosterError, RosterResult};
pub use player::Player;
pub use team::Team;
pub use value_objects::{Jersey, ShotType};

// Console layer
// Line-oriented scorekeeping shell that drives the domain model

pub mod command;
pub mod errors;
pub mod session;

// Re-export main types
pub use command::Command;
pub use errors::ConsoleError;
pub use session::{Flow, Session};

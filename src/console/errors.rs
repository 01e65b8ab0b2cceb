use thiserror::Error;

use crate::domain::errors::RosterError;

/// Errors that can occur while running a console command
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Not a number: {0}")]
    NotANumber(String),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("JSON rendering error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

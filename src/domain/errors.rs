use thiserror::Error;

/// Errors raised by roster and stat-keeping operations
///
/// Every failure is raised before any state is touched, so a caller can
/// recover and retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Invalid jersey number. Must be between 0 and 99")]
    InvalidJersey(i32),

    #[error("Invalid shot type: {0}")]
    InvalidShotType(i32),

    #[error("Jersey #{jersey} already assigned to {existing}")]
    DuplicateJersey { jersey: u8, existing: String },

    #[error("No player wearing jersey #{0}")]
    PlayerNotFound(u8),
}

impl RosterError {
    /// True for errors caused by an out-of-domain argument (jersey or shot type)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            RosterError::InvalidJersey(_) | RosterError::InvalidShotType(_)
        )
    }
}

pub type RosterResult<T> = Result<T, RosterError>;

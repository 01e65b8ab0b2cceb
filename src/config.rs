// Runtime configuration
// Values come from the environment (optionally seeded from a .env file)

use crate::domain::player::UNKNOWN_NAME;

/// Environment variable holding the team name
pub const TEAM_NAME_VAR: &str = "ROSTER_TEAM_NAME";
/// Environment variable holding the console prompt
pub const PROMPT_VAR: &str = "ROSTER_PROMPT";

const DEFAULT_PROMPT: &str = "> ";

/// Scorekeeper settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name given to the team being tracked
    pub team_name: String,
    /// Prompt printed before each command; empty disables it
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            team_name: UNKNOWN_NAME.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment
    ///
    /// Unset variables fall back to [`Config::default`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let team_name = lookup(TEAM_NAME_VAR).unwrap_or_else(|| {
            tracing::debug!("{} not set, using default", TEAM_NAME_VAR);
            defaults.team_name
        });
        let prompt = lookup(PROMPT_VAR).unwrap_or(defaults.prompt);

        Self { team_name, prompt }
    }
}

// Box score snapshots
// Plain serializable copies of a team's stats for export

use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::team::Team;

/// Stat line for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLine {
    pub jersey: u8,
    pub name: String,
    pub fouls: u32,
    pub one_point_makes: u32,
    pub two_point_makes: u32,
    pub three_point_makes: u32,
    pub points: u32,
}

impl From<&Player> for PlayerLine {
    fn from(player: &Player) -> Self {
        Self {
            jersey: player.jersey(),
            name: player.name().to_string(),
            fouls: player.fouls(),
            one_point_makes: player.one_point_makes(),
            two_point_makes: player.two_point_makes(),
            three_point_makes: player.three_point_makes(),
            points: player.points(),
        }
    }
}

/// Team totals plus every player's line, in roster order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxScore {
    pub team: String,
    pub fouls: u32,
    pub points: u32,
    pub players: Vec<PlayerLine>,
}

impl From<&Team> for BoxScore {
    fn from(team: &Team) -> Self {
        Self {
            team: team.name().to_string(),
            fouls: team.team_fouls(),
            points: team.team_points(),
            players: team.players().iter().map(PlayerLine::from).collect(),
        }
    }
}

impl BoxScore {
    /// Renders the box score as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

use std::fmt::Write as _;

use super::errors::{RosterError, RosterResult};
use super::player::{Player, UNKNOWN_NAME};
use super::value_objects::Jersey;

/// Header row of the detail stats table
pub const DETAIL_HEADER: &str = "Jersey  Name             Fouls  1pt  2pt  3pt  Total";
/// Separator row printed under [`DETAIL_HEADER`]
pub const DETAIL_SEPARATOR: &str = "======  ===============  =====  ===  ===  ===  =====";

/// Team aggregate root
///
/// Owns an ordered roster of players and rolls their stats up into team
/// totals.
///
/// # Invariants
/// - No two players share a jersey number
/// - Players keep the order in which they were added
/// - Players are only added through [`Team::add_player`]
///
/// # Example
/// ```
/// use hoops_roster::domain::team::Team;
///
/// let mut team = Team::with_name("Eagles");
/// team.add_player("Sam", 7).expect("free jersey");
/// assert!(team.add_player("Lee", 7).is_err());
///
/// team.record_shot(7, 3).expect("valid shot");
/// team.record_foul(7).expect("known player");
///
/// assert_eq!(team.team_points(), 3);
/// assert_eq!(team.team_fouls(), 1);
/// assert_eq!(team.team_stats(), "Team Eagles Fouls: 1 Points: 3");
/// ```
#[derive(Debug, Clone)]
pub struct Team {
    name: String,
    players: Vec<Player>,
}

impl Default for Team {
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            players: Vec::new(),
        }
    }
}

impl Team {
    /// Creates an empty team named "Unknown"
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty team with the given name
    pub fn with_name(name: impl Into<String>) -> Self {
        let mut team = Self::new();
        team.set_name(name);
        team
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the team's name; any text is accepted
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the roster in insertion order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the number of players on the roster
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if no player has been added yet
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Finds the player wearing `jersey`
    ///
    /// # Returns
    /// * `Ok(Some(&Player))` - The rostered player
    /// * `Ok(None)` - If nobody wears that number
    /// * `Err(RosterError::InvalidJersey)` - If jersey is outside 0..=99
    pub fn find_player(&self, jersey: i32) -> RosterResult<Option<&Player>> {
        let probe = Player::with_jersey(jersey)?;
        Ok(self.players.iter().find(|player| player.is_same_player(&probe)))
    }

    /// Mutable counterpart of [`Team::find_player`]
    pub fn find_player_mut(&mut self, jersey: i32) -> RosterResult<Option<&mut Player>> {
        let probe = Player::with_jersey(jersey)?;
        Ok(self
            .players
            .iter_mut()
            .find(|player| player.is_same_player(&probe)))
    }

    /// Adds a new player to the end of the roster
    ///
    /// # Business Rules
    /// - Jersey must be within 0..=99
    /// - Jersey must not already be assigned on this team
    ///
    /// The roster is unchanged when an error is returned.
    pub fn add_player(&mut self, name: impl Into<String>, jersey: i32) -> RosterResult<()> {
        if let Some(existing) = self.find_player(jersey)? {
            return Err(RosterError::DuplicateJersey {
                jersey: existing.jersey(),
                existing: existing.name().to_string(),
            });
        }

        let player = Player::with_name_and_jersey(name, jersey)?;
        tracing::debug!(
            team = %self.name,
            jersey = player.jersey(),
            name = player.name(),
            "player added"
        );
        self.players.push(player);
        Ok(())
    }

    /// Records a foul against the player wearing `jersey`
    pub fn record_foul(&mut self, jersey: i32) -> RosterResult<()> {
        let player = self.rostered_player_mut(jersey)?;
        player.record_foul();
        tracing::debug!(jersey = player.jersey(), fouls = player.fouls(), "foul recorded");
        Ok(())
    }

    /// Records a made shot (1, 2 or 3) for the player wearing `jersey`
    pub fn record_shot(&mut self, jersey: i32, shot_type: i32) -> RosterResult<()> {
        let player = self.rostered_player_mut(jersey)?;
        player.record_shot(shot_type)?;
        tracing::debug!(
            jersey = player.jersey(),
            shot_type,
            points = player.points(),
            "shot recorded"
        );
        Ok(())
    }

    fn rostered_player_mut(&mut self, jersey: i32) -> RosterResult<&mut Player> {
        let number = Jersey::new(jersey)?.number();
        self.find_player_mut(jersey)?
            .ok_or(RosterError::PlayerNotFound(number))
    }

    // ===== Aggregates =====

    /// Total fouls across the roster
    pub fn team_fouls(&self) -> u32 {
        self.players.iter().map(Player::fouls).sum()
    }

    /// Total points across the roster
    pub fn team_points(&self) -> u32 {
        self.players.iter().map(Player::points).sum()
    }

    // ===== Reporting =====

    /// Renders the per-player stats table, one row per player in roster order
    pub fn detail_stats(&self) -> String {
        let mut out = String::new();
        out.push_str(DETAIL_HEADER);
        out.push('\n');
        out.push_str(DETAIL_SEPARATOR);
        out.push('\n');

        for player in &self.players {
            // Writing into a String cannot fail.
            let _ = writeln!(
                out,
                "{:>6} {:>16} {:>6} {:>4} {:>4} {:>4} {:>6} ",
                player.jersey(),
                player.name(),
                player.fouls(),
                player.one_point_makes(),
                player.two_point_makes(),
                player.three_point_makes(),
                player.points()
            );
        }

        out
    }

    /// Prints [`Team::detail_stats`] to stdout
    pub fn display_detail_stats(&self) {
        print!("{}", self.detail_stats());
    }

    /// One-line team summary, e.g. `Team Eagles Fouls: 1 Points: 3`
    pub fn team_stats(&self) -> String {
        format!(
            "Team {} Fouls: {} Points: {}",
            self.name,
            self.team_fouls(),
            self.team_points()
        )
    }

    /// Prints [`Team::team_stats`] to stdout
    pub fn display_team_stats(&self) {
        println!("{}", self.team_stats());
    }
}

use std::any::Any;
use std::fmt;

use super::errors::RosterResult;
use super::value_objects::{Jersey, ShotType};

/// Name given to players and teams created without one
pub const UNKNOWN_NAME: &str = "Unknown";

/// A player on a basketball team plus the player's stats
///
/// # Invariants
/// - Jersey is always within 0..=99
/// - Counters only ever increase
/// - Points are derived from makes, never stored
///
/// Roster identity is the jersey alone; see [`Player::is_same_player`].
/// There is no `PartialEq` impl.
///
/// # Example
/// ```
/// use hoops_roster::domain::player::Player;
///
/// let mut player = Player::with_name_and_jersey("Sam", 7).expect("valid jersey");
/// player.record_shot(3).expect("valid shot");
/// player.record_foul();
///
/// assert_eq!(player.points(), 3);
/// assert_eq!(player.describe(), "#7 Sam Fouls: 1 Points: 3");
/// ```
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    jersey: Jersey,
    fouls: u32,
    one_point_makes: u32,
    two_point_makes: u32,
    three_point_makes: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            jersey: Jersey::default(),
            fouls: 0,
            one_point_makes: 0,
            two_point_makes: 0,
            three_point_makes: 0,
        }
    }
}

impl Player {
    /// Creates a player named "Unknown" wearing #0 with no stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unnamed player wearing `jersey`
    ///
    /// # Returns
    /// * `Err(RosterError::InvalidJersey)` - If jersey is outside 0..=99
    pub fn with_jersey(jersey: i32) -> RosterResult<Self> {
        let mut player = Self::new();
        player.set_jersey(jersey)?;
        Ok(player)
    }

    /// Creates a named player wearing `jersey`
    ///
    /// # Returns
    /// * `Err(RosterError::InvalidJersey)` - If jersey is outside 0..=99
    pub fn with_name_and_jersey(name: impl Into<String>, jersey: i32) -> RosterResult<Self> {
        let mut player = Self::new();
        player.set_name(name);
        player.set_jersey(jersey)?;
        Ok(player)
    }

    // ===== Getters =====

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's jersey number
    pub fn jersey(&self) -> u8 {
        self.jersey.number()
    }

    /// Returns the number of fouls committed
    pub fn fouls(&self) -> u32 {
        self.fouls
    }

    /// Returns the number of 1pt makes
    pub fn one_point_makes(&self) -> u32 {
        self.one_point_makes
    }

    /// Returns the number of 2pt makes
    pub fn two_point_makes(&self) -> u32 {
        self.two_point_makes
    }

    /// Returns the number of 3pt makes
    pub fn three_point_makes(&self) -> u32 {
        self.three_point_makes
    }

    /// Returns the total points scored across all shot types
    pub fn points(&self) -> u32 {
        self.one_point_makes * ShotType::OnePoint.points()
            + self.two_point_makes * ShotType::TwoPoint.points()
            + self.three_point_makes * ShotType::ThreePoint.points()
    }

    // ===== Mutators =====

    /// Sets the player's name; any text is accepted
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the player's jersey number
    ///
    /// The current jersey is kept if `jersey` is outside 0..=99.
    pub fn set_jersey(&mut self, jersey: i32) -> RosterResult<()> {
        self.jersey = Jersey::new(jersey)?;
        Ok(())
    }

    /// Records one foul
    pub fn record_foul(&mut self) {
        self.fouls += 1;
    }

    /// Records a made shot from its raw value (1, 2 or 3)
    ///
    /// No counter changes if `shot_type` is not a known shot value.
    pub fn record_shot(&mut self, shot_type: i32) -> RosterResult<()> {
        let shot = ShotType::try_from(shot_type)?;
        self.record_make(shot);
        Ok(())
    }

    /// Records a made shot of an already validated type
    pub fn record_make(&mut self, shot: ShotType) {
        match shot {
            ShotType::OnePoint => self.one_point_makes += 1,
            ShotType::TwoPoint => self.two_point_makes += 1,
            ShotType::ThreePoint => self.three_point_makes += 1,
        }
    }

    // ===== Reporting =====

    /// One-line summary, e.g. `#1 Player 1 Fouls: 0 Points: 1`
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Prints [`Player::describe`] to stdout
    pub fn display_stats(&self) {
        println!("{}", self);
    }

    /// True iff `other` is a `Player` wearing the same jersey
    ///
    /// Name and stats are ignored. This is the roster lookup identity, not
    /// general equality.
    pub fn is_same_player(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Player>()
            .is_some_and(|other| other.jersey == self.jersey)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} Fouls: {} Points: {}",
            self.jersey,
            self.name,
            self.fouls,
            self.points()
        )
    }
}

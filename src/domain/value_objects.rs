use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{RosterError, RosterResult};

/// Jersey value object
///
/// # Invariants
/// - Always within 0..=99
/// - Is immutable after construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Jersey(u8);

impl Jersey {
    /// Lowest number a player may wear
    pub const MIN: i32 = 0;
    /// Highest number a player may wear
    pub const MAX: i32 = 99;

    /// Creates a new Jersey value object
    ///
    /// # Returns
    /// * `Ok(Jersey)` - If the number is within 0..=99
    /// * `Err(RosterError::InvalidJersey)` - Otherwise
    ///
    /// # Example
    /// ```
    /// use hoops_roster::domain::value_objects::Jersey;
    ///
    /// let jersey = Jersey::new(23).expect("valid jersey");
    /// assert_eq!(jersey.number(), 23);
    /// assert!(Jersey::new(100).is_err());
    /// ```
    pub fn new(number: i32) -> RosterResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&number) {
            Ok(Jersey(number as u8))
        } else {
            Err(RosterError::InvalidJersey(number))
        }
    }

    /// Returns the jersey number
    pub fn number(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Jersey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value of a made shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotType {
    /// Free throw
    OnePoint,
    /// Field goal inside the arc
    TwoPoint,
    /// Field goal beyond the arc
    ThreePoint,
}

impl ShotType {
    /// Points awarded for a make of this type
    pub fn points(&self) -> u32 {
        match self {
            ShotType::OnePoint => 1,
            ShotType::TwoPoint => 2,
            ShotType::ThreePoint => 3,
        }
    }
}

impl TryFrom<i32> for ShotType {
    type Error = RosterError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ShotType::OnePoint),
            2 => Ok(ShotType::TwoPoint),
            3 => Ok(ShotType::ThreePoint),
            other => Err(RosterError::InvalidShotType(other)),
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotType::OnePoint => write!(f, "1pt"),
            ShotType::TwoPoint => write!(f, "2pt"),
            ShotType::ThreePoint => write!(f, "3pt"),
        }
    }
}

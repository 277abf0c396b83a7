//! Room capacity

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Capacity used when nothing else is configured (one duel per room).
const DEFAULT_ROOM_CAPACITY: u32 = 2;

/// Maximum number of members a room accepts (always at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RoomCapacity(u32);

impl RoomCapacity {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a capacity of zero.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::validation("Room capacity must be at least 1"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Whether a room holding `member_count` players can take one more.
    pub fn admits(self, member_count: usize) -> bool {
        member_count < self.0 as usize
    }
}

impl Default for RoomCapacity {
    fn default() -> Self {
        Self(DEFAULT_ROOM_CAPACITY)
    }
}

impl fmt::Display for RoomCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for RoomCapacity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoomCapacity> for u32 {
    fn from(capacity: RoomCapacity) -> u32 {
        capacity.0
    }
}

impl FromStr for RoomCapacity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid room capacity: {}", s)))?;
        Self::new(value)
    }
}

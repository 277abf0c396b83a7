//! Room mutation outcomes.

use crate::value_objects::RoomCapacity;

/// Outcome of asking a room to admit a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomJoin {
    /// The player was appended to the membership.
    Joined { member_count: usize },
    /// The player was already a member; membership is unchanged.
    AlreadyMember { member_count: usize },
    /// The room is at capacity; membership is unchanged.
    RoomFull { capacity: RoomCapacity },
}

impl RoomJoin {
    /// Whether the player is a member of the room after the attempt.
    pub fn is_success(&self) -> bool {
        !matches!(self, RoomJoin::RoomFull { .. })
    }
}

/// Outcome of removing a player from a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomLeave {
    Left { remaining: usize },
    NotMember,
}

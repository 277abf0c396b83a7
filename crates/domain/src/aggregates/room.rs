//! Room aggregate - a named, capacity-bounded group of players
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: membership only changes through `join`/`remove`
//! - **Newtypes**: `RoomId` and `RoomCapacity`
//! - **Outcome enums**: mutations return `RoomJoin` / `RoomLeave`
//!
//! A room holds player ids, never players: it cannot destroy a player, only
//! drop its membership. Rooms perform no I/O; notifying a rejected player is
//! the caller's job.

use chrono::{DateTime, Utc};

use crate::events::{RoomJoin, RoomLeave};
use crate::value_objects::{RoomCapacity, RoomId};
use crate::PlayerId;

/// A matchmaking room.
///
/// # Invariants
///
/// - `members.len() <= capacity` at all times
/// - a player id appears at most once in `members`
/// - `capacity` is fixed at construction
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use deckroom_domain::aggregates::Room;
/// use deckroom_domain::value_objects::{RoomCapacity, RoomId};
/// use deckroom_domain::PlayerId;
///
/// let mut room = Room::new(RoomId::from("r1"), RoomCapacity::new(1).unwrap(), Utc::now());
/// assert!(room.join(PlayerId::new(1)).is_success());
/// assert!(!room.join(PlayerId::new(2)).is_success());
/// ```
#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    capacity: RoomCapacity,
    /// Members in join order
    members: Vec<PlayerId>,
    created_at: DateTime<Utc>,
}

impl Room {
    /// Create an empty room.
    pub fn new(id: RoomId, capacity: RoomCapacity, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            capacity,
            members: Vec::new(),
            created_at,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    #[inline]
    pub fn capacity(&self) -> RoomCapacity {
        self.capacity
    }

    #[inline]
    pub fn members(&self) -> &[PlayerId] {
        &self.members
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        !self.capacity.admits(self.members.len())
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.members.contains(&player_id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Admit a player if there is room.
    ///
    /// A player who is already a member stays a single entry and the attempt
    /// counts as a success, even when the room is full.
    pub fn join(&mut self, player_id: PlayerId) -> RoomJoin {
        if self.contains(player_id) {
            return RoomJoin::AlreadyMember {
                member_count: self.members.len(),
            };
        }
        if self.is_full() {
            return RoomJoin::RoomFull {
                capacity: self.capacity,
            };
        }
        self.members.push(player_id);
        RoomJoin::Joined {
            member_count: self.members.len(),
        }
    }

    /// Drop a player's membership. Idempotent.
    pub fn remove(&mut self, player_id: PlayerId) -> RoomLeave {
        match self.members.iter().position(|id| *id == player_id) {
            Some(index) => {
                self.members.remove(index);
                RoomLeave::Left {
                    remaining: self.members.len(),
                }
            }
            None => RoomLeave::NotMember,
        }
    }
}

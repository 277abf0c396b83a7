//! Room directory.
//!
//! Maps room ids to live rooms. Rooms are created on first use and removed
//! by the session manager according to its close policy.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use deckroom_domain::{PlayerId, Room, RoomCapacity, RoomId};

/// Live rooms keyed by client-chosen id. Insertion order is irrelevant.
#[derive(Debug)]
pub struct RoomDirectory {
    rooms: HashMap<RoomId, Room>,
    /// Capacity given to every room created here
    capacity: RoomCapacity,
}

impl RoomDirectory {
    pub fn new(capacity: RoomCapacity) -> Self {
        Self {
            rooms: HashMap::new(),
            capacity,
        }
    }

    /// The room registered under `room_id`, creating an empty one if needed.
    pub fn get_or_create(&mut self, room_id: &RoomId, now: DateTime<Utc>) -> &mut Room {
        let capacity = self.capacity;
        self.rooms.entry(room_id.clone()).or_insert_with(|| {
            tracing::info!(room_id = %room_id, capacity = %capacity, "Room created");
            Room::new(room_id.clone(), capacity, now)
        })
    }

    /// Delete the entry unconditionally, returning the room if it existed.
    pub fn remove(&mut self, room_id: &RoomId) -> Option<Room> {
        self.rooms.remove(room_id)
    }

    /// Linear scan for a room that lists `player_id` as a member.
    pub fn find_room_containing(&self, player_id: PlayerId) -> Option<RoomId> {
        self.rooms
            .values()
            .find(|room| room.contains(player_id))
            .map(|room| room.id().clone())
    }

    pub fn get(&self, room_id: &RoomId) -> Option<&Room> {
        self.rooms.get(room_id)
    }

    pub fn get_mut(&mut self, room_id: &RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(room_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

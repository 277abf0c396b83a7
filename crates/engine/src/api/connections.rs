//! Connection management for WebSocket clients.
//!
//! Tracks the player bound to each live connection and the rooms they have
//! joined. All mutable state sits behind one lock so that name reservation
//! and room joins are atomic with respect to other connections.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use deckroom_domain::{
    ConnectionId, DeckId, Player, PlayerId, PlayerName, RoomCapacity, RoomId, RoomJoin, RoomLeave,
};

use crate::infrastructure::clock::{ClockPort, SystemClock};
use crate::infrastructure::config::{BrokerConfig, PlayerNameRule, RoomClosePolicy};
use crate::stores::{IdentityRegistry, RoomDirectory};

/// Shared handle passed to request handlers.
pub type SharedConnectionManager = Arc<ConnectionManager>;

/// Snapshot of a connected player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerInfo {
    pub player_id: PlayerId,
    pub connection_id: ConnectionId,
    pub name: PlayerName,
    pub deck_id: Option<DeckId>,
    pub connected_at: DateTime<Utc>,
}

impl From<&Player> for PlayerInfo {
    fn from(player: &Player) -> Self {
        Self {
            player_id: player.id(),
            connection_id: player.connection_id(),
            name: player.name().clone(),
            deck_id: player.deck_id().cloned(),
            connected_at: player.connected_at(),
        }
    }
}

/// Snapshot of a live room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSummary {
    pub room_id: RoomId,
    pub capacity: RoomCapacity,
    pub members: Vec<PlayerId>,
    pub created_at: DateTime<Utc>,
}

/// A `join_room` request after wire validation.
#[derive(Debug, Clone)]
pub struct JoinRoomRequest {
    pub room_id: RoomId,
    pub deck_id: DeckId,
    /// Rename applied before joining
    pub player_name: Option<PlayerName>,
}

/// Successful join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomJoined {
    pub room_id: RoomId,
    pub player_id: PlayerId,
    /// Name the player holds after the request, renamed or not
    pub player_name: PlayerName,
    pub outcome: RoomJoin,
}

/// What tearing down a connection did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub player_id: PlayerId,
    pub player_name: PlayerName,
    /// Every room the player was removed from
    pub left_rooms: Vec<RoomId>,
    /// Rooms deleted from the directory as a result
    pub closed_rooms: Vec<RoomId>,
}

/// Everything guarded by the manager's lock.
struct Lobby {
    /// Session table: connection -> player
    sessions: HashMap<ConnectionId, Player>,
    identities: IdentityRegistry,
    rooms: RoomDirectory,
}

impl Lobby {
    fn rename(
        &mut self,
        connection_id: ConnectionId,
        desired: &PlayerName,
    ) -> Result<PlayerName, ConnectionError> {
        let player = self
            .sessions
            .get_mut(&connection_id)
            .ok_or(ConnectionError::NotFound)?;

        // A player re-requesting their own name keeps it.
        self.identities.release_name(player.name());
        let assigned = self.identities.reserve_unique_name(desired);
        player.set_name(assigned.clone());

        tracing::info!(
            connection_id = %connection_id,
            player_id = %player.id(),
            player_name = %assigned,
            "Player name set to {}",
            assigned
        );
        Ok(assigned)
    }
}

/// Manages all active WebSocket connections and the rooms they share.
pub struct ConnectionManager {
    lobby: RwLock<Lobby>,
    close_policy: RoomClosePolicy,
    name_rule: PlayerNameRule,
    clock: Arc<dyn ClockPort>,
}

impl ConnectionManager {
    /// Create a manager using the system clock.
    pub fn new(room_capacity: RoomCapacity, close_policy: RoomClosePolicy) -> Self {
        Self::with_clock(room_capacity, close_policy, Arc::new(SystemClock::new()))
    }

    pub fn with_clock(
        room_capacity: RoomCapacity,
        close_policy: RoomClosePolicy,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            lobby: RwLock::new(Lobby {
                sessions: HashMap::new(),
                identities: IdentityRegistry::new(),
                rooms: RoomDirectory::new(room_capacity),
            }),
            close_policy,
            name_rule: PlayerNameRule::default(),
            clock,
        }
    }

    pub fn from_config(config: &BrokerConfig) -> Self {
        Self::new(config.room_capacity, config.room_close_policy)
            .with_name_rule(config.player_name_rule)
    }

    pub fn with_name_rule(mut self, rule: PlayerNameRule) -> Self {
        self.name_rule = rule;
        self
    }

    /// Rule applied to names arriving in `set_name` and `join_room`.
    pub fn name_rule(&self) -> PlayerNameRule {
        self.name_rule
    }

    /// Register a new connection under a fresh `Anon_<id>` player.
    ///
    /// Returns the name to announce in `server_hello`.
    pub async fn register(&self, connection_id: ConnectionId) -> PlayerName {
        let mut lobby = self.lobby.write().await;
        let player_id = lobby.identities.allocate_id();
        // Reserved like any other name: a client may already call itself Anon_<id>.
        let name = lobby
            .identities
            .reserve_unique_name(&PlayerName::anonymous(player_id));
        let player = Player::new(player_id, connection_id, name.clone(), self.clock.now());
        lobby.sessions.insert(connection_id, player);

        tracing::debug!(
            connection_id = %connection_id,
            player_id = %player_id,
            player_name = %name,
            "Connection registered"
        );
        name
    }

    /// Change the player's display name, disambiguating if it is taken.
    pub async fn rename(
        &self,
        connection_id: ConnectionId,
        desired: &PlayerName,
    ) -> Result<PlayerName, ConnectionError> {
        let mut lobby = self.lobby.write().await;
        lobby.rename(connection_id, desired)
    }

    /// Apply the optional rename and deck choice, then join (or create) the room.
    ///
    /// The rename and deck choice stick even when the room turns out to be full.
    pub async fn join_room(
        &self,
        connection_id: ConnectionId,
        request: JoinRoomRequest,
    ) -> Result<RoomJoined, ConnectionError> {
        let mut guard = self.lobby.write().await;
        let lobby = &mut *guard;

        if let Some(desired) = &request.player_name {
            lobby.rename(connection_id, desired)?;
        }

        let player = lobby
            .sessions
            .get_mut(&connection_id)
            .ok_or(ConnectionError::NotFound)?;
        player.set_deck(request.deck_id);
        let player_id = player.id();
        let player_name = player.name().clone();

        let room = lobby.rooms.get_or_create(&request.room_id, self.clock.now());
        match room.join(player_id) {
            RoomJoin::RoomFull { capacity } => {
                tracing::info!(
                    connection_id = %connection_id,
                    player_id = %player_id,
                    room_id = %request.room_id,
                    capacity = %capacity,
                    "Room join rejected: room is full"
                );
                Err(ConnectionError::RoomFull {
                    room_id: request.room_id,
                    capacity,
                })
            }
            outcome => {
                tracing::info!(
                    connection_id = %connection_id,
                    player_id = %player_id,
                    room_id = %request.room_id,
                    outcome = ?outcome,
                    "Player joined room"
                );
                Ok(RoomJoined {
                    room_id: request.room_id,
                    player_id,
                    player_name,
                    outcome,
                })
            }
        }
    }

    /// Tear down a connection: leave every room, free the name, drop the session.
    ///
    /// Differs from a single-room teardown that stops at the first room found:
    /// this keeps leaving until no room contains the player, so a player who
    /// joined several rooms is removed from all of them.
    ///
    /// Returns `None` for a connection that was never registered or is already gone.
    pub async fn unregister(&self, connection_id: ConnectionId) -> Option<Departure> {
        let mut guard = self.lobby.write().await;
        let lobby = &mut *guard;

        let player = lobby.sessions.remove(&connection_id)?;
        let player_id = player.id();

        let mut left_rooms = Vec::new();
        let mut closed_rooms = Vec::new();
        while let Some(room_id) = lobby.rooms.find_room_containing(player_id) {
            let Some(room) = lobby.rooms.get_mut(&room_id) else {
                break;
            };
            let RoomLeave::Left { remaining } = room.remove(player_id) else {
                break;
            };

            if self.close_policy.should_close(remaining) {
                lobby.rooms.remove(&room_id);
                tracing::info!(room_id = %room_id, remaining, "Closing room");
                closed_rooms.push(room_id.clone());
            }
            left_rooms.push(room_id);
        }

        lobby.identities.release_name(player.name());

        tracing::info!(
            connection_id = %connection_id,
            player_id = %player_id,
            player_name = %player.name(),
            "Player {} disconnected",
            player.name()
        );

        Some(Departure {
            player_id,
            player_name: player.name().clone(),
            left_rooms,
            closed_rooms,
        })
    }

    /// Get the player bound to a connection.
    pub async fn get(&self, connection_id: ConnectionId) -> Option<PlayerInfo> {
        let lobby = self.lobby.read().await;
        lobby.sessions.get(&connection_id).map(PlayerInfo::from)
    }

    /// All connected players, ordered by id.
    pub async fn players(&self) -> Vec<PlayerInfo> {
        let lobby = self.lobby.read().await;
        let mut players: Vec<PlayerInfo> = lobby.sessions.values().map(PlayerInfo::from).collect();
        players.sort_by_key(|info| info.player_id);
        players
    }

    /// All live rooms, ordered by id.
    pub async fn rooms(&self) -> Vec<RoomSummary> {
        let lobby = self.lobby.read().await;
        let mut rooms: Vec<RoomSummary> = lobby
            .rooms
            .iter()
            .map(|room| RoomSummary {
                room_id: room.id().clone(),
                capacity: room.capacity(),
                members: room.members().to_vec(),
                created_at: room.created_at(),
            })
            .collect();
        rooms.sort_by(|a, b| a.room_id.as_str().cmp(b.room_id.as_str()));
        rooms
    }

    /// Members of a room in join order, or `None` if the room does not exist.
    pub async fn room_members(&self, room_id: &RoomId) -> Option<Vec<PlayerInfo>> {
        let lobby = self.lobby.read().await;
        let room = lobby.rooms.get(room_id)?;
        Some(
            room.members()
                .iter()
                .filter_map(|member| {
                    lobby
                        .sessions
                        .values()
                        .find(|player| player.id() == *member)
                        .map(PlayerInfo::from)
                })
                .collect(),
        )
    }

    pub async fn connection_count(&self) -> usize {
        self.lobby.read().await.sessions.len()
    }

    pub async fn room_count(&self) -> usize {
        self.lobby.read().await.rooms.len()
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new(RoomCapacity::default(), RoomClosePolicy::default())
    }
}

/// Errors that can occur during connection operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    #[error("Connection not found")]
    NotFound,
    #[error("Room {room_id} is full (capacity {capacity})")]
    RoomFull {
        room_id: RoomId,
        capacity: RoomCapacity,
    },
}

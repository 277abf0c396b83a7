//! Deckroom Domain - players, rooms and the rules that bind them.
//!
//! Pure types with no I/O: the engine owns these values behind its session
//! lock and maps them to wire messages at the WebSocket boundary.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::Room;
pub use entities::Player;
pub use error::DomainError;
pub use events::{RoomJoin, RoomLeave};
pub use ids::{ConnectionId, PlayerId};
pub use value_objects::{DeckId, PlayerName, RoomCapacity, RoomId, MAX_PLAYER_NAME_LENGTH};

//! Value objects - immutable, valid by construction

mod capacity;
mod identifiers;
mod names;

pub use capacity::RoomCapacity;
pub use identifiers::{DeckId, RoomId};
pub use names::{PlayerName, MAX_PLAYER_NAME_LENGTH};

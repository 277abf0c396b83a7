//! Player entity - the server-side identity bound to one live connection

use chrono::{DateTime, Utc};

use crate::value_objects::{DeckId, PlayerName};
use crate::{ConnectionId, PlayerId};

/// A connected player.
///
/// # Invariants
///
/// - `id` and `connection_id` never change after construction
/// - `name` uniqueness is NOT enforced here; the identity registry reserves
///   a unique name before `set_name` is called
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    connection_id: ConnectionId,
    name: PlayerName,
    /// Deck/profile chosen on the last room join (None until the first join)
    deck_id: Option<DeckId>,
    connected_at: DateTime<Utc>,
}

impl Player {
    pub fn new(
        id: PlayerId,
        connection_id: ConnectionId,
        name: PlayerName,
        connected_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            connection_id,
            name,
            deck_id: None,
            connected_at,
        }
    }

    #[inline]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[inline]
    pub fn connection_id(&self) -> ConnectionId {
        self.connection_id
    }

    #[inline]
    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    #[inline]
    pub fn deck_id(&self) -> Option<&DeckId> {
        self.deck_id.as_ref()
    }

    #[inline]
    pub fn connected_at(&self) -> DateTime<Utc> {
        self.connected_at
    }

    /// Overwrite the display name, returning the previous one.
    pub fn set_name(&mut self, name: PlayerName) -> PlayerName {
        std::mem::replace(&mut self.name, name)
    }

    /// Overwrite the deck reference, returning the previous one.
    pub fn set_deck(&mut self, deck_id: DeckId) -> Option<DeckId> {
        self.deck_id.replace(deck_id)
    }
}

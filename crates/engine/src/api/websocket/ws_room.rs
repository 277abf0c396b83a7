use super::*;

use deckroom_domain::{DeckId, RoomId};

use crate::api::connections::{ConnectionError, JoinRoomRequest};

/// Join (creating on demand) a room. Success is silent; a full room is reported.
pub(super) async fn handle_join_room(
    state: &WsState,
    connection_id: ConnectionId,
    room_id: String,
    deck_id: String,
    player_name: Option<String>,
) -> Option<Outgoing> {
    let name_rule = state.connections.name_rule();
    let player_name = player_name.and_then(|name| match name_rule.accept(name) {
        Ok(name) => Some(name),
        Err(e) => {
            tracing::warn!(
                connection_id = %connection_id,
                error = %e,
                "Ignoring player_name refused by name rule"
            );
            None
        }
    });

    let request = JoinRoomRequest {
        room_id: RoomId::new(room_id),
        deck_id: DeckId::new(deck_id),
        player_name,
    };

    match state.connections.join_room(connection_id, request).await {
        Ok(_) => None,
        Err(ConnectionError::RoomFull { .. }) => Some(ServerMessage::room_full().into()),
        Err(ConnectionError::NotFound) => {
            tracing::warn!(
                connection_id = %connection_id,
                "join_room from a connection with no session"
            );
            None
        }
    }
}

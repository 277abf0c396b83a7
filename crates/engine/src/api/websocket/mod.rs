//! WebSocket handling for player connections.
//!
//! One task reads frames in arrival order and dispatches them; a second task
//! drains the connection's bounded outbound queue into the socket.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc::{self, error::TrySendError};

use deckroom_domain::ConnectionId;
use deckroom_shared::{echo_reply, ClientMessage, ServerMessage};

use super::connections::SharedConnectionManager;
use crate::infrastructure::config::DEFAULT_CONNECTION_CHANNEL_BUFFER;

mod ws_player;
mod ws_room;


/// Combined state for WebSocket handlers.
pub struct WsState {
    pub connections: SharedConnectionManager,
    /// Capacity of each connection's outbound queue
    pub channel_buffer: usize,
}

impl WsState {
    pub fn new(connections: SharedConnectionManager, channel_buffer: usize) -> Self {
        Self {
            connections,
            channel_buffer: channel_buffer.max(1),
        }
    }
}

impl From<SharedConnectionManager> for WsState {
    fn from(connections: SharedConnectionManager) -> Self {
        Self::new(connections, DEFAULT_CONNECTION_CHANNEL_BUFFER)
    }
}

/// A frame waiting in a connection's outbound queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outgoing {
    Message(ServerMessage),
    /// Plain-text acknowledgment of an unhandled frame
    Echo(String),
}

impl Outgoing {
    fn echo(raw: &str) -> Self {
        Outgoing::Echo(echo_reply(raw))
    }

    fn into_text(self) -> Result<String, serde_json::Error> {
        match self {
            Outgoing::Message(msg) => serde_json::to_string(&msg),
            Outgoing::Echo(text) => Ok(text),
        }
    }
}

impl From<ServerMessage> for Outgoing {
    fn from(msg: ServerMessage) -> Self {
        Outgoing::Message(msg)
    }
}

/// WebSocket upgrade handler - entry point for new connections.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<WsState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an individual WebSocket connection.
async fn handle_socket(socket: WebSocket, state: Arc<WsState>) {
    let (mut ws_sender, mut ws_receiver) = socket.split();

    let connection_id = ConnectionId::new();

    // Bounded queue between the dispatch loop and the socket writer.
    let (tx, mut rx) = mpsc::channel::<Outgoing>(state.channel_buffer);

    let player_name = state.connections.register(connection_id).await;

    tracing::info!(
        connection_id = %connection_id,
        player_name = %player_name,
        "WebSocket connection established"
    );

    let send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            let text = match frame.into_text() {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(connection_id = %connection_id, error = %e, "Failed to encode frame");
                    continue;
                }
            };
            if ws_sender.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    enqueue(
        &tx,
        connection_id,
        ServerMessage::ServerHello {
            player_name: player_name.to_string(),
        }
        .into(),
    );

    // Handle incoming messages
    while let Some(result) = ws_receiver.next().await {
        match result {
            Ok(Message::Text(text)) => {
                if let Some(reply) = handle_text(text.as_str(), &state, connection_id).await {
                    enqueue(&tx, connection_id, reply);
                }
            }
            Ok(Message::Binary(bytes)) => match std::str::from_utf8(&bytes) {
                Ok(text) => {
                    if let Some(reply) = handle_text(text, &state, connection_id).await {
                        enqueue(&tx, connection_id, reply);
                    }
                }
                Err(_) => {
                    tracing::debug!(
                        connection_id = %connection_id,
                        len = bytes.len(),
                        "Ignoring non-UTF-8 binary frame"
                    );
                }
            },
            Ok(Message::Close(_)) => {
                tracing::info!(connection_id = %connection_id, "WebSocket closed by client");
                break;
            }
            Err(e) => {
                tracing::warn!(connection_id = %connection_id, error = %e, "WebSocket error");
                break;
            }
            // Ping/Pong are answered by the transport.
            _ => {}
        }
    }

    // Clean up
    state.connections.unregister(connection_id).await;
    send_task.abort();

    tracing::info!(connection_id = %connection_id, "WebSocket connection terminated");
}

/// Queue a frame without waiting. A full queue drops the frame.
fn enqueue(tx: &mpsc::Sender<Outgoing>, connection_id: ConnectionId, frame: Outgoing) {
    match tx.try_send(frame) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
            tracing::warn!(
                connection_id = %connection_id,
                "Outbound queue full, dropping frame"
            );
        }
        Err(TrySendError::Closed(_)) => {
            tracing::debug!(
                connection_id = %connection_id,
                "Outbound queue closed, dropping frame"
            );
        }
    }
}

/// Decode one text frame and dispatch it.
///
/// Frames that do not decode are acknowledged with an echo.
async fn handle_text(raw: &str, state: &WsState, connection_id: ConnectionId) -> Option<Outgoing> {
    match serde_json::from_str::<ClientMessage>(raw) {
        Ok(msg) => handle_message(msg, raw, state, connection_id).await,
        Err(e) => {
            tracing::warn!(connection_id = %connection_id, error = %e, "Failed to parse message");
            Some(Outgoing::echo(raw))
        }
    }
}

/// Dispatch a parsed client message to the appropriate handler.
async fn handle_message(
    msg: ClientMessage,
    raw: &str,
    state: &WsState,
    connection_id: ConnectionId,
) -> Option<Outgoing> {
    match msg {
        ClientMessage::JoinRoom {
            room_id,
            deck_id,
            player_name,
        } => ws_room::handle_join_room(state, connection_id, room_id, deck_id, player_name).await,

        ClientMessage::SetName { name } => {
            ws_player::handle_set_name(state, connection_id, name, raw).await
        }

        ClientMessage::Unknown => {
            tracing::debug!(connection_id = %connection_id, "Unhandled message type");
            Some(Outgoing::echo(raw))
        }
    }
}

//! API layer - HTTP and WebSocket entry points.

use std::sync::Arc;

use axum::{routing::get, Router};

pub mod connections;
pub mod http;
pub mod websocket;

pub use connections::{ConnectionManager, SharedConnectionManager};
pub use websocket::WsState;

/// Build the broker router with separate states for HTTP and WebSocket.
///
/// Clients may upgrade on `/` as well as `/ws`.
pub fn router(connections: SharedConnectionManager, channel_buffer: usize) -> Router {
    let ws_state = Arc::new(WsState::new(connections.clone(), channel_buffer));

    http::routes()
        .with_state(connections)
        .route("/", get(websocket::ws_handler).with_state(ws_state.clone()))
        .route("/ws", get(websocket::ws_handler).with_state(ws_state))
}

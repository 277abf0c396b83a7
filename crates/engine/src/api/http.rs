//! HTTP routes.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use deckroom_domain::RoomId;

use super::connections::{PlayerInfo, RoomSummary, SharedConnectionManager};

/// Create all HTTP routes.
pub fn routes() -> Router<SharedConnectionManager> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/rooms", get(list_rooms))
        .route("/api/rooms/{room_id}/members", get(list_room_members))
        .route("/api/players", get(list_players))
}

async fn health() -> &'static str {
    "OK"
}

async fn list_rooms(State(connections): State<SharedConnectionManager>) -> Json<Vec<RoomSummary>> {
    Json(connections.rooms().await)
}

async fn list_room_members(
    State(connections): State<SharedConnectionManager>,
    Path(room_id): Path<String>,
) -> Result<Json<Vec<PlayerInfo>>, ApiError> {
    connections
        .room_members(&RoomId::new(room_id))
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn list_players(State(connections): State<SharedConnectionManager>) -> Json<Vec<PlayerInfo>> {
    Json(connections.players().await)
}

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => {
                (axum::http::StatusCode::NOT_FOUND, "Not found").into_response()
            }
        }
    }
}

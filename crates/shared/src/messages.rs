//! WebSocket message types for broker-client communication
//!
//! Every frame is a UTF-8 text frame. Structured messages are JSON objects
//! tagged by a `type` field; the only untagged frame is the plain-text echo
//! the broker sends back for anything it did not handle.

use serde::{Deserialize, Deserializer, Serialize};

/// Prefix of the echo acknowledgment for unhandled frames.
pub const ECHO_PREFIX: &str = "I got your: ";

/// Reason reported when a room has no free slot.
pub const ROOM_FULL_REASON: &str = "Room is full";

// =============================================================================
// Client Messages (client → broker)
// =============================================================================

/// Messages from a client to the broker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Join (creating on demand) the room keyed by `room_id`
    JoinRoom {
        room_id: String,
        deck_id: String,
        /// Optional rename applied before joining. A value that is not a
        /// string is treated as absent rather than failing the message.
        #[serde(
            default,
            deserialize_with = "string_or_none",
            skip_serializing_if = "Option::is_none"
        )]
        player_name: Option<String>,
    },

    /// Change display name, independent of room membership
    SetName { name: String },

    /// Any other `type` value.
    ///
    /// Unknown types are not errors: the broker echoes them back.
    #[serde(other)]
    Unknown,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(value) => Some(value),
        _ => None,
    })
}

// =============================================================================
// Server Messages (broker → client)
// =============================================================================

/// Messages from the broker to a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Sent once, immediately after the connection is accepted
    ServerHello { player_name: String },

    /// A join attempt was rejected
    RoomJoinFailed { reason: String },
}

impl ServerMessage {
    pub fn room_full() -> Self {
        ServerMessage::RoomJoinFailed {
            reason: ROOM_FULL_REASON.to_string(),
        }
    }
}

/// Plain-text acknowledgment for a frame the broker did not handle.
pub fn echo_reply(raw: &str) -> String {
    format!("{ECHO_PREFIX}{raw}")
}

//! Client-chosen identifiers
//!
//! Room and deck identifiers are opaque strings picked by clients. The broker
//! never interprets them, so any string (including an empty one) is accepted.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_client_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_client_key!(
    /// Key of a room in the room directory.
    RoomId
);

define_client_key!(
    /// Reference to the deck/profile a player brings into a room.
    DeckId
);

//! Deckroom Engine library.
//!
//! Server-side session broker: players connect over WebSocket, pick a
//! display name and join capacity-bounded rooms keyed by a client-chosen id.
//!
//! ## Structure
//!
//! - `stores/` - In-memory identity registry and room directory
//! - `infrastructure/` - Clock and configuration
//! - `api/` - Session manager, HTTP and WebSocket entry points

pub mod api;
pub mod infrastructure;
pub mod stores;

pub use api::{router, ConnectionManager, SharedConnectionManager};
pub use infrastructure::config::{BrokerConfig, PlayerNameRule, RoomClosePolicy};

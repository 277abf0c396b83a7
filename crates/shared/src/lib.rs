//! Deckroom Shared - wire types for broker and client communication
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain types** - plain strings on the wire; the engine converts
//!    them into validated domain values

pub mod messages;

pub use messages::{echo_reply, ClientMessage, ServerMessage, ECHO_PREFIX, ROOM_FULL_REASON};

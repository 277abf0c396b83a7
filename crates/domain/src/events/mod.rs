//! Aggregate mutation outcomes
//!
//! Mutations on domain objects return enums describing what happened, so
//! callers can log and react without re-inspecting state.

pub mod room_events;

pub use room_events::{RoomJoin, RoomLeave};

//! In-memory state storage modules.
//!
//! Stores hold runtime state that lives only as long as the process:
//! - `IdentityRegistry` - player ids and names in use
//! - `RoomDirectory` - live rooms by id
//!
//! Neither store synchronizes itself; both sit behind the
//! `ConnectionManager` lobby lock.

pub mod identity;
pub mod rooms;

pub use identity::IdentityRegistry;
pub use rooms::RoomDirectory;

//! Identity registry.
//!
//! Hands out sequential player ids and keeps the set of display names held
//! by currently connected players, so name collisions can be resolved with a
//! `_<id>` suffix.

use std::collections::HashSet;

use deckroom_domain::{PlayerId, PlayerName};

/// Sequential ids plus the names currently in use.
///
/// Not synchronized: the owning `ConnectionManager` keeps it behind its lobby
/// lock, which makes `reserve_unique_name` an atomic check-and-set.
#[derive(Debug)]
pub struct IdentityRegistry {
    next_id: u64,
    names_in_use: HashSet<PlayerName>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            names_in_use: HashSet::new(),
        }
    }

    /// Next id from the process-wide counter. Ids start at 1 and are never reused.
    pub fn allocate_id(&mut self) -> PlayerId {
        let id = PlayerId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Exact, case-sensitive match against names of connected players.
    pub fn is_name_taken(&self, name: &str) -> bool {
        self.names_in_use.contains(name)
    }

    /// Reserve `desired`, or `desired_<id>` for fresh ids until one is free.
    ///
    /// The suffix is always appended to the desired name itself, never to
    /// a previous candidate. Ids burned on taken candidates are not returned
    /// to the counter.
    pub fn reserve_unique_name(&mut self, desired: &PlayerName) -> PlayerName {
        let mut candidate = desired.clone();
        while self.is_name_taken(candidate.as_str()) {
            candidate = desired.with_suffix(self.allocate_id());
        }
        self.names_in_use.insert(candidate.clone());
        candidate
    }

    /// Forget a name once its holder renames or disconnects.
    pub fn release_name(&mut self, name: &PlayerName) {
        self.names_in_use.remove(name);
    }
}

impl Default for IdentityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

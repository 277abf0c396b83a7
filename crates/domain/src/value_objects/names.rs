//! Player display names
//!
//! Any string a client sends is a usable display name. `PlayerName::new`
//! additionally applies the strict client rule for deployments that opt in:
//! - Non-empty (whitespace-only is rejected)
//! - Within length limits
//!
//! The value is always kept verbatim. Names are compared exactly and
//! case-sensitively, so trimming would silently merge names that players
//! consider distinct.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::error::DomainError;
use crate::ids::PlayerId;

/// Maximum length (in characters) under the strict client rule
pub const MAX_PLAYER_NAME_LENGTH: usize = 64;

/// Prefix for the default name handed to every new connection
const ANONYMOUS_PREFIX: &str = "Anon_";

/// A player's display name.
///
/// Server-built names (`Anon_<id>` and `<name>_<id>`) never go through the
/// strict rule: a suffix appended to a maximum-length name must still be
/// representable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a name under the strict client rule.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty or whitespace-only
    /// - The name exceeds 64 characters
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Player name cannot be empty"));
        }
        if name.chars().count() > MAX_PLAYER_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Player name cannot exceed {} characters",
                MAX_PLAYER_NAME_LENGTH
            )));
        }
        Ok(Self(name))
    }

    /// Accept any string as-is, including an empty one.
    pub fn verbatim(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Default name for a freshly connected player: `Anon_<id>`.
    pub fn anonymous(id: PlayerId) -> Self {
        Self(format!("{ANONYMOUS_PREFIX}{id}"))
    }

    /// This name with a disambiguation suffix: `<name>_<id>`.
    pub fn with_suffix(&self, id: PlayerId) -> Self {
        Self(format!("{}_{}", self.0, id))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Lets name sets be queried with a plain `&str`.
impl Borrow<str> for PlayerName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for PlayerName {
    fn from(s: String) -> Self {
        Self::verbatim(s)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> String {
        name.0
    }
}

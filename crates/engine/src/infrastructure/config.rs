//! Broker configuration

use std::env;
use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use deckroom_domain::{DomainError, PlayerName, RoomCapacity};

/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Default outbound frames queued per connection
pub const DEFAULT_CONNECTION_CHANNEL_BUFFER: usize = 256;

/// When a room is removed from the directory after a member leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomClosePolicy {
    /// Close the room as soon as any member departs, even if others remain.
    #[default]
    AnyDeparture,
    /// Close the room only once its last member departs.
    WhenEmpty,
}

impl RoomClosePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomClosePolicy::AnyDeparture => "any_departure",
            RoomClosePolicy::WhenEmpty => "when_empty",
        }
    }

    /// Whether a room with `remaining` members should close after a departure.
    pub fn should_close(&self, remaining: usize) -> bool {
        match self {
            RoomClosePolicy::AnyDeparture => true,
            RoomClosePolicy::WhenEmpty => remaining == 0,
        }
    }
}

impl fmt::Display for RoomClosePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomClosePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any_departure" => Ok(RoomClosePolicy::AnyDeparture),
            "when_empty" => Ok(RoomClosePolicy::WhenEmpty),
            other => bail!("unknown room close policy '{other}'"),
        }
    }
}

/// Which client-supplied display names are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerNameRule {
    /// Any string is used as-is, including empty and very long names.
    #[default]
    Verbatim,
    /// Reject empty, whitespace-only and over-long names.
    Strict,
}

impl PlayerNameRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerNameRule::Verbatim => "verbatim",
            PlayerNameRule::Strict => "strict",
        }
    }

    /// Turn a client-supplied name into a `PlayerName` under this rule.
    pub fn accept(&self, raw: String) -> Result<PlayerName, DomainError> {
        match self {
            PlayerNameRule::Verbatim => Ok(PlayerName::verbatim(raw)),
            PlayerNameRule::Strict => PlayerName::new(raw),
        }
    }
}

impl fmt::Display for PlayerNameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerNameRule {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbatim" => Ok(PlayerNameRule::Verbatim),
            "strict" => Ok(PlayerNameRule::Strict),
            other => bail!("unknown player name rule '{other}'"),
        }
    }
}

/// Broker configuration loaded from environment
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    /// Bind address
    pub server_host: String,
    /// WebSocket and HTTP listen port
    pub server_port: u16,
    /// Capacity of newly created rooms
    pub room_capacity: RoomCapacity,
    /// What happens to a room when members leave
    pub room_close_policy: RoomClosePolicy,
    /// Which client-supplied names are accepted
    pub player_name_rule: PlayerNameRule,
    /// Outbound frames buffered per connection before frames are dropped
    pub connection_channel_buffer: usize,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: DEFAULT_PORT,
            room_capacity: RoomCapacity::default(),
            room_close_policy: RoomClosePolicy::default(),
            player_name_rule: PlayerNameRule::default(),
            connection_channel_buffer: DEFAULT_CONNECTION_CHANNEL_BUFFER,
        }
    }
}

impl BrokerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let connection_channel_buffer = match lookup("CONNECTION_CHANNEL_BUFFER") {
            Some(raw) => raw
                .trim()
                .parse()
                .context("CONNECTION_CHANNEL_BUFFER must be a positive integer")?,
            None => defaults.connection_channel_buffer,
        };
        if connection_channel_buffer == 0 {
            bail!("CONNECTION_CHANNEL_BUFFER must be at least 1");
        }

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: match lookup("PORT") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .context("PORT must be a valid port number")?,
                None => defaults.server_port,
            },
            room_capacity: match lookup("ROOM_CAPACITY") {
                Some(raw) => raw
                    .parse()
                    .context("ROOM_CAPACITY must be a positive integer")?,
                None => defaults.room_capacity,
            },
            room_close_policy: match lookup("ROOM_CLOSE_POLICY") {
                Some(raw) => raw
                    .parse()
                    .context("ROOM_CLOSE_POLICY must be 'any_departure' or 'when_empty'")?,
                None => defaults.room_close_policy,
            },
            player_name_rule: match lookup("PLAYER_NAME_RULE") {
                Some(raw) => raw
                    .parse()
                    .context("PLAYER_NAME_RULE must be 'verbatim' or 'strict'")?,
                None => defaults.player_name_rule,
            },
            connection_channel_buffer,
        })
    }

    /// `host:port` the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

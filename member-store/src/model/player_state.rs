//! Player state enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

/// State token reported by a member media player
///
/// `Unavailable` means the host lost contact with the device. `Unknown`
/// means the device is reachable but has not reported a concrete state yet.
/// Everything else is a concrete state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayerState {
    Off,
    On,
    Idle,
    Playing,
    Paused,
    Standby,
    Buffering,
    Unavailable,
    Unknown,
    /// A concrete state this crate has no dedicated variant for
    Other(String),
}

impl PlayerState {
    /// Parse from a host state token
    ///
    /// Matching is case-insensitive. An empty token is treated as
    /// `Unknown`; any other unrecognised token is kept as `Other`.
    pub fn from_state_token(token: &str) -> Self {
        let token = token.trim();
        match token.to_ascii_lowercase().as_str() {
            "off" => PlayerState::Off,
            "on" => PlayerState::On,
            "idle" => PlayerState::Idle,
            "playing" => PlayerState::Playing,
            "paused" => PlayerState::Paused,
            "standby" => PlayerState::Standby,
            "buffering" => PlayerState::Buffering,
            "unavailable" => PlayerState::Unavailable,
            "unknown" | "" => PlayerState::Unknown,
            _ => PlayerState::Other(token.to_string()),
        }
    }

    /// Token form of this state
    pub fn as_token(&self) -> &str {
        match self {
            PlayerState::Off => "off",
            PlayerState::On => "on",
            PlayerState::Idle => "idle",
            PlayerState::Playing => "playing",
            PlayerState::Paused => "paused",
            PlayerState::Standby => "standby",
            PlayerState::Buffering => "buffering",
            PlayerState::Unavailable => "unavailable",
            PlayerState::Unknown => "unknown",
            PlayerState::Other(token) => token,
        }
    }

    /// Anything but `Unavailable`
    pub fn is_available(&self) -> bool {
        !matches!(self, PlayerState::Unavailable)
    }

    /// A concrete state: neither `Unavailable` nor `Unknown`
    pub fn is_known(&self) -> bool {
        !matches!(self, PlayerState::Unavailable | PlayerState::Unknown)
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        PlayerState::Unknown
    }
}

impl From<String> for PlayerState {
    fn from(token: String) -> Self {
        PlayerState::from_state_token(&token)
    }
}

impl From<PlayerState> for String {
    fn from(state: PlayerState) -> Self {
        state.as_token().to_string()
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

//! Member identity type

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a member media player
///
/// Opaque to the aggregator. Typically a host entity id such as
/// `media_player.living_room`. Surrounding whitespace is trimmed so ids
/// typed into a config file compare equal to ids reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MemberId(String);

impl MemberId {
    /// Creates a new MemberId, trimming surrounding whitespace
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.len() == id.len() {
            Self(id)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        MemberId::new(s)
    }
}

impl From<String> for MemberId {
    fn from(s: String) -> Self {
        MemberId::new(s)
    }
}

impl From<MemberId> for String {
    fn from(id: MemberId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_whitespace() {
        let id = MemberId::new("  media_player.kitchen \n");
        assert_eq!(id.as_str(), "media_player.kitchen");
    }

    #[test]
    fn test_equality_after_trim() {
        assert_eq!(MemberId::new("media_player.tv "), MemberId::new("media_player.tv"));
    }

    #[test]
    fn test_blank() {
        assert!(MemberId::new("   ").is_blank());
        assert!(!MemberId::new("a").is_blank());
    }

    #[test]
    fn test_display() {
        let id = MemberId::new("media_player.tv");
        assert_eq!(format!("{}", id), "media_player.tv");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let id: MemberId = serde_json::from_str("\" media_player.tv\"").unwrap();
        assert_eq!(id.as_str(), "media_player.tv");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"media_player.tv\"");
    }
}

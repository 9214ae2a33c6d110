//! Member status snapshot type

use super::{MemberFeatures, MemberId, PlayerState};
use serde::{Deserialize, Serialize};

/// Everything the host currently reports about one member player
///
/// Optional fields are genuinely optional on the wire: a player that is
/// off usually reports no source list, volume or mute flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberStatus {
    /// The member this status belongs to
    pub id: MemberId,
    /// Friendly name, if the host has one
    #[serde(default)]
    pub name: Option<String>,
    /// Current state token
    #[serde(default)]
    pub state: PlayerState,
    /// Input sources the player can switch to
    #[serde(default)]
    pub source_list: Option<Vec<String>>,
    /// Currently selected input source
    #[serde(default)]
    pub source: Option<String>,
    /// Volume level in `[0, 1]`
    #[serde(default)]
    pub volume_level: Option<f64>,
    #[serde(default)]
    pub is_volume_muted: Option<bool>,
    #[serde(default)]
    pub supported_features: MemberFeatures,
}

impl MemberStatus {
    /// Create a status with the given state and nothing else reported
    pub fn new(id: impl Into<MemberId>, state: PlayerState) -> Self {
        Self {
            id: id.into(),
            name: None,
            state,
            source_list: None,
            source: None,
            volume_level: None,
            is_volume_muted: None,
            supported_features: MemberFeatures::empty(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_list = Some(sources.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_volume(mut self, level: f64) -> Self {
        self.volume_level = Some(level);
        self
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.is_volume_muted = Some(muted);
        self
    }

    pub fn with_features(mut self, features: MemberFeatures) -> Self {
        self.supported_features = features;
        self
    }

    /// Name shown to users: the friendly name, or the id when no usable name is set
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.id.as_str(),
        }
    }

    /// Reported sources, empty when the player reports none
    pub fn sources(&self) -> &[String] {
        self.source_list.as_deref().unwrap_or(&[])
    }

    pub fn is_available(&self) -> bool {
        self.state.is_available()
    }

    pub fn is_known(&self) -> bool {
        self.state.is_known()
    }

    pub fn supports(&self, feature: MemberFeatures) -> bool {
        self.supported_features.contains(feature)
    }
}

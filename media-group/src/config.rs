//! Group configuration
//!
//! A group is configured once with a name and the member players to
//! aggregate. The member list can later be replaced wholesale; there is no
//! incremental add/remove.

use std::collections::HashSet;
use std::path::Path;

use member_store::MemberId;
use serde::{Deserialize, Serialize};

use crate::{GroupError, Result};

/// Configuration for a single media group
///
/// # Example
///
/// ```rust
/// use media_group::GroupConfig;
///
/// let config = GroupConfig::new("Living Room", ["media_player.tv", "media_player.amp"])
///     .with_unique_id("living_room_group");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Stable identifier for the group entity
    ///
    /// Derived from the name when omitted.
    #[serde(default)]
    pub unique_id: Option<String>,

    /// User-facing title of the group
    pub name: String,

    /// Member players, in the order their unique sources are listed
    pub members: Vec<MemberId>,
}

impl GroupConfig {
    pub fn new<I, M>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<MemberId>,
    {
        Self {
            unique_id: None,
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_unique_id(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    /// Replace the member list, keeping name and id
    pub fn with_members<I, M>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<MemberId>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    /// The configured unique id, or one derived from the name
    pub fn unique_id(&self) -> String {
        match &self.unique_id {
            Some(id) if !id.trim().is_empty() => id.clone(),
            _ => slugify(&self.name),
        }
    }

    /// Check the configuration before a group is built from it
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GroupError::InvalidConfig(
                "Group name must not be empty".to_string(),
            ));
        }

        validate_members(&self.members)
    }

    /// Parse a configuration from JSON
    ///
    /// The result is validated before it is returned.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GroupConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Check a member list on its own, as the options update path does
pub fn validate_members(members: &[MemberId]) -> Result<()> {
    if members.is_empty() {
        return Err(GroupError::InvalidConfig(
            "A group needs at least one member".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(members.len());
    for member in members {
        if member.is_blank() {
            return Err(GroupError::InvalidConfig(
                "Member ids must not be empty".to_string(),
            ));
        }
        if !seen.insert(member) {
            return Err(GroupError::DuplicateMember(member.clone()));
        }
    }

    Ok(())
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_matches('_');
    format!("media_group_{}", slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_valid_config() {
        let config = GroupConfig::new("Den", ["media_player.a", "media_player.b"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.members.len(), 2);
    }

    #[test]
    fn test_blank_name_rejected() {
        let config = GroupConfig::new("   ", ["media_player.a"]);
        assert!(matches!(config.validate(), Err(GroupError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_members_rejected() {
        let config = GroupConfig::new("Den", Vec::<MemberId>::new());
        assert!(matches!(config.validate(), Err(GroupError::InvalidConfig(_))));
    }

    #[test]
    fn test_duplicate_member_rejected() {
        let config = GroupConfig::new("Den", ["media_player.a", " media_player.a"]);
        match config.validate() {
            Err(GroupError::DuplicateMember(id)) => assert_eq!(id.as_str(), "media_player.a"),
            other => panic!("expected duplicate member error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_member_rejected() {
        let config = GroupConfig::new("Den", ["media_player.a", "  "]);
        assert!(matches!(config.validate(), Err(GroupError::InvalidConfig(_))));
    }

    #[test]
    fn test_unique_id_derived_from_name() {
        let config = GroupConfig::new("Living Room / TV", ["media_player.a"]);
        assert_eq!(config.unique_id(), "media_group_living_room_tv");

        let explicit = config.with_unique_id("abc123");
        assert_eq!(explicit.unique_id(), "abc123");
    }

    #[test]
    fn test_with_members_replaces_list() {
        let config = GroupConfig::new("Den", ["media_player.a"])
            .with_unique_id("den")
            .with_members(["media_player.b", "media_player.c"]);
        assert_eq!(config.unique_id(), "den");
        assert_eq!(
            config.members,
            vec![MemberId::new("media_player.b"), MemberId::new("media_player.c")]
        );
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "name": "Kitchen",
            "members": ["media_player.radio", "media_player.speaker"]
        }"#;
        let config = GroupConfig::from_json_str(json).unwrap();
        assert_eq!(config.name, "Kitchen");
        assert!(config.unique_id.is_none());
        assert_eq!(config.members[1].as_str(), "media_player.speaker");
    }

    #[test]
    fn test_from_json_str_validates() {
        let json = r#"{"name": "Kitchen", "members": []}"#;
        assert!(matches!(
            GroupConfig::from_json_str(json),
            Err(GroupError::InvalidConfig(_))
        ));

        assert!(matches!(
            GroupConfig::from_json_str("not json"),
            Err(GroupError::Json(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let config = GroupConfig::new("Office", ["media_player.desk"]).with_unique_id("office");
        write!(file, "{}", config.to_json_pretty().unwrap()).unwrap();

        let loaded = GroupConfig::load(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let result = GroupConfig::load("/definitely/not/here/group.json");
        assert!(matches!(result, Err(GroupError::Io(_))));
    }
}

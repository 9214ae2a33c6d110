//! Aggregate on/off, volume and mute state

use member_store::PlayerState;
use serde::{Deserialize, Serialize};

use crate::roster::Roster;

/// Combined state derived from all members
///
/// `state` is `None` when no member has a concrete state, in which case
/// volume and mute are `None` as well. Otherwise it is always
/// [`PlayerState::On`]; the group does not mirror playing/paused.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateState {
    pub available: bool,
    pub state: Option<PlayerState>,
    /// Mean volume of members that report one
    pub volume_level: Option<f64>,
    /// True only if every member reporting a mute flag is muted
    pub is_volume_muted: Option<bool>,
}

impl AggregateState {
    pub fn derive(roster: &Roster) -> Self {
        let available = roster.present().any(|s| s.is_available());

        if roster.known().next().is_none() {
            return Self {
                available,
                ..Self::default()
            };
        }

        let volumes: Vec<f64> = roster.known().filter_map(|s| s.volume_level).collect();
        let volume_level = if volumes.is_empty() {
            None
        } else {
            Some(volumes.iter().sum::<f64>() / volumes.len() as f64)
        };

        let mut muted_flags = roster.known().filter_map(|s| s.is_volume_muted).peekable();
        let is_volume_muted = if muted_flags.peek().is_some() {
            Some(muted_flags.all(|muted| muted))
        } else {
            None
        };

        Self {
            available,
            state: Some(PlayerState::On),
            volume_level,
            is_volume_muted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::RosterEntry;
    use member_store::{MemberId, MemberStatus};

    fn on(id: &str) -> MemberStatus {
        MemberStatus::new(id, PlayerState::On)
    }

    #[test]
    fn test_mean_volume() {
        let aggregate = AggregateState::derive(&Roster::from_statuses([
            on("a").with_volume(0.2),
            on("b").with_volume(0.8),
        ]));
        assert!(aggregate.available);
        assert_eq!(aggregate.state, Some(PlayerState::On));
        assert!((aggregate.volume_level.unwrap() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_volume_ignores_unknown_and_silent_members() {
        let aggregate = AggregateState::derive(&Roster::from_statuses([
            on("a").with_volume(0.6),
            on("b"),
            MemberStatus::new("c", PlayerState::Unknown).with_volume(0.0),
            MemberStatus::new("d", PlayerState::Unavailable).with_volume(0.0),
        ]));
        assert_eq!(aggregate.volume_level, Some(0.6));
    }

    #[test]
    fn test_muted_requires_all_reporting_members() {
        let all_muted = AggregateState::derive(&Roster::from_statuses([
            on("a").with_muted(true),
            on("b").with_muted(true),
            on("c"),
        ]));
        assert_eq!(all_muted.is_volume_muted, Some(true));

        let mixed = AggregateState::derive(&Roster::from_statuses([
            on("a").with_muted(true),
            on("b").with_muted(false),
        ]));
        assert_eq!(mixed.is_volume_muted, Some(false));
    }

    #[test]
    fn test_no_reports_means_none() {
        let aggregate = AggregateState::derive(&Roster::from_statuses([on("a"), on("b")]));
        assert_eq!(aggregate.state, Some(PlayerState::On));
        assert!(aggregate.volume_level.is_none());
        assert!(aggregate.is_volume_muted.is_none());
    }

    #[test]
    fn test_paused_and_off_members_still_count_as_on() {
        let aggregate = AggregateState::derive(&Roster::from_statuses([
            MemberStatus::new("a", PlayerState::Off),
            MemberStatus::new("b", PlayerState::Paused),
        ]));
        assert_eq!(aggregate.state, Some(PlayerState::On));
    }

    #[test]
    fn test_only_unknown_members() {
        let aggregate = AggregateState::derive(&Roster::from_statuses([
            MemberStatus::new("a", PlayerState::Unknown).with_volume(0.4).with_muted(true),
        ]));
        assert!(aggregate.available);
        assert!(aggregate.state.is_none());
        assert!(aggregate.volume_level.is_none());
        assert!(aggregate.is_volume_muted.is_none());
    }

    #[test]
    fn test_nothing_present() {
        let aggregate = AggregateState::derive(&Roster::from_entries(vec![
            RosterEntry::new(MemberId::new("a"), None),
            RosterEntry::new(MemberId::new("b"), None),
        ]));
        assert_eq!(aggregate, AggregateState::default());
        assert!(!aggregate.available);
    }

    #[test]
    fn test_all_unavailable() {
        let aggregate = AggregateState::derive(&Roster::from_statuses([MemberStatus::new(
            "a",
            PlayerState::Unavailable,
        )]));
        assert!(!aggregate.available);
        assert!(aggregate.state.is_none());
    }
}

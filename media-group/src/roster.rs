//! Point-in-time view of every configured member

use member_store::{MemberId, MemberStatus, StatusSource};

/// One configured member and whatever status the host reports for it
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub id: MemberId,
    pub status: Option<MemberStatus>,
}

impl RosterEntry {
    pub fn new(id: MemberId, status: Option<MemberStatus>) -> Self {
        Self { id, status }
    }

    /// Status, if present and not unavailable
    pub fn available(&self) -> Option<&MemberStatus> {
        self.status.as_ref().filter(|s| s.is_available())
    }

    /// Status, if present and neither unavailable nor unknown
    pub fn known(&self) -> Option<&MemberStatus> {
        self.status.as_ref().filter(|s| s.is_known())
    }
}

/// Statuses of all configured members, in configuration order
///
/// Captured once per rebuild or dispatch so every pass in that step sees
/// the same data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Read the current status of each member from `source`
    pub fn capture(source: &dyn StatusSource, members: &[MemberId]) -> Self {
        let entries = members
            .iter()
            .map(|id| RosterEntry::new(id.clone(), source.status(id)))
            .collect();
        Self { entries }
    }

    pub fn from_entries(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    /// Build a roster from statuses only, one entry per status
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = MemberStatus>,
    {
        let entries = statuses
            .into_iter()
            .map(|status| RosterEntry::new(status.id.clone(), Some(status)))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Members whose status is present
    pub fn present(&self) -> impl Iterator<Item = &MemberStatus> {
        self.entries.iter().filter_map(|e| e.status.as_ref())
    }

    /// Members that count for source merging (unknown still counts)
    pub fn available(&self) -> impl Iterator<Item = &MemberStatus> {
        self.entries.iter().filter_map(RosterEntry::available)
    }

    /// Members with a concrete state, used for volume, mute and on/off
    pub fn known(&self) -> impl Iterator<Item = &MemberStatus> {
        self.entries.iter().filter_map(RosterEntry::known)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

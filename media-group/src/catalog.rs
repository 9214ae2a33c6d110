//! Merged source catalog
//!
//! Unions the source lists of all available members into one namespace.
//! A source reported by every available member keeps its bare name and
//! expands to all of them. A source only some members report is listed
//! once per owner as `"{member name} - {source}"`.
//!
//! The catalog is always rebuilt from a fresh [`Roster`]; it is never
//! patched in place.

use std::collections::HashMap;

use member_store::MemberId;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::roster::Roster;

/// One underlying (member, original source) pair a merged name expands to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceTarget {
    pub member_id: MemberId,
    pub source: String,
}

impl SourceTarget {
    pub fn new(member_id: MemberId, source: impl Into<String>) -> Self {
        Self {
            member_id,
            source: source.into(),
        }
    }
}

/// Name under which a source unique to some members is listed
pub fn format_merged_name(member_name: &str, source: &str) -> String {
    format!("{} - {}", member_name, source)
}

/// Mapping from merged source name to the targets it selects
///
/// `source_list` is the advertised order. Every key of the mapping appears
/// in it. When two unique sources format to the same name the later one
/// wins the mapping while the list keeps both entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceCatalog {
    mapping: HashMap<String, Vec<SourceTarget>>,
    source_list: Vec<String>,
}

/// Members that report one original source name, in discovery order
struct SourceOwners<'a> {
    source: &'a str,
    owners: Vec<(&'a MemberId, &'a str)>,
}

impl SourceCatalog {
    /// Build the catalog from the current member statuses
    ///
    /// Members that are absent or unavailable are ignored. Members whose
    /// state is merely unknown still contribute their sources.
    pub fn build(roster: &Roster) -> Self {
        let mut groups: Vec<SourceOwners<'_>> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut num_available = 0usize;

        for status in roster.available() {
            num_available += 1;
            let member_name = status.display_name();

            for source in status.sources() {
                let slot = *index.entry(source.as_str()).or_insert_with(|| {
                    groups.push(SourceOwners {
                        source: source.as_str(),
                        owners: Vec::new(),
                    });
                    groups.len() - 1
                });
                groups[slot].owners.push((&status.id, member_name));
            }
        }

        let mut catalog = SourceCatalog::default();

        for group in &groups {
            if num_available > 0 && group.owners.len() == num_available {
                let targets = group
                    .owners
                    .iter()
                    .map(|(id, _)| SourceTarget::new((*id).clone(), group.source))
                    .collect();
                catalog.insert(group.source.to_string(), targets);
            } else {
                for (id, member_name) in &group.owners {
                    catalog.insert(
                        format_merged_name(member_name, group.source),
                        vec![SourceTarget::new((*id).clone(), group.source)],
                    );
                }
            }
        }

        trace!(
            available = num_available,
            sources = catalog.source_list.len(),
            "rebuilt source catalog"
        );
        catalog
    }

    fn insert(&mut self, name: String, targets: Vec<SourceTarget>) {
        self.mapping.insert(name.clone(), targets);
        self.source_list.push(name);
    }

    /// Merged names in advertised order
    pub fn source_list(&self) -> &[String] {
        &self.source_list
    }

    /// Targets a merged name expands to
    pub fn targets(&self, name: &str) -> Option<&[SourceTarget]> {
        self.mapping.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.mapping.contains_key(name)
    }

    /// Iterate over `(merged name, targets)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SourceTarget])> {
        self.mapping
            .iter()
            .map(|(name, targets)| (name.as_str(), targets.as_slice()))
    }

    /// Number of distinct merged names
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::RosterEntry;
    use member_store::{MemberStatus, PlayerState};

    fn member(id: &str, name: &str, sources: &[&str]) -> MemberStatus {
        MemberStatus::new(id, PlayerState::On)
            .with_name(name)
            .with_sources(sources.iter().copied())
    }

    fn target(id: &str, source: &str) -> SourceTarget {
        SourceTarget::new(MemberId::new(id), source)
    }

    #[test]
    fn test_format_merged_name() {
        assert_eq!(format_merged_name("Kitchen", "Radio"), "Kitchen - Radio");
        assert_eq!(format_merged_name("", "AUX"), " - AUX");
    }

    #[test]
    fn test_shared_and_unique_sources() {
        let roster = Roster::from_statuses([
            member("a", "A", &["HDMI1", "HDMI2"]),
            member("b", "B", &["HDMI1"]),
        ]);
        let catalog = SourceCatalog::build(&roster);

        assert_eq!(catalog.source_list(), ["HDMI1", "A - HDMI2"]);
        assert_eq!(
            catalog.targets("HDMI1").unwrap(),
            [target("a", "HDMI1"), target("b", "HDMI1")]
        );
        assert_eq!(catalog.targets("A - HDMI2").unwrap(), [target("a", "HDMI2")]);
    }

    #[test]
    fn test_order_follows_first_seen_source() {
        let roster = Roster::from_statuses([
            member("a", "A", &["Radio", "TV"]),
            member("b", "B", &["TV", "Phono", "Radio"]),
        ]);
        let catalog = SourceCatalog::build(&roster);

        // Radio first seen on A, then TV, then Phono
        assert_eq!(catalog.source_list(), ["Radio", "TV", "B - Phono"]);
    }

    #[test]
    fn test_unique_source_listed_per_owner() {
        let roster = Roster::from_statuses([
            member("a", "A", &["USB", "Line"]),
            member("b", "B", &["USB"]),
            member("c", "C", &["Line"]),
        ]);
        let catalog = SourceCatalog::build(&roster);

        assert_eq!(
            catalog.source_list(),
            ["A - USB", "B - USB", "A - Line", "C - Line"]
        );
        assert_eq!(catalog.targets("C - Line").unwrap(), [target("c", "Line")]);
    }

    #[test]
    fn test_unavailable_members_ignored_unknown_counted() {
        let roster = Roster::from_statuses([
            MemberStatus::new("a", PlayerState::Unavailable)
                .with_name("A")
                .with_sources(["AUX", "BT"]),
            MemberStatus::new("b", PlayerState::Unknown)
                .with_name("B")
                .with_sources(["AUX"]),
        ]);
        let catalog = SourceCatalog::build(&roster);

        assert_eq!(catalog.source_list(), ["AUX"]);
        assert_eq!(catalog.targets("AUX").unwrap(), [target("b", "AUX")]);
    }

    #[test]
    fn test_absent_members_ignored() {
        let roster = Roster::from_entries(vec![
            RosterEntry::new(MemberId::new("a"), None),
            RosterEntry::new(MemberId::new("b"), Some(member("b", "B", &["CD"]))),
        ]);
        let catalog = SourceCatalog::build(&roster);
        assert_eq!(catalog.source_list(), ["CD"]);
    }

    #[test]
    fn test_member_without_source_list_makes_everything_unique() {
        let roster = Roster::from_statuses([
            member("a", "A", &["CD"]),
            MemberStatus::new("b", PlayerState::Off).with_name("B"),
        ]);
        let catalog = SourceCatalog::build(&roster);
        assert_eq!(catalog.source_list(), ["A - CD"]);
    }

    #[test]
    fn test_no_available_members() {
        let roster = Roster::from_statuses([MemberStatus::new("a", PlayerState::Unavailable)
            .with_sources(["CD"])]);
        let catalog = SourceCatalog::build(&roster);
        assert!(catalog.is_empty());
        assert!(catalog.source_list().is_empty());

        assert!(SourceCatalog::build(&Roster::default()).is_empty());
    }

    #[test]
    fn test_unnamed_member_prefixed_with_id() {
        let roster = Roster::from_statuses([
            MemberStatus::new("media_player.a", PlayerState::On).with_sources(["CD", "FM"]),
            member("b", "B", &["CD"]),
        ]);
        let catalog = SourceCatalog::build(&roster);
        assert_eq!(catalog.source_list(), ["CD", "media_player.a - FM"]);
    }

    #[test]
    fn test_colliding_unique_names_last_write_wins() {
        // Both members are called "Speaker"; their unique "BT" sources collide
        let roster = Roster::from_statuses([
            member("a", "Speaker", &["BT", "CD"]).with_source("BT"),
            member("b", "Other", &["CD"]),
            member("d", "Speaker", &["CD", "BT"]),
        ]);
        let catalog = SourceCatalog::build(&roster);

        assert_eq!(catalog.source_list(), ["Speaker - BT", "Speaker - BT", "CD"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.targets("Speaker - BT").unwrap(), [target("d", "BT")]);

        // "a" lost its entry, so its selection no longer maps to a merged name
        assert!(crate::resolver::resolve_current_source(&catalog, &roster).is_none());
    }

    #[test]
    fn test_keys_match_source_list() {
        let roster = Roster::from_statuses([
            member("a", "A", &["1", "2", "3"]),
            member("b", "B", &["2", "4"]),
        ]);
        let catalog = SourceCatalog::build(&roster);
        for name in catalog.source_list() {
            assert!(catalog.contains(name));
        }
        assert_eq!(catalog.len(), catalog.source_list().len());
        assert_eq!(catalog.iter().count(), catalog.len());
    }
}

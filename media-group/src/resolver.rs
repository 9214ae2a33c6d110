//! Current source resolution
//!
//! Works out which merged source the group is on from what each member
//! has selected individually.

use std::collections::{BTreeSet, HashMap};

use member_store::MemberId;

use crate::catalog::SourceCatalog;
use crate::roster::Roster;

/// Determine the merged source the group is currently on
///
/// Each available member's selected source is mapped back through the
/// catalog. If members point at different merged names the
/// lexicographically smallest one is reported. Members whose selection is
/// not in the catalog are ignored.
pub fn resolve_current_source(catalog: &SourceCatalog, roster: &Roster) -> Option<String> {
    let mut reverse: HashMap<(&MemberId, &str), &str> = HashMap::new();
    for (name, targets) in catalog.iter() {
        for target in targets {
            reverse.insert((&target.member_id, target.source.as_str()), name);
        }
    }

    let active: BTreeSet<&str> = roster
        .available()
        .filter_map(|status| {
            let selected = status.source.as_deref().filter(|s| !s.is_empty())?;
            reverse.get(&(&status.id, selected)).copied()
        })
        .collect();

    active.first().map(|name| name.to_string())
}

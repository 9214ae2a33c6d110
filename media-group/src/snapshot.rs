//! Public state a group publishes to its host

use member_store::{MemberId, PlayerState};
use serde::{Deserialize, Serialize};

use crate::aggregate::AggregateState;
use crate::catalog::SourceCatalog;

/// Everything a host shows for the group after a rebuild
///
/// Replaced as a whole on every rebuild; never partially updated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    pub available: bool,
    pub state: Option<PlayerState>,
    pub source_list: Vec<String>,
    pub source: Option<String>,
    pub volume_level: Option<f64>,
    pub is_volume_muted: Option<bool>,
    /// Configured members, exposed as the `entity_id` attribute
    #[serde(rename = "entity_id")]
    pub member_ids: Vec<MemberId>,
}

impl GroupSnapshot {
    pub(crate) fn assemble(
        catalog: &SourceCatalog,
        source: Option<String>,
        aggregate: AggregateState,
        member_ids: &[MemberId],
    ) -> Self {
        Self {
            available: aggregate.available,
            state: aggregate.state,
            source_list: catalog.source_list().to_vec(),
            source,
            volume_level: aggregate.volume_level,
            is_volume_muted: aggregate.is_volume_muted,
            member_ids: member_ids.to_vec(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

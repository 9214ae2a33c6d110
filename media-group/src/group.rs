//! MediaGroup - one logical player built from several member players
//!
//! Keeps a merged source catalog and an aggregate state in sync with the
//! members' live status, and fans group commands out to the members.

use std::collections::HashSet;
use std::sync::Arc;

use member_store::{ChangeEvent, MemberFeatures, MemberId, PlayerState, StatusSource};
use tracing::{debug, info};

use crate::aggregate::AggregateState;
use crate::catalog::SourceCatalog;
use crate::command::CommandSink;
use crate::config::{validate_members, GroupConfig};
use crate::dispatch::{self, DispatchOutcome};
use crate::resolver::resolve_current_source;
use crate::roster::Roster;
use crate::snapshot::GroupSnapshot;
use crate::Result;

/// Aggregating media player
///
/// Driven from a single host event loop: the host feeds member change
/// events into [`handle_changes`](Self::handle_changes) and publishes
/// [`snapshot`](Self::snapshot) whenever it returns `true`. Commands read
/// member status fresh at call time.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use media_group::{GroupConfig, MediaGroup, RecordingSink};
/// use member_store::{MemberStatus, MemberStore, PlayerState};
///
/// let store = MemberStore::new();
/// store.set(MemberStatus::new("media_player.tv", PlayerState::On)
///     .with_name("TV")
///     .with_sources(["HDMI1", "HDMI2"])
///     .with_source("HDMI1"));
/// store.set(MemberStatus::new("media_player.amp", PlayerState::On)
///     .with_name("Amp")
///     .with_sources(["HDMI1"]));
///
/// let sink = Arc::new(RecordingSink::new());
/// let config = GroupConfig::new("Living Room", ["media_player.tv", "media_player.amp"]);
/// let group = MediaGroup::new(config, Arc::new(store.clone()), sink.clone())?;
///
/// assert_eq!(group.source_list(), ["HDMI1", "TV - HDMI2"]);
/// assert_eq!(group.source(), Some("HDMI1"));
///
/// group.select_source("TV - HDMI2");
/// assert_eq!(sink.len(), 1);
/// # Ok::<(), media_group::GroupError>(())
/// ```
pub struct MediaGroup {
    unique_id: String,
    name: String,
    members: Vec<MemberId>,
    member_set: HashSet<MemberId>,

    status_source: Arc<dyn StatusSource>,
    command_sink: Arc<dyn CommandSink>,

    catalog: SourceCatalog,
    snapshot: GroupSnapshot,
}

impl MediaGroup {
    /// Features the group itself offers to its host
    pub const SUPPORTED_FEATURES: MemberFeatures = MemberFeatures::SELECT_SOURCE
        .union(MemberFeatures::VOLUME_SET)
        .union(MemberFeatures::VOLUME_MUTE);

    /// Create a group, start watching its members and build the initial state
    pub fn new(
        config: GroupConfig,
        status_source: Arc<dyn StatusSource>,
        command_sink: Arc<dyn CommandSink>,
    ) -> Result<Self> {
        config.validate()?;

        let unique_id = config.unique_id();
        let member_set = config.members.iter().cloned().collect();
        let mut group = Self {
            unique_id,
            name: config.name,
            members: config.members,
            member_set,
            status_source,
            command_sink,
            catalog: SourceCatalog::default(),
            snapshot: GroupSnapshot::default(),
        };

        group.status_source.watch(&group.members);
        group.rebuild();

        info!(
            group = %group.name,
            members = group.members.len(),
            "media group created"
        );
        Ok(group)
    }

    // ========================================================================
    // Change handling
    // ========================================================================

    /// Rebuild if the event concerns one of this group's members
    pub fn handle_change(&mut self, event: &ChangeEvent) -> bool {
        self.handle_changes(std::iter::once(event))
    }

    /// Rebuild at most once for a batch of change events
    ///
    /// Returns `true` if any event concerned a member and the snapshot was
    /// rebuilt.
    pub fn handle_changes<'a, I>(&mut self, events: I) -> bool
    where
        I: IntoIterator<Item = &'a ChangeEvent>,
    {
        let relevant = events
            .into_iter()
            .any(|event| self.member_set.contains(&event.member_id));

        if relevant {
            self.rebuild();
        }
        relevant
    }

    /// Recompute catalog, current source and aggregate state from live status
    pub fn rebuild(&mut self) -> &GroupSnapshot {
        let roster = self.roster();

        let catalog = SourceCatalog::build(&roster);
        let source = resolve_current_source(&catalog, &roster);
        let aggregate = AggregateState::derive(&roster);

        self.snapshot = GroupSnapshot::assemble(&catalog, source, aggregate, &self.members);
        self.catalog = catalog;

        debug!(
            group = %self.name,
            sources = self.snapshot.source_list.len(),
            source = ?self.snapshot.source,
            available = self.snapshot.available,
            "rebuilt media group"
        );
        &self.snapshot
    }

    /// Replace the member list
    ///
    /// All derived state is discarded and rebuilt against the new members.
    pub fn reconfigure<I, M>(&mut self, members: I) -> Result<()>
    where
        I: IntoIterator<Item = M>,
        M: Into<MemberId>,
    {
        let members: Vec<MemberId> = members.into_iter().map(Into::into).collect();
        validate_members(&members)?;

        self.status_source.unwatch(&self.members);
        self.member_set = members.iter().cloned().collect();
        self.members = members;
        self.status_source.watch(&self.members);

        self.catalog = SourceCatalog::default();
        self.snapshot = GroupSnapshot::default();
        self.rebuild();

        info!(
            group = %self.name,
            members = self.members.len(),
            "media group reconfigured"
        );
        Ok(())
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Select a merged source on the members it expands to
    ///
    /// Unknown names are logged and ignored.
    pub fn select_source(&self, name: &str) -> DispatchOutcome {
        dispatch::select_source(&self.catalog, self.command_sink.as_ref(), name)
    }

    /// Set the volume on every member that supports it
    pub fn set_volume_level(&self, level: f64) -> DispatchOutcome {
        dispatch::set_volume_level(&self.roster(), self.command_sink.as_ref(), level)
    }

    /// Mute or unmute every member that supports it
    pub fn mute_volume(&self, muted: bool) -> DispatchOutcome {
        dispatch::mute_volume(&self.roster(), self.command_sink.as_ref(), muted)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn member_ids(&self) -> &[MemberId] {
        &self.members
    }

    pub fn source_list(&self) -> &[String] {
        &self.snapshot.source_list
    }

    pub fn source(&self) -> Option<&str> {
        self.snapshot.source.as_deref()
    }

    pub fn available(&self) -> bool {
        self.snapshot.available
    }

    pub fn state(&self) -> Option<&PlayerState> {
        self.snapshot.state.as_ref()
    }

    pub fn volume_level(&self) -> Option<f64> {
        self.snapshot.volume_level
    }

    pub fn is_volume_muted(&self) -> Option<bool> {
        self.snapshot.is_volume_muted
    }

    pub fn catalog(&self) -> &SourceCatalog {
        &self.catalog
    }

    /// Last published state
    pub fn snapshot(&self) -> &GroupSnapshot {
        &self.snapshot
    }

    /// Extra attributes for the host: the member list under `entity_id`
    pub fn extra_attributes(&self) -> serde_json::Value {
        serde_json::json!({ "entity_id": self.members })
    }

    fn roster(&self) -> Roster {
        Roster::capture(self.status_source.as_ref(), &self.members)
    }
}

impl Drop for MediaGroup {
    fn drop(&mut self) {
        self.status_source.unwatch(&self.members);
    }
}

impl std::fmt::Debug for MediaGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaGroup")
            .field("unique_id", &self.unique_id)
            .field("name", &self.name)
            .field("members", &self.members)
            .field("snapshot", &self.snapshot)
            .finish()
    }
}

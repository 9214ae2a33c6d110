//! Test helpers for group integration tests
#![allow(dead_code)]

use std::sync::Arc;

use media_group::{
    CommandError, CommandSink, GroupConfig, MediaGroup, MemberCommand, RecordingSink,
};
use member_store::{MemberFeatures, MemberId, MemberStatus, MemberStore, PlayerState};
use parking_lot::Mutex;

/// Every feature the group forwards commands for
pub fn full_features() -> MemberFeatures {
    MemberFeatures::SELECT_SOURCE | MemberFeatures::VOLUME_SET | MemberFeatures::VOLUME_MUTE
}

/// A member that is on and supports everything
pub fn member(id: &str, name: &str, sources: &[&str]) -> MemberStatus {
    MemberStatus::new(id, PlayerState::On)
        .with_name(name)
        .with_sources(sources.iter().copied())
        .with_features(full_features())
}

/// A store, a recording sink and a group over them
pub struct GroupHarness {
    pub store: MemberStore,
    pub sink: Arc<RecordingSink>,
    pub group: MediaGroup,
}

impl GroupHarness {
    /// Seed the store with `statuses` and build a group over `members`
    pub fn new(members: &[&str], statuses: Vec<MemberStatus>) -> Self {
        let store = MemberStore::new();
        for status in statuses {
            store.set(status);
        }

        let sink = Arc::new(RecordingSink::new());
        let config = GroupConfig::new("Test Group", members.iter().copied());
        let group = MediaGroup::new(config, Arc::new(store.clone()), sink.clone())
            .unwrap_or_else(|e| panic!("Failed to build group: {}", e));

        Self { store, sink, group }
    }

    /// Drain pending change events into the group
    pub fn pump(&mut self) -> bool {
        let events: Vec<_> = self.store.iter().try_iter().collect();
        self.group.handle_changes(&events)
    }

    /// Apply recorded select-source commands back to the store, as a
    /// member would after acting on them
    pub fn apply_selections(&mut self) {
        for (id, command) in self.sink.take() {
            if let MemberCommand::SelectSource { source } = command {
                self.store.update(&id, |status| status.source = Some(source));
            }
        }
        self.pump();
    }
}

/// Sink that fails for a fixed set of members and records the rest
#[derive(Default)]
pub struct FlakySink {
    pub unreachable: Vec<MemberId>,
    pub delivered: Mutex<Vec<(MemberId, MemberCommand)>>,
}

impl FlakySink {
    pub fn failing_for(ids: &[&str]) -> Self {
        Self {
            unreachable: ids.iter().map(|id| MemberId::new(*id)).collect(),
            delivered: Mutex::new(Vec::new()),
        }
    }
}

impl CommandSink for FlakySink {
    fn send_command(&self, member_id: &MemberId, command: MemberCommand) -> Result<(), CommandError> {
        if self.unreachable.contains(member_id) {
            return Err(CommandError::Unreachable(member_id.clone()));
        }
        self.delivered.lock().push((member_id.clone(), command));
        Ok(())
    }
}

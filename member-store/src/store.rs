//! In-memory member status registry with change detection
//!
//! `MemberStore` keeps the latest `MemberStatus` per member and emits a
//! `ChangeEvent` whenever a watched member's status actually changes.

use std::collections::HashMap;
use std::sync::{mpsc, Arc};
use std::time::Instant;

use parking_lot::{Mutex, RwLock};
use tracing::trace;

use crate::event::ChangeEvent;
use crate::iter::ChangeIterator;
use crate::model::{MemberId, MemberStatus};
use crate::source::StatusSource;

/// Live status of every member the host knows about
///
/// Cloning is cheap and all clones share the same state, so the host can
/// keep one handle for writing statuses while aggregators read through
/// another.
///
/// Watches are reference counted: a member keeps emitting events until
/// every `watch` call for it has been matched by an `unwatch`.
///
/// # Example
///
/// ```rust
/// use member_store::{MemberStatus, MemberStore, PlayerState};
///
/// let store = MemberStore::new();
/// let tv = member_store::MemberId::new("media_player.tv");
///
/// store.watch_member(tv.clone());
/// store.set(MemberStatus::new(tv.clone(), PlayerState::On).with_sources(["HDMI1"]));
///
/// let event = store.iter().try_recv().unwrap();
/// assert_eq!(event.member_id, tv);
/// assert_eq!(store.get(&tv).unwrap().sources(), ["HDMI1"]);
/// ```
pub struct MemberStore {
    /// Latest status per member
    members: Arc<RwLock<HashMap<MemberId, MemberStatus>>>,

    /// Watch reference counts per member
    watched: Arc<RwLock<HashMap<MemberId, usize>>>,

    event_tx: mpsc::Sender<ChangeEvent>,

    /// Shared so every clone iterates the same queue
    event_rx: Arc<Mutex<mpsc::Receiver<ChangeEvent>>>,
}

impl MemberStore {
    /// Create a new empty store
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            members: Arc::new(RwLock::new(HashMap::new())),
            watched: Arc::new(RwLock::new(HashMap::new())),
            event_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    /// Get the current status of a member
    pub fn get(&self, member_id: &MemberId) -> Option<MemberStatus> {
        self.members.read().get(member_id).cloned()
    }

    pub fn contains(&self, member_id: &MemberId) -> bool {
        self.members.read().contains_key(member_id)
    }

    /// Insert or replace a member's status
    ///
    /// Emits a change event only if the status differs from the stored one
    /// and the member is watched. Returns whether the status changed.
    pub fn set(&self, status: MemberStatus) -> bool {
        let member_id = status.id.clone();
        let changed = {
            let mut members = self.members.write();
            match members.get(&member_id) {
                Some(current) if *current == status => false,
                _ => {
                    members.insert(member_id.clone(), status);
                    true
                }
            }
        };

        if changed {
            self.maybe_emit_change(&member_id);
        }
        changed
    }

    /// Mutate an existing status in place
    ///
    /// Does nothing if the member is not in the store. Returns whether the
    /// status changed.
    pub fn update<F>(&self, member_id: &MemberId, f: F) -> bool
    where
        F: FnOnce(&mut MemberStatus),
    {
        let changed = {
            let mut members = self.members.write();
            let Some(current) = members.get_mut(member_id) else {
                return false;
            };
            let before = current.clone();
            f(current);
            // The id is the map key; keep them in sync
            current.id = member_id.clone();
            *current != before
        };

        if changed {
            self.maybe_emit_change(member_id);
        }
        changed
    }

    /// Forget a member's status entirely
    ///
    /// Readers see the member as absent afterwards. Returns whether a
    /// status was removed.
    pub fn remove(&self, member_id: &MemberId) -> bool {
        let removed = self.members.write().remove(member_id).is_some();
        if removed {
            self.maybe_emit_change(member_id);
        }
        removed
    }

    /// Register interest in a member
    pub fn watch_member(&self, member_id: MemberId) {
        *self.watched.write().entry(member_id).or_insert(0) += 1;
    }

    /// Release one registration for a member
    pub fn unwatch_member(&self, member_id: &MemberId) {
        let mut watched = self.watched.write();
        if let Some(count) = watched.get_mut(member_id) {
            *count -= 1;
            if *count == 0 {
                watched.remove(member_id);
            }
        }
    }

    pub fn is_watched(&self, member_id: &MemberId) -> bool {
        self.watched.read().contains_key(member_id)
    }

    /// Create an iterator over change events
    ///
    /// Only watched members produce events.
    pub fn iter(&self) -> ChangeIterator {
        ChangeIterator::new(Arc::clone(&self.event_rx))
    }

    pub fn len(&self) -> usize {
        self.members.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn member_ids(&self) -> Vec<MemberId> {
        self.members.read().keys().cloned().collect()
    }

    /// Drop all statuses and watches
    pub fn clear(&self) {
        self.members.write().clear();
        self.watched.write().clear();
    }

    fn maybe_emit_change(&self, member_id: &MemberId) {
        if !self.is_watched(member_id) {
            return;
        }

        trace!(member = %member_id, "member status changed");
        let event = ChangeEvent::with_timestamp(member_id.clone(), Instant::now());
        let _ = self.event_tx.send(event);
    }
}

impl StatusSource for MemberStore {
    fn status(&self, member_id: &MemberId) -> Option<MemberStatus> {
        self.get(member_id)
    }

    fn watch(&self, member_ids: &[MemberId]) {
        for id in member_ids {
            self.watch_member(id.clone());
        }
    }

    fn unwatch(&self, member_ids: &[MemberId]) {
        for id in member_ids {
            self.unwatch_member(id);
        }
    }
}

impl Default for MemberStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemberStore {
    fn clone(&self) -> Self {
        Self {
            members: Arc::clone(&self.members),
            watched: Arc::clone(&self.watched),
            event_tx: self.event_tx.clone(),
            event_rx: Arc::clone(&self.event_rx),
        }
    }
}

impl std::fmt::Debug for MemberStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberStore")
            .field("member_count", &self.len())
            .field("watched_count", &self.watched.read().len())
            .finish()
    }
}

//! Read-only view of live member status

use crate::model::{MemberId, MemberStatus};

/// Where an aggregator reads member status from
///
/// Implementations hand out owned snapshots; a reader never holds a lock
/// across its own work. `watch` registers interest in change notifications
/// for the given members and `unwatch` releases it again. Both must be
/// balanced per caller, since several aggregators may watch the same member.
pub trait StatusSource: Send + Sync {
    /// Current status of a member, or `None` if the host knows nothing about it
    fn status(&self, member_id: &MemberId) -> Option<MemberStatus>;

    /// Start emitting change events for these members
    fn watch(&self, member_ids: &[MemberId]);

    /// Stop emitting change events for these members
    fn unwatch(&self, member_ids: &[MemberId]);
}

//! Change events for member status updates
//!
//! When a watched member's status changes, a `ChangeEvent` is emitted
//! naming the member. Consumers re-read the status from the store.

use std::time::Instant;

use crate::model::MemberId;

/// A change event emitted when a watched member's status changes
///
/// Events carry only the member id, not the new status. Use
/// `MemberStore::get()` (or `StatusSource::status()`) to read it.
///
/// # Example
///
/// ```rust,ignore
/// for event in store.iter().try_iter() {
///     match store.get(&event.member_id) {
///         Some(status) => println!("{} is now {}", event.member_id, status.state),
///         None => println!("{} went away", event.member_id),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    /// The member whose status changed
    pub member_id: MemberId,

    /// When the change was detected
    pub timestamp: Instant,
}

impl ChangeEvent {
    pub fn new(member_id: MemberId) -> Self {
        Self {
            member_id,
            timestamp: Instant::now(),
        }
    }

    pub fn with_timestamp(member_id: MemberId, timestamp: Instant) -> Self {
        Self {
            member_id,
            timestamp,
        }
    }
}

impl PartialEq for ChangeEvent {
    fn eq(&self, other: &Self) -> bool {
        // Timestamp not included in equality
        self.member_id == other.member_id
    }
}

//! Member Status Registry
//!
//! Data model for the individual media players that make up a media group,
//! plus an in-memory registry that tracks their live status and reports
//! changes.
//!
//! # Features
//!
//! - **Explicit status model**: `MemberStatus` with optional fields instead of an attribute map
//! - **Change Detection**: Only emit events when a status actually changes
//! - **Watch Pattern**: Reference-counted interest in specific members
//! - **Batch Iteration**: Drain queued change events in one go
//!
//! # Quick Start
//!
//! ```rust
//! use member_store::{MemberId, MemberStatus, MemberStore, PlayerState, StatusSource};
//!
//! let store = MemberStore::new();
//! let amp = MemberId::new("media_player.amp");
//!
//! store.watch(&[amp.clone()]);
//! store.set(
//!     MemberStatus::new(amp.clone(), PlayerState::Playing)
//!         .with_name("Amp")
//!         .with_sources(["Phono", "Optical"]),
//! );
//!
//! let status = store.status(&amp).unwrap();
//! assert_eq!(status.display_name(), "Amp");
//! assert_eq!(store.iter().try_iter().count(), 1);
//! ```
//!
//! # Architecture
//!
//! ```text
//! MemberStore
//!     │
//!     ├── members: HashMap<MemberId, MemberStatus>
//!     │
//!     ├── watched: HashMap<MemberId, refcount>
//!     │
//!     └── event_channel: mpsc::channel<ChangeEvent>
//!             │
//!             └── ChangeIterator
//! ```

pub mod event;
pub mod iter;
pub mod model;
pub mod source;
pub mod store;

pub use event::ChangeEvent;
pub use iter::{ChangeIterator, TimeoutIter, TryIter};
pub use model::{MemberFeatures, MemberId, MemberStatus, PlayerState};
pub use source::StatusSource;
pub use store::MemberStore;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::event::ChangeEvent;
    pub use crate::model::{MemberFeatures, MemberId, MemberStatus, PlayerState};
    pub use crate::source::StatusSource;
    pub use crate::store::MemberStore;
}

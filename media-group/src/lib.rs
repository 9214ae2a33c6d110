//! Media Group
//!
//! Combines several independent media players into one logical player.
//!
//! # Features
//!
//! - **Merged Sources**: Sources every available member offers appear once;
//!   the rest are listed per member as `"{member} - {source}"`
//! - **Current Source**: Derived from what the members are playing, with a
//!   deterministic tie-break
//! - **Aggregate State**: Availability, on/off, mean volume and combined mute
//! - **Command Fan-out**: Select source, set volume and mute are forwarded
//!   to the right members
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use media_group::{GroupConfig, MediaGroup, RecordingSink};
//! use member_store::{MemberStatus, MemberStore, PlayerState};
//!
//! let store = MemberStore::new();
//! let sink = Arc::new(RecordingSink::new());
//!
//! let config = GroupConfig::new("Kitchen", ["media_player.radio", "media_player.speaker"]);
//! let mut group = MediaGroup::new(config, Arc::new(store.clone()), sink.clone())?;
//! assert!(!group.available());
//!
//! store.set(
//!     MemberStatus::new("media_player.radio", PlayerState::Playing)
//!         .with_name("Radio")
//!         .with_sources(["FM", "DAB"])
//!         .with_source("DAB"),
//! );
//!
//! // Host event loop: drain pending changes, rebuild once per batch
//! let events: Vec<_> = store.iter().try_iter().collect();
//! if group.handle_changes(&events) {
//!     assert_eq!(group.source_list(), ["FM", "DAB"]);
//!     assert_eq!(group.source(), Some("DAB"));
//! }
//! # Ok::<(), media_group::GroupError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! MemberStore ──ChangeEvent──► MediaGroup::handle_changes
//!                                   │
//!                                   ├── Roster::capture
//!                                   ├── SourceCatalog::build
//!                                   ├── resolve_current_source
//!                                   ├── AggregateState::derive
//!                                   └── GroupSnapshot
//!
//! MediaGroup::{select_source, set_volume_level, mute_volume}
//!                                   │
//!                                   └── dispatch ──MemberCommand──► CommandSink
//! ```

// Derived state
pub mod aggregate;
pub mod catalog;
pub mod resolver;
pub mod roster;
pub mod snapshot;

// Commands
pub mod command;
pub mod dispatch;

// Group entity
pub mod config;
pub mod group;

pub mod error;
pub mod logging;

pub use aggregate::AggregateState;
pub use catalog::{format_merged_name, SourceCatalog, SourceTarget};
pub use command::{CommandSink, MemberCommand, RecordingSink};
pub use config::{validate_members, GroupConfig};
pub use dispatch::DispatchOutcome;
pub use error::{CommandError, GroupError, Result};
pub use group::MediaGroup;
pub use logging::{init_logging, init_logging_from_env, LoggingError, LoggingMode};
pub use resolver::resolve_current_source;
pub use roster::{Roster, RosterEntry};
pub use snapshot::GroupSnapshot;

// Member model, re-exported so hosts need only one import
pub use member_store::{
    ChangeEvent, MemberFeatures, MemberId, MemberStatus, MemberStore, PlayerState, StatusSource,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::command::{CommandSink, MemberCommand, RecordingSink};
    pub use crate::config::GroupConfig;
    pub use crate::group::MediaGroup;
    pub use crate::snapshot::GroupSnapshot;
    pub use member_store::prelude::*;
}

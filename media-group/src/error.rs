use member_store::MemberId;
use thiserror::Error;

/// Result type for media-group operations
pub type Result<T> = std::result::Result<T, GroupError>;

/// Errors raised while building or reconfiguring a group
///
/// Runtime trouble with individual members (unavailable players, failed
/// sends, unknown sources) is logged and never surfaces here.
#[derive(Error, Debug)]
pub enum GroupError {
    #[error("Invalid group configuration: {0}")]
    InvalidConfig(String),

    #[error("Member listed more than once: {0}")]
    DuplicateMember(MemberId),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure reported by a `CommandSink` for a single member command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Member {0} is unreachable")]
    Unreachable(MemberId),

    #[error("Command rejected by {member}: {reason}")]
    Rejected { member: MemberId, reason: String },
}

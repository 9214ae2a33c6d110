//! Commands sent to member players

use member_store::MemberId;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::CommandError;

/// A single instruction for one member player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "service", rename_all = "snake_case")]
pub enum MemberCommand {
    SelectSource { source: String },
    #[serde(rename = "volume_set")]
    SetVolume { level: f64 },
    #[serde(rename = "volume_mute")]
    SetMute { muted: bool },
}

impl MemberCommand {
    /// Host service name for this command
    pub fn service_name(&self) -> &'static str {
        match self {
            MemberCommand::SelectSource { .. } => "select_source",
            MemberCommand::SetVolume { .. } => "volume_set",
            MemberCommand::SetMute { .. } => "volume_mute",
        }
    }
}

/// Where member commands are delivered
///
/// Delivery is fire-and-forget from the group's point of view: the effect
/// of a command is observed later through the member's next status update.
/// An `Err` only means this particular send failed; the group logs it and
/// carries on with the remaining members.
pub trait CommandSink: Send + Sync {
    fn send_command(&self, member_id: &MemberId, command: MemberCommand) -> Result<(), CommandError>;
}

/// Sink that keeps every command in memory
///
/// Useful for hosts that collect commands and deliver them in bulk.
#[derive(Debug, Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<(MemberId, MemberCommand)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far, in order
    pub fn sent(&self) -> Vec<(MemberId, MemberCommand)> {
        self.sent.lock().clone()
    }

    /// Remove and return everything received so far
    pub fn take(&self) -> Vec<(MemberId, MemberCommand)> {
        std::mem::take(&mut *self.sent.lock())
    }

    pub fn len(&self) -> usize {
        self.sent.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CommandSink for RecordingSink {
    fn send_command(&self, member_id: &MemberId, command: MemberCommand) -> Result<(), CommandError> {
        self.sent.lock().push((member_id.clone(), command));
        Ok(())
    }
}

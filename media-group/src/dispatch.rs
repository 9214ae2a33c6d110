//! Translate group commands into member commands

use member_store::{MemberFeatures, MemberId};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::catalog::SourceCatalog;
use crate::command::{CommandSink, MemberCommand};
use crate::roster::Roster;

/// How many member commands a group command turned into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchOutcome {
    /// Commands the sink accepted
    pub sent: usize,
    /// Commands the sink reported as failed
    pub failed: usize,
}

impl DispatchOutcome {
    /// Total commands attempted
    pub fn attempted(&self) -> usize {
        self.sent + self.failed
    }

    fn record(&mut self, sink: &dyn CommandSink, member_id: &MemberId, command: MemberCommand) {
        let service = command.service_name();
        match sink.send_command(member_id, command) {
            Ok(()) => {
                debug!(member = %member_id, service, "sent member command");
                self.sent += 1;
            }
            Err(e) => {
                warn!(member = %member_id, service, error = %e, "member command failed");
                self.failed += 1;
            }
        }
    }
}

/// Select a merged source on every member it expands to
///
/// An unknown name is logged and ignored.
pub fn select_source(catalog: &SourceCatalog, sink: &dyn CommandSink, name: &str) -> DispatchOutcome {
    let mut outcome = DispatchOutcome::default();

    let Some(targets) = catalog.targets(name) else {
        error!("Unknown source: {}", name);
        return outcome;
    };

    for target in targets {
        outcome.record(
            sink,
            &target.member_id,
            MemberCommand::SelectSource {
                source: target.source.clone(),
            },
        );
    }
    outcome
}

/// Set the volume on every known member that supports it
///
/// Levels are clamped to `[0, 1]`; a non-finite level is logged and ignored.
pub fn set_volume_level(roster: &Roster, sink: &dyn CommandSink, level: f64) -> DispatchOutcome {
    if !level.is_finite() {
        error!("Invalid volume level: {}", level);
        return DispatchOutcome::default();
    }
    let level = level.clamp(0.0, 1.0);

    broadcast(roster, sink, MemberFeatures::VOLUME_SET, || {
        MemberCommand::SetVolume { level }
    })
}

/// Mute or unmute every known member that supports it
pub fn mute_volume(roster: &Roster, sink: &dyn CommandSink, muted: bool) -> DispatchOutcome {
    broadcast(roster, sink, MemberFeatures::VOLUME_MUTE, || {
        MemberCommand::SetMute { muted }
    })
}

fn broadcast<F>(
    roster: &Roster,
    sink: &dyn CommandSink,
    feature: MemberFeatures,
    command: F,
) -> DispatchOutcome
where
    F: Fn() -> MemberCommand,
{
    let mut outcome = DispatchOutcome::default();
    for status in roster.known().filter(|s| s.supports(feature)) {
        outcome.record(sink, &status.id, command());
    }
    outcome
}

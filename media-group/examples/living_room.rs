//! Living Room Group Example
//!
//! Builds a group out of a TV and an AV receiver held in an in-memory
//! member store, then walks through source merging, status updates and
//! command fan-out. Commands are applied back to the store the way a real
//! host would report the members' new state.
//!
//! Run with: `MEDIA_GROUP_LOG_MODE=development cargo run -p media-group --example living_room`

use std::sync::Arc;

use media_group::{
    init_logging_from_env, GroupConfig, MediaGroup, MemberCommand, RecordingSink,
};
use member_store::{MemberFeatures, MemberId, MemberStatus, MemberStore, PlayerState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging_from_env()?;

    println!("Living Room Media Group");
    println!("=======================\n");

    let store = MemberStore::new();
    let features =
        MemberFeatures::SELECT_SOURCE | MemberFeatures::VOLUME_SET | MemberFeatures::VOLUME_MUTE;

    store.set(
        MemberStatus::new("media_player.tv", PlayerState::On)
            .with_name("TV")
            .with_sources(["HDMI1", "HDMI2", "Netflix"])
            .with_source("HDMI1")
            .with_volume(0.2)
            .with_features(features),
    );
    store.set(
        MemberStatus::new("media_player.receiver", PlayerState::Playing)
            .with_name("Receiver")
            .with_sources(["HDMI1", "HDMI2", "Phono"])
            .with_source("HDMI1")
            .with_volume(0.6)
            .with_muted(false)
            .with_features(features),
    );

    let sink = Arc::new(RecordingSink::new());
    let config = GroupConfig::new(
        "Living Room",
        ["media_player.tv", "media_player.receiver"],
    );
    let mut group = MediaGroup::new(config, Arc::new(store.clone()), sink.clone())?;

    print_group(&group);

    // Switch everything to the record player
    println!("Selecting 'Receiver - Phono'...");
    group.select_source("Receiver - Phono");
    apply_commands(&store, &sink);
    pump(&store, &mut group);
    print_group(&group);

    // Unknown names are logged and ignored
    let outcome = group.select_source("Cassette");
    println!("Selecting 'Cassette' sent {} command(s)\n", outcome.attempted());

    // TV drops off the network
    println!("TV becomes unavailable...");
    store.update(&MemberId::new("media_player.tv"), |status| {
        status.state = PlayerState::Unavailable;
    });
    pump(&store, &mut group);
    print_group(&group);

    println!("Setting volume to 0.4 and muting...");
    group.set_volume_level(0.4);
    group.mute_volume(true);
    apply_commands(&store, &sink);
    pump(&store, &mut group);
    print_group(&group);

    println!("Published state:\n{}", group.snapshot().to_json()?);

    Ok(())
}

/// Feed pending change events into the group
fn pump(store: &MemberStore, group: &mut MediaGroup) {
    let events: Vec<_> = store.iter().try_iter().collect();
    if group.handle_changes(&events) {
        println!("  ({} change(s) processed)", events.len());
    }
}

/// Pretend to be the members acting on the commands they received
fn apply_commands(store: &MemberStore, sink: &RecordingSink) {
    for (id, command) in sink.take() {
        println!("  -> {} {:?}", id, command);
        store.update(&id, |status| match command {
            MemberCommand::SelectSource { source } => status.source = Some(source),
            MemberCommand::SetVolume { level } => status.volume_level = Some(level),
            MemberCommand::SetMute { muted } => status.is_volume_muted = Some(muted),
        });
    }
}

fn print_group(group: &MediaGroup) {
    println!("{} ({})", group.name(), group.unique_id());
    println!("  available: {}", group.available());
    println!("  sources:   {:?}", group.source_list());
    println!("  source:    {:?}", group.source());
    println!("  volume:    {:?}", group.volume_level());
    println!("  muted:     {:?}", group.is_volume_muted());
    println!();
}

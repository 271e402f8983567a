// SPDX-License-Identifier: MPL-2.0
use playback_controller::config::{self, Config};
use playback_controller::player::{
    FileProgressStore, MediaCommand, MediaCommandSender, MediaEvent, ProgressStore,
    WatchProgressTracker,
};
use playback_controller::{
    Gesture, InputProfile, MediaId, PlaybackController, PlaybackState, PlayerKey,
};
use std::time::{Duration, Instant};
use tempfile::tempdir;
use tokio::sync::mpsc::UnboundedReceiver;

fn mounted_controller(profile: InputProfile) -> (PlaybackController, UnboundedReceiver<MediaCommand>) {
    let mut controller = PlaybackController::with_profile(
        MediaId::new("series-3-ep-7"),
        "https://cdn.example/series-3/ep-7.m3u8",
        profile,
    );
    let (sender, commands) = MediaCommandSender::channel();
    controller.set_command_sender(sender);
    (controller, commands)
}

fn drain(rx: &mut UnboundedReceiver<MediaCommand>) -> Vec<MediaCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

#[test]
fn full_session_from_mount_to_teardown() {
    let (mut controller, mut commands) = mounted_controller(InputProfile::Desktop);

    controller.load();
    assert_eq!(controller.state(), &PlaybackState::Loading);

    controller.play();
    controller.handle_event(MediaEvent::LoadedMetadata {
        duration_secs: 2700.0,
    });
    controller.handle_event(MediaEvent::CanPlay);
    assert!(controller.state().is_playing());

    controller.handle_event(MediaEvent::Progress {
        buffered_end_secs: 300.0,
    });
    controller.handle_event(MediaEvent::TimeUpdate {
        position_secs: 125.0,
    });
    assert_eq!(
        controller.session().progress_percent().map(f64::round),
        Some(5.0)
    );

    controller.handle_event(MediaEvent::Ended);
    assert!(controller.state().is_paused());
    assert!(controller.at_end_of_media());

    controller.teardown();
    assert!(!controller.has_command_sender());

    let sent = drain(&mut commands);
    assert_eq!(
        sent.first(),
        Some(&MediaCommand::Load {
            source_url: "https://cdn.example/series-3/ep-7.m3u8".to_string()
        })
    );
}

#[test]
fn volume_and_mute_invariants_hold_across_a_session() {
    let (mut controller, _commands) = mounted_controller(InputProfile::Desktop);
    controller.load();
    controller.handle_event(MediaEvent::LoadedMetadata {
        duration_secs: 2700.0,
    });
    controller.handle_event(MediaEvent::CanPlay);

    // Zero volume always implies muted; audible volume always unmutes.
    for volume in [0u8, 1, 35, 0, 100] {
        controller.set_volume(volume);
        assert_eq!(controller.session().muted, volume == 0);
        assert_eq!(controller.session().volume.percent(), volume);
    }

    // A mute round trip never disturbs the stored level.
    controller.set_volume(72);
    controller.toggle_mute();
    controller.toggle_mute();
    assert!(!controller.session().muted);
    assert_eq!(controller.session().volume.percent(), 72);
}

#[test]
fn seek_to_percent_waits_for_metadata_then_lands_at_half() {
    let (mut controller, _commands) = mounted_controller(InputProfile::Desktop);
    controller.load();

    controller.seek_to_percent(50.0);
    assert!((controller.session().current_time - 0.0).abs() < 1e-9);

    controller.handle_event(MediaEvent::LoadedMetadata {
        duration_secs: 120.0,
    });
    controller.seek_to_percent(50.0);
    assert!((controller.session().current_time - 60.0).abs() < 1e-9);
}

#[test]
fn skip_never_leaves_media_bounds() {
    let (mut controller, _commands) = mounted_controller(InputProfile::Desktop);
    controller.load();
    controller.handle_event(MediaEvent::LoadedMetadata {
        duration_secs: 90.0,
    });
    controller.handle_event(MediaEvent::CanPlay);
    controller.handle_event(MediaEvent::Progress {
        buffered_end_secs: 90.0,
    });

    controller.skip(-1000.0);
    assert!(controller.session().current_time >= 0.0);

    controller.skip(1000.0);
    assert!(controller.session().current_time <= 90.0);
}

#[test]
fn raw_touch_double_tap_toggles_fullscreen_exactly_once() {
    let (mut controller, mut commands) = mounted_controller(InputProfile::Touch);
    controller.load();
    controller.handle_event(MediaEvent::LoadedMetadata {
        duration_secs: 2700.0,
    });
    controller.handle_event(MediaEvent::CanPlay);
    drain(&mut commands);

    // Two quick taps at the same spot, fed in as raw touch points.
    let t0 = Instant::now();
    controller.touch_start(t0, 100.0, 100.0);
    controller.touch_end(t0 + Duration::from_millis(40), 102.0, 101.0);
    controller.touch_start(t0 + Duration::from_millis(200), 100.0, 100.0);
    controller.touch_end(t0 + Duration::from_millis(240), 101.0, 99.0);

    let fullscreen_requests = drain(&mut commands)
        .into_iter()
        .filter(|command| matches!(command, MediaCommand::EnterFullscreen))
        .count();
    assert_eq!(fullscreen_requests, 1);
}

#[test]
fn errored_session_stays_errored_through_every_operation() {
    let (mut controller, _commands) = mounted_controller(InputProfile::Desktop);
    controller.load();
    controller.handle_event(MediaEvent::LoadedMetadata {
        duration_secs: 2700.0,
    });
    controller.handle_event(MediaEvent::CanPlay);

    controller.handle_event(MediaEvent::from_error_code(2, "network request failed"));
    assert!(controller.state().is_errored());
    assert_eq!(
        controller.session().error().map(|error| error.ui_key()),
        Some("error-media-network")
    );

    controller.play();
    controller.pause();
    controller.toggle_play_pause();
    controller.seek_to_percent(25.0);
    controller.skip(30.0);
    assert!(controller.state().is_errored());
}

#[test]
fn desktop_controls_hide_after_three_seconds_of_inactivity() {
    let (mut controller, _commands) = mounted_controller(InputProfile::Desktop);
    controller.load();
    controller.play();
    controller.handle_event(MediaEvent::LoadedMetadata {
        duration_secs: 2700.0,
    });
    controller.handle_event(MediaEvent::CanPlay);

    let t0 = Instant::now();
    controller.handle_pointer_activity(t0);
    controller.tick(t0 + Duration::from_millis(2999));
    assert!(controller.session().controls_visible);

    controller.tick(t0 + Duration::from_millis(3000));
    assert!(!controller.session().controls_visible);

    controller.handle_pointer_activity(t0 + Duration::from_millis(3001));
    assert!(controller.session().controls_visible);
}

#[test]
fn watch_progress_respects_minimum_watched_threshold() {
    let dir = tempdir().expect("failed to create temporary directory");
    let store_path = dir.path().join("watch_progress.toml");
    let mut store = FileProgressStore::open(&store_path).expect("failed to open progress store");
    let mut tracker = WatchProgressTracker::new();
    let media_id = MediaId::new("series-3-ep-7");

    let t0 = Instant::now();
    // Below the 30 s threshold nothing is persisted.
    assert!(!tracker.sample(t0, true, &media_id, 20.0, &mut store));
    assert!(store.get(&media_id).is_none());

    // Past the threshold and the sampling interval, the position lands.
    let t1 = t0 + Duration::from_secs(10);
    assert!(tracker.sample(t1, true, &media_id, 45.0, &mut store));
    assert_eq!(store.get(&media_id), Some(45.0));

    // The write survives a store reopen.
    let reopened = FileProgressStore::open(&store_path).expect("failed to reopen progress store");
    assert_eq!(reopened.get(&media_id), Some(45.0));
}

#[test]
fn buffering_while_playing_resumes_playing_after_canplay() {
    let (mut controller, _commands) = mounted_controller(InputProfile::Desktop);
    controller.load();
    controller.play();
    controller.handle_event(MediaEvent::LoadedMetadata {
        duration_secs: 2700.0,
    });
    controller.handle_event(MediaEvent::CanPlay);
    assert!(controller.state().is_playing());

    controller.handle_event(MediaEvent::Waiting);
    assert_eq!(
        controller.state(),
        &PlaybackState::Buffering {
            resume_playing: true
        }
    );

    controller.handle_event(MediaEvent::CanPlay);
    assert!(controller.state().is_playing());
}

#[test]
fn keyboard_drives_a_desktop_session_end_to_end() {
    let (mut controller, mut commands) = mounted_controller(InputProfile::Desktop);
    controller.load();
    controller.play();
    controller.handle_event(MediaEvent::LoadedMetadata {
        duration_secs: 2700.0,
    });
    controller.handle_event(MediaEvent::CanPlay);
    controller.handle_event(MediaEvent::Progress {
        buffered_end_secs: 2700.0,
    });
    drain(&mut commands);

    let t0 = Instant::now();
    controller.handle_key(PlayerKey::ArrowRight, t0);
    assert!((controller.session().current_time - 10.0).abs() < 1e-9);

    // A repeat inside the debounce window is swallowed.
    controller.handle_key(PlayerKey::ArrowRight, t0 + Duration::from_millis(100));
    assert!((controller.session().current_time - 10.0).abs() < 1e-9);

    controller.handle_key(PlayerKey::KeyF, t0 + Duration::from_millis(300));
    controller.handle_event(MediaEvent::FullscreenChanged { fullscreen: true });
    assert!(controller.session().fullscreen);

    controller.handle_key(PlayerKey::Escape, t0 + Duration::from_millis(600));
    let sent = drain(&mut commands);
    assert!(sent.contains(&MediaCommand::EnterFullscreen));
    assert_eq!(sent.last(), Some(&MediaCommand::ExitFullscreen));
}

#[test]
fn persisted_preferences_shape_a_new_session() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    let preferences = Config {
        volume: Some(25),
        muted: Some(false),
        resume_playback: Some(true),
        inactivity_timeout_ms: Some(1500),
        touch_inactivity_timeout_ms: None,
    };
    config::save_to_path(&preferences, &config_path).expect("failed to save preferences");

    let loaded = config::load_from_path(&config_path).expect("failed to load preferences");
    let (mut controller, _commands) = mounted_controller(InputProfile::Desktop);
    controller.apply_config(&loaded);
    controller.load();
    controller.play();
    controller.handle_event(MediaEvent::LoadedMetadata {
        duration_secs: 2700.0,
    });
    controller.handle_event(MediaEvent::CanPlay);

    assert_eq!(controller.session().volume.percent(), 25);

    // The shortened timeout from the preferences is in effect.
    let t0 = Instant::now();
    controller.handle_pointer_activity(t0);
    controller.tick(t0 + Duration::from_millis(1500));
    assert!(!controller.session().controls_visible);
}

#[test]
fn tap_summons_hidden_controls_without_pausing() {
    let (mut controller, _commands) = mounted_controller(InputProfile::Touch);
    controller.load();
    controller.play();
    controller.handle_event(MediaEvent::LoadedMetadata {
        duration_secs: 2700.0,
    });
    controller.handle_event(MediaEvent::CanPlay);

    let t0 = Instant::now();
    controller.handle_pointer_activity(t0);
    controller.tick(t0 + Duration::from_secs(30));
    assert!(!controller.session().controls_visible);

    controller.handle_gesture(Gesture::Tap, t0 + Duration::from_secs(30));
    assert!(controller.session().controls_visible);
    assert!(controller.state().is_playing());
}

// SPDX-License-Identifier: MPL-2.0
//! Playback state machine for the streaming player.
//!
//! Manages the lifecycle of one playback session with clear state transitions:
//! - Idle: session created, source not yet attached
//! - Loading: source attached, waiting for metadata/first data
//! - Playing: media is advancing
//! - Paused: stopped at the current position (also end-of-media)
//! - Buffering: stalled waiting for data, remembers what to resume to
//! - Errored: fatal media error, terminal for the session

use crate::config::{END_OF_MEDIA_TOLERANCE_SECS, GESTURE_SEEK_SECS};
use crate::error::MediaError;
use crate::input::{
    ControlsVisibility, Gesture, GestureRecognizer, InputProfile, KeyboardMap, PlayerAction,
    PlayerKey, SeekDirection,
};
use crate::player::command::{MediaCommand, MediaCommandSender};
use crate::player::events::MediaEvent;
use crate::player::progress::{ProgressStore, WatchProgressTracker};
use crate::player::volume::Volume;
use crate::session::{MediaId, PlaybackSession};
use crate::Config;
use std::time::Instant;

/// Playback state machine.
///
/// This enum represents all possible states of a playback session,
/// ensuring type-safe state transitions via pattern matching.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackState {
    /// Session created, media source not yet attached.
    Idle,

    /// Source attached, preload in progress.
    Loading,

    /// Media is currently playing.
    Playing,

    /// Playback stopped at the current position.
    /// End-of-media is represented as Paused at `current_time == duration`.
    Paused,

    /// Playback stalled waiting for data. Remembers whether playback
    /// should resume once enough data arrives.
    Buffering { resume_playing: bool },

    /// A fatal media error occurred. Terminal: only session replacement
    /// leaves this state.
    Errored(MediaError),
}

impl PlaybackState {
    /// Returns true if media is actually advancing.
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if playback is paused.
    pub fn is_paused(&self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if playback has stalled waiting for data.
    pub fn is_buffering(&self) -> bool {
        matches!(self, Self::Buffering { .. })
    }

    /// Returns true if the session hit a fatal error.
    pub fn is_errored(&self) -> bool {
        matches!(self, Self::Errored(_))
    }

    /// Returns the error if in the errored state.
    pub fn error(&self) -> Option<&MediaError> {
        match self {
            Self::Errored(error) => Some(error),
            _ => None,
        }
    }

    /// Returns true if playback is running or will resume on its own.
    ///
    /// This is the "logical playing intent" used by toggle and seek:
    /// a buffering session that was playing still counts as playing.
    pub fn is_playing_or_will_resume(&self) -> bool {
        match self {
            Self::Playing => true,
            Self::Buffering { resume_playing } => *resume_playing,
            _ => false,
        }
    }
}

/// Controller owning one playback session.
///
/// All media-side effects go through the command channel; all native
/// signals come back in as [`MediaEvent`]s. Every operation updates the
/// [`PlaybackSession`] snapshot synchronously so the presentation layer
/// can re-render right after calling it.
#[derive(Debug)]
pub struct PlaybackController {
    session: PlaybackSession,

    /// Command channel to the media host (set when the host mounts).
    commands: Option<MediaCommandSender>,

    profile: InputProfile,
    controls: ControlsVisibility,
    gestures: GestureRecognizer,
    keyboard: KeyboardMap,

    /// Whether to seek to the stored watch position once metadata is in.
    resume_enabled: bool,

    /// A play request was issued before the media could play; honored
    /// on the next `CanPlay`.
    pending_play: bool,

    /// Set when `Ended` is received, cleared by any seek or play start.
    /// The next play request restarts from the beginning.
    at_end_of_media: bool,
}

impl PlaybackController {
    /// Creates a controller for the given content on the desktop profile.
    ///
    /// The session starts in the Idle state; call [`load`] once the
    /// command sender is attached to begin preloading.
    ///
    /// [`load`]: PlaybackController::load
    #[must_use]
    pub fn new(media_id: MediaId, source_url: impl Into<String>) -> Self {
        Self::with_profile(media_id, source_url, InputProfile::Desktop)
    }

    /// Creates a controller for the given input profile.
    #[must_use]
    pub fn with_profile(
        media_id: MediaId,
        source_url: impl Into<String>,
        profile: InputProfile,
    ) -> Self {
        Self {
            session: PlaybackSession::new(media_id, source_url),
            commands: None,
            profile,
            controls: ControlsVisibility::new(profile.inactivity_timeout()),
            gestures: GestureRecognizer::new(),
            keyboard: KeyboardMap::new(),
            resume_enabled: true,
            pending_play: false,
            at_end_of_media: false,
        }
    }

    /// Applies persisted user preferences to the session.
    pub fn apply_config(&mut self, config: &Config) {
        if let Some(volume) = config.volume {
            self.session.volume = Volume::new(volume);
        }
        if let Some(muted) = config.muted {
            self.session.muted = muted;
        }
        if let Some(resume) = config.resume_playback {
            self.resume_enabled = resume;
        }
        let timeout_ms = match self.profile {
            InputProfile::Desktop => config.inactivity_timeout_ms,
            InputProfile::Touch => config.touch_inactivity_timeout_ms,
        };
        if let Some(ms) = timeout_ms {
            self.controls
                .set_timeout(crate::input::InactivityTimeout::new(ms));
        }
    }

    /// Sets the command sender for reaching the media host.
    /// Called when the host mounts the player.
    pub fn set_command_sender(&mut self, sender: MediaCommandSender) {
        self.commands = Some(sender);
    }

    /// Returns true if a media host is attached.
    pub fn has_command_sender(&self) -> bool {
        self.commands.is_some()
    }

    /// Returns the current session snapshot.
    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    /// Returns the current playback state.
    pub fn state(&self) -> &PlaybackState {
        &self.session.playback_state
    }

    /// Returns the input profile the controller was mounted with.
    pub fn input_profile(&self) -> InputProfile {
        self.profile
    }

    /// Returns true if the playhead sits at the end of the media.
    pub fn at_end_of_media(&self) -> bool {
        self.at_end_of_media
    }

    /// True when the playhead sits within tolerance of the duration.
    /// Covers hosts that report the final position without an `Ended`.
    fn playhead_at_end(&self) -> bool {
        match self.session.duration {
            Some(duration) => duration - self.session.current_time <= END_OF_MEDIA_TOLERANCE_SECS,
            None => false,
        }
    }

    fn send(&self, command: MediaCommand) {
        if let Some(sender) = &self.commands {
            sender.send(command);
        }
    }

    /// Attaches the media source and begins preloading.
    ///
    /// State transitions:
    /// - Idle → Loading
    /// - Any other state → no change (a session loads once)
    pub fn load(&mut self) {
        if self.session.playback_state != PlaybackState::Idle {
            return;
        }
        self.session.playback_state = PlaybackState::Loading;
        self.send(MediaCommand::Load {
            source_url: self.session.source_url().to_string(),
        });
    }

    /// Requests playback start.
    ///
    /// State transitions:
    /// - Paused → Playing (from the beginning if at end-of-media)
    /// - Buffering → Buffering with resume intent
    /// - Idle/Loading → unchanged, play intent honored on `CanPlay`
    /// - Playing → no change (idempotent)
    ///
    /// The transition out of Paused is optimistic; an autoplay-blocked
    /// rejection reported by the host reverts it silently.
    pub fn play(&mut self) {
        match self.session.playback_state {
            PlaybackState::Errored(_) | PlaybackState::Playing => return,
            PlaybackState::Paused => {
                if self.at_end_of_media || self.playhead_at_end() {
                    // Restart from the beginning instead of resuming a
                    // finished session.
                    self.seek_to(0.0);
                }
                self.at_end_of_media = false;
                self.session.playback_state = PlaybackState::Playing;
                self.send(MediaCommand::Play);
            }
            PlaybackState::Buffering { .. } => {
                self.session.playback_state = PlaybackState::Buffering {
                    resume_playing: true,
                };
                self.send(MediaCommand::Play);
            }
            PlaybackState::Idle => {
                self.pending_play = true;
            }
            PlaybackState::Loading => {
                self.pending_play = true;
                self.send(MediaCommand::Play);
            }
        }
    }

    /// Requests playback stop.
    ///
    /// State transitions:
    /// - Playing → Paused
    /// - Buffering with resume intent → Buffering without
    /// - Paused → no change (idempotent)
    pub fn pause(&mut self) {
        self.pending_play = false;
        match self.session.playback_state {
            PlaybackState::Playing => {
                self.session.playback_state = PlaybackState::Paused;
                self.send(MediaCommand::Pause);
            }
            PlaybackState::Buffering {
                resume_playing: true,
            } => {
                self.session.playback_state = PlaybackState::Buffering {
                    resume_playing: false,
                };
                self.send(MediaCommand::Pause);
            }
            _ => {}
        }
    }

    /// Inverts the logical playing intent (not the raw buffering state).
    pub fn toggle_play_pause(&mut self) {
        if self.session.playback_state.is_playing_or_will_resume() || self.pending_play {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Seeks to the stored watch position for this content, if resume
    /// is enabled and a position exists. Call once metadata has loaded;
    /// the tracker guarantees the store is consulted at most once per
    /// session, so calling again is harmless.
    ///
    /// Returns the position seeked to, if any.
    pub fn resume_from<S: ProgressStore + ?Sized>(
        &mut self,
        tracker: &mut WatchProgressTracker,
        store: &S,
    ) -> Option<f64> {
        if !self.resume_enabled || self.session.duration.is_none() {
            return None;
        }
        let position = tracker.resume_position(self.session.media_id(), store)?;
        self.seek_to(position);
        Some(self.session.current_time)
    }

    /// Seeks to a percentage of the duration. No-op until metadata has
    /// loaded (duration unknown).
    pub fn seek_to_percent(&mut self, percent: f64) {
        let Some(duration) = self.session.duration else {
            return;
        };
        let percent = percent.clamp(0.0, 100.0);
        self.seek_to(percent / 100.0 * duration);
    }

    /// Skips forward or backward relative to the current position,
    /// clamped into `[0, duration]`. No-op until metadata has loaded.
    pub fn skip(&mut self, delta_secs: f64) {
        if self.session.duration.is_none() {
            return;
        }
        self.seek_to(self.session.current_time + delta_secs);
    }

    /// Seeks to an absolute position, clamped into `[0, duration]`.
    ///
    /// Seeking past the buffered end stalls playback, so the state
    /// enters Buffering carrying the resume intent of the state it
    /// left (Playing resumes, Paused stays paused).
    pub fn seek_to(&mut self, target_secs: f64) {
        if self.session.playback_state.is_errored() {
            return;
        }
        let Some(duration) = self.session.duration else {
            return;
        };

        let clamped = target_secs.clamp(0.0, duration);
        self.session.current_time = clamped;
        self.at_end_of_media = false;

        if clamped > self.session.buffered_end {
            let resume = self.session.playback_state.is_playing_or_will_resume();
            if matches!(
                self.session.playback_state,
                PlaybackState::Playing | PlaybackState::Paused | PlaybackState::Buffering { .. }
            ) {
                self.session.playback_state = PlaybackState::Buffering {
                    resume_playing: resume,
                };
            }
        }

        self.send(MediaCommand::Seek {
            position_secs: clamped,
        });
    }

    /// Sets the volume level in percent.
    ///
    /// Zero implies muted; any audible level clears the mute flag.
    pub fn set_volume(&mut self, percent: u8) {
        let volume = Volume::new(percent);
        self.session.volume = volume;
        let was_muted = self.session.muted;
        self.session.muted = volume.is_silent();

        self.send(MediaCommand::SetVolume {
            percent: volume.percent(),
        });
        if self.session.muted != was_muted {
            self.send(MediaCommand::SetMuted {
                muted: self.session.muted,
            });
        }
    }

    /// Raises the volume by one step.
    pub fn volume_up(&mut self) {
        self.set_volume(self.session.volume.increase().percent());
    }

    /// Lowers the volume by one step.
    pub fn volume_down(&mut self) {
        self.set_volume(self.session.volume.decrease().percent());
    }

    /// Flips the mute flag without altering the stored volume, so
    /// unmuting restores the prior numeric level.
    pub fn toggle_mute(&mut self) {
        self.session.muted = !self.session.muted;
        self.send(MediaCommand::SetMuted {
            muted: self.session.muted,
        });
    }

    /// Requests entering or leaving fullscreen on the player container.
    ///
    /// The session's `fullscreen` flag is not touched here; it follows
    /// the host's `FullscreenChanged` event, so it always reflects the
    /// actual document state rather than intent.
    pub fn toggle_fullscreen(&mut self) {
        if self.session.fullscreen {
            self.send(MediaCommand::ExitFullscreen);
        } else {
            self.send(MediaCommand::EnterFullscreen);
        }
    }

    /// Requests leaving fullscreen if currently active.
    pub fn exit_fullscreen(&mut self) {
        if self.session.fullscreen {
            self.send(MediaCommand::ExitFullscreen);
        }
    }

    /// Records pointer activity: controls show immediately and the
    /// inactivity timer restarts.
    pub fn handle_pointer_activity(&mut self, now: Instant) {
        self.controls.pointer_activity(now);
        self.session.controls_visible = true;
    }

    /// Periodic re-evaluation of time-derived state. The host calls
    /// this from its render tick; controls hide here once the pointer
    /// has been idle past the timeout while playing.
    pub fn tick(&mut self, now: Instant) {
        self.session.controls_visible = self
            .controls
            .evaluate(now, self.session.playback_state.is_playing());
    }

    /// Forwards a touch-start to the gesture recognizer.
    pub fn touch_start(&mut self, now: Instant, x: f32, y: f32) {
        self.gestures.touch_start(now, x, y);
    }

    /// Completes a touch sequence, applying whatever gesture it
    /// classified into.
    pub fn touch_end(&mut self, now: Instant, x: f32, y: f32) {
        if let Some(gesture) = self.gestures.touch_end(now, x, y) {
            self.handle_gesture(gesture, now);
        }
    }

    /// Applies a classified gesture.
    ///
    /// - Tap: summon controls when hidden; toggle play/pause when they
    ///   are already on screen.
    /// - Double-tap: toggle fullscreen.
    /// - Drag: skip ±10 s.
    pub fn handle_gesture(&mut self, gesture: Gesture, now: Instant) {
        match gesture {
            Gesture::Tap => {
                if self.session.controls_visible {
                    self.toggle_play_pause();
                }
                self.handle_pointer_activity(now);
            }
            Gesture::DoubleTap => {
                self.toggle_fullscreen();
                self.handle_pointer_activity(now);
            }
            Gesture::Drag(SeekDirection::Back) => self.skip(-GESTURE_SEEK_SECS),
            Gesture::Drag(SeekDirection::Forward) => self.skip(GESTURE_SEEK_SECS),
        }
    }

    /// Applies a keyboard shortcut. Disabled on touch profiles.
    pub fn handle_key(&mut self, key: PlayerKey, now: Instant) {
        if !self.profile.keyboard_enabled() {
            return;
        }
        let Some(action) = self
            .keyboard
            .action_for(key, now, self.session.fullscreen)
        else {
            return;
        };
        self.handle_pointer_activity(now);
        match action {
            PlayerAction::TogglePlayPause => self.toggle_play_pause(),
            PlayerAction::Skip { delta_secs } => self.skip(delta_secs),
            PlayerAction::VolumeUp => self.volume_up(),
            PlayerAction::VolumeDown => self.volume_down(),
            PlayerAction::ToggleMute => self.toggle_mute(),
            PlayerAction::ToggleFullscreen => self.toggle_fullscreen(),
            PlayerAction::ExitFullscreen => self.exit_fullscreen(),
            PlayerAction::Close => self.send(MediaCommand::Close),
        }
    }

    /// Consumes one media event from the host adapter.
    ///
    /// The Errored state is terminal: once entered, playback events no
    /// longer transition the session (fullscreen changes are still
    /// tracked, since that flag mirrors the actual document state).
    pub fn handle_event(&mut self, event: MediaEvent) {
        if let MediaEvent::FullscreenChanged { fullscreen } = event {
            self.session.fullscreen = fullscreen;
            return;
        }
        if self.session.playback_state.is_errored() {
            return;
        }

        match event {
            MediaEvent::LoadedMetadata { duration_secs } => {
                let duration = duration_secs.max(0.0);
                self.session.duration = Some(duration);
                self.session.current_time = self.session.current_time.clamp(0.0, duration);
            }
            MediaEvent::CanPlay => match self.session.playback_state {
                PlaybackState::Loading => {
                    self.session.playback_state = if self.pending_play {
                        PlaybackState::Playing
                    } else {
                        PlaybackState::Paused
                    };
                    self.pending_play = false;
                }
                PlaybackState::Buffering { resume_playing } => {
                    self.session.playback_state = if resume_playing {
                        PlaybackState::Playing
                    } else {
                        PlaybackState::Paused
                    };
                }
                _ => {}
            },
            MediaEvent::Playing => {
                self.session.playback_state = PlaybackState::Playing;
                self.pending_play = false;
                self.at_end_of_media = false;
            }
            MediaEvent::Paused => {
                self.pending_play = false;
                match self.session.playback_state {
                    PlaybackState::Playing => {
                        self.session.playback_state = PlaybackState::Paused;
                    }
                    PlaybackState::Buffering {
                        resume_playing: true,
                    } => {
                        self.session.playback_state = PlaybackState::Buffering {
                            resume_playing: false,
                        };
                    }
                    _ => {}
                }
            }
            MediaEvent::Waiting => match self.session.playback_state {
                PlaybackState::Playing => {
                    self.session.playback_state = PlaybackState::Buffering {
                        resume_playing: true,
                    };
                }
                PlaybackState::Paused => {
                    self.session.playback_state = PlaybackState::Buffering {
                        resume_playing: false,
                    };
                }
                _ => {}
            },
            MediaEvent::TimeUpdate { position_secs } => {
                let position = position_secs.max(0.0);
                self.session.current_time = match self.session.duration {
                    Some(duration) => position.min(duration),
                    None => position,
                };
            }
            MediaEvent::Progress { buffered_end_secs } => {
                // Monotonic within a session
                self.session.buffered_end = self.session.buffered_end.max(buffered_end_secs);
            }
            MediaEvent::Ended => {
                if let Some(duration) = self.session.duration {
                    self.session.current_time = duration;
                }
                self.session.playback_state = PlaybackState::Paused;
                self.at_end_of_media = true;
                self.session.controls_visible = true;
            }
            MediaEvent::AutoplayBlocked => {
                // Expected without a prior user gesture; swallow and
                // fall back to the paused/loading state.
                log::debug!("autoplay blocked for {}", self.session.media_id());
                self.pending_play = false;
                if self.session.playback_state.is_playing() {
                    self.session.playback_state = PlaybackState::Paused;
                }
            }
            MediaEvent::Error { error } => {
                log::warn!(
                    "media error for {}: {}",
                    self.session.media_id(),
                    error
                );
                self.session.playback_state = PlaybackState::Errored(error);
                self.session.controls_visible = true;
                self.pending_play = false;
            }
            MediaEvent::FullscreenChanged { .. } => unreachable!("handled above"),
        }
    }

    /// Tears the session down: drops the command channel and clears all
    /// timing state. The single exit point for a session, so no timer
    /// or listener state survives into the next one.
    pub fn teardown(&mut self) {
        self.commands = None;
        self.pending_play = false;
        self.at_end_of_media = false;
        self.controls.reset();
        self.gestures.reset();
        self.keyboard.reset();
    }
}

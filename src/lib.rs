// SPDX-License-Identifier: MPL-2.0
//! Client-side playback controller for a streaming application.
//!
//! This crate owns everything between the user's intent and the media
//! host: a playback state machine ([`PlaybackController`]), volume and
//! mute handling, fullscreen lifecycle, touch-gesture and keyboard
//! input, controls auto-hide, and watch-progress persistence.
//!
//! The controller is deliberately host-agnostic. All media-side effects
//! leave through a [`MediaCommand`] channel and all native signals come
//! back in as [`MediaEvent`]s, so the same state machine drives any
//! element or decoder adapter. Time-dependent behavior takes explicit
//! [`std::time::Instant`] values, keeping every transition deterministic
//! and testable without a running clock.
//!
//! # Examples
//!
//! ```
//! use playback_controller::{MediaEvent, MediaCommandSender, MediaId, PlaybackController};
//!
//! let mut controller = PlaybackController::new(
//!     MediaId::new("movie-1"),
//!     "https://cdn.example/movie-1.mp4",
//! );
//! let (sender, _commands) = MediaCommandSender::channel();
//! controller.set_command_sender(sender);
//!
//! controller.load();
//! controller.play();
//! controller.handle_event(MediaEvent::LoadedMetadata { duration_secs: 120.0 });
//! controller.handle_event(MediaEvent::CanPlay);
//! assert!(controller.state().is_playing());
//! ```

pub mod config;
pub mod error;
pub mod fullscreen;
pub mod input;
pub mod player;
pub mod session;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use error::{Error, MediaError, Result};
pub use input::{Gesture, InputProfile, PlayerAction, PlayerKey, SeekDirection};
pub use player::{
    FileProgressStore, MediaCommand, MediaCommandSender, MediaEvent, MemoryProgressStore,
    PlaybackController, PlaybackState, ProgressStore, Volume, WatchProgressTracker,
};
pub use session::{MediaId, PlaybackSession};

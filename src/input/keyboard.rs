// SPDX-License-Identifier: MPL-2.0
//! Desktop keyboard surface.
//!
//! Maps the player's keyboard shortcuts onto [`PlayerAction`]s. Seek
//! keys are debounced so key autorepeat does not flood the media
//! element with seek requests. The whole surface is disabled on touch
//! profiles.

use crate::config::{KEYBOARD_SEEK_DEBOUNCE_MS, KEYBOARD_SEEK_STEP_SECS};
use std::time::{Duration, Instant};

/// Keys the player reacts to. Anything else is left to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKey {
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    KeyM,
    KeyF,
    Escape,
}

/// Intent derived from a key press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    TogglePlayPause,
    Skip { delta_secs: f64 },
    VolumeUp,
    VolumeDown,
    ToggleMute,
    ToggleFullscreen,
    ExitFullscreen,
    Close,
}

/// Keyboard shortcut mapper with seek debouncing.
#[derive(Debug, Default)]
pub struct KeyboardMap {
    last_seek: Option<Instant>,
}

impl KeyboardMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates a key press into an action.
    ///
    /// `fullscreen_active` decides what Escape means: exit fullscreen
    /// when active, otherwise a close/back intent. Returns `None` for
    /// debounced seek repeats.
    pub fn action_for(
        &mut self,
        key: PlayerKey,
        now: Instant,
        fullscreen_active: bool,
    ) -> Option<PlayerAction> {
        match key {
            PlayerKey::Space => Some(PlayerAction::TogglePlayPause),
            PlayerKey::ArrowLeft => self
                .debounced_seek(now)
                .then_some(PlayerAction::Skip {
                    delta_secs: -KEYBOARD_SEEK_STEP_SECS,
                }),
            PlayerKey::ArrowRight => self
                .debounced_seek(now)
                .then_some(PlayerAction::Skip {
                    delta_secs: KEYBOARD_SEEK_STEP_SECS,
                }),
            PlayerKey::ArrowUp => Some(PlayerAction::VolumeUp),
            PlayerKey::ArrowDown => Some(PlayerAction::VolumeDown),
            PlayerKey::KeyM => Some(PlayerAction::ToggleMute),
            PlayerKey::KeyF => Some(PlayerAction::ToggleFullscreen),
            PlayerKey::Escape => {
                if fullscreen_active {
                    Some(PlayerAction::ExitFullscreen)
                } else {
                    Some(PlayerAction::Close)
                }
            }
        }
    }

    /// Clears debounce state (session teardown).
    pub fn reset(&mut self) {
        self.last_seek = None;
    }

    fn debounced_seek(&mut self, now: Instant) -> bool {
        let allowed = match self.last_seek {
            Some(last) => {
                now.duration_since(last) >= Duration::from_millis(KEYBOARD_SEEK_DEBOUNCE_MS)
            }
            None => true,
        };
        if allowed {
            self.last_seek = Some(now);
        }
        allowed
    }
}

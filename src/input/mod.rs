// SPDX-License-Identifier: MPL-2.0
//! Input surfaces for the player: touch gestures, desktop keyboard, and
//! pointer-activity driven controls visibility.

pub mod gesture;
pub mod keyboard;
pub mod pointer;

pub use gesture::{Gesture, GestureRecognizer, SeekDirection};
pub use keyboard::{KeyboardMap, PlayerAction, PlayerKey};
pub use pointer::{ControlsVisibility, InactivityTimeout};

/// Which input surface the player is mounted on.
///
/// Touch profiles use the longer auto-hide timeout and disable the
/// keyboard shortcut surface entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputProfile {
    #[default]
    Desktop,
    Touch,
}

impl InputProfile {
    /// Returns the controls auto-hide timeout for this profile.
    #[must_use]
    pub fn inactivity_timeout(self) -> InactivityTimeout {
        match self {
            InputProfile::Desktop => InactivityTimeout::default(),
            InputProfile::Touch => InactivityTimeout::touch(),
        }
    }

    /// Returns true if keyboard shortcuts are active on this profile.
    #[must_use]
    pub fn keyboard_enabled(self) -> bool {
        matches!(self, InputProfile::Desktop)
    }
}

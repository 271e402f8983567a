// SPDX-License-Identifier: MPL-2.0
//! Pointer-activity driven controls visibility.
//!
//! Controls hide only while playback is actually running and the pointer
//! has been idle past the timeout. Paused, buffering, and errored
//! sessions always keep the controls on screen.
//!
//! Time is passed in explicitly as an [`Instant`] so the evaluation is
//! deterministic; the host calls [`ControlsVisibility::evaluate`] from
//! its render tick with `Instant::now()`.

use crate::config::{
    DEFAULT_INACTIVITY_TIMEOUT_MS, MAX_INACTIVITY_TIMEOUT_MS, MIN_INACTIVITY_TIMEOUT_MS,
    TOUCH_INACTIVITY_TIMEOUT_MS,
};
use std::time::{Duration, Instant};

/// Controls auto-hide timeout in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1000–30000 ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityTimeout(u32);

impl InactivityTimeout {
    /// Creates a new timeout value, clamping to valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(MIN_INACTIVITY_TIMEOUT_MS, MAX_INACTIVITY_TIMEOUT_MS))
    }

    /// The default timeout for touch devices.
    #[must_use]
    pub fn touch() -> Self {
        Self::new(TOUCH_INACTIVITY_TIMEOUT_MS)
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for InactivityTimeout {
    fn default() -> Self {
        Self(DEFAULT_INACTIVITY_TIMEOUT_MS)
    }
}

/// Tracks pointer activity and derives whether controls should be shown.
#[derive(Debug, Clone)]
pub struct ControlsVisibility {
    timeout: InactivityTimeout,
    last_activity: Option<Instant>,
    visible: bool,
}

impl ControlsVisibility {
    #[must_use]
    pub fn new(timeout: InactivityTimeout) -> Self {
        Self {
            timeout,
            last_activity: None,
            visible: true,
        }
    }

    #[must_use]
    pub fn timeout(&self) -> InactivityTimeout {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: InactivityTimeout) {
        self.timeout = timeout;
    }

    /// Records pointer activity; controls become visible immediately.
    pub fn pointer_activity(&mut self, now: Instant) {
        self.last_activity = Some(now);
        self.visible = true;
    }

    /// Re-evaluates visibility. Hides the controls only when `playing`
    /// and the last activity is older than the timeout; any non-playing
    /// state forces them visible.
    pub fn evaluate(&mut self, now: Instant, playing: bool) -> bool {
        if !playing {
            self.visible = true;
        } else {
            self.visible = match self.last_activity {
                Some(at) => now.duration_since(at) < self.timeout.as_duration(),
                None => false,
            };
        }
        self.visible
    }

    /// Returns the result of the most recent evaluation.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Clears timing state (session teardown).
    pub fn reset(&mut self) {
        self.last_activity = None;
        self.visible = true;
    }
}

impl Default for ControlsVisibility {
    fn default() -> Self {
        Self::new(InactivityTimeout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_clamps_to_valid_range() {
        assert_eq!(InactivityTimeout::new(10).millis(), MIN_INACTIVITY_TIMEOUT_MS);
        assert_eq!(
            InactivityTimeout::new(60_000).millis(),
            MAX_INACTIVITY_TIMEOUT_MS
        );
        assert_eq!(InactivityTimeout::new(4000).millis(), 4000);
    }

    #[test]
    fn default_timeout_matches_desktop_profile() {
        assert_eq!(
            InactivityTimeout::default().millis(),
            DEFAULT_INACTIVITY_TIMEOUT_MS
        );
        assert_eq!(
            InactivityTimeout::touch().millis(),
            TOUCH_INACTIVITY_TIMEOUT_MS
        );
    }

    #[test]
    fn controls_stay_visible_while_paused() {
        let mut controls = ControlsVisibility::default();
        let t0 = Instant::now();

        controls.pointer_activity(t0);
        let later = t0 + Duration::from_secs(60);
        assert!(controls.evaluate(later, false));
    }

    #[test]
    fn controls_hide_after_timeout_while_playing() {
        let mut controls = ControlsVisibility::default();
        let t0 = Instant::now();

        controls.pointer_activity(t0);
        assert!(controls.evaluate(t0 + Duration::from_millis(2999), true));
        assert!(!controls.evaluate(t0 + Duration::from_millis(3000), true));
    }

    #[test]
    fn pointer_activity_shows_controls_immediately() {
        let mut controls = ControlsVisibility::default();
        let t0 = Instant::now();

        controls.pointer_activity(t0);
        let hidden_at = t0 + Duration::from_millis(4000);
        assert!(!controls.evaluate(hidden_at, true));

        controls.pointer_activity(hidden_at);
        assert!(controls.is_visible());
        assert!(controls.evaluate(hidden_at, true));
    }

    #[test]
    fn no_activity_while_playing_hides_controls() {
        let mut controls = ControlsVisibility::default();
        assert!(!controls.evaluate(Instant::now(), true));
    }

    #[test]
    fn touch_timeout_extends_hide_delay() {
        let mut controls = ControlsVisibility::new(InactivityTimeout::touch());
        let t0 = Instant::now();

        controls.pointer_activity(t0);
        assert!(controls.evaluate(t0 + Duration::from_millis(4500), true));
        assert!(!controls.evaluate(t0 + Duration::from_millis(5000), true));
    }

    #[test]
    fn reset_clears_activity_and_shows_controls() {
        let mut controls = ControlsVisibility::default();
        let t0 = Instant::now();
        controls.pointer_activity(t0);
        controls.evaluate(t0 + Duration::from_secs(10), true);
        assert!(!controls.is_visible());

        controls.reset();
        assert!(controls.is_visible());
    }
}

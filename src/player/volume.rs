// SPDX-License-Identifier: MPL-2.0
//! Volume domain type for audio playback.
//!
//! This module provides a type-safe wrapper for volume values,
//! ensuring they are always within the valid range (0–100 percent).

use crate::config::{
    DEFAULT_VOLUME_PERCENT, MAX_VOLUME_PERCENT, MIN_VOLUME_PERCENT, VOLUME_STEP_PERCENT,
};

/// Volume level in percent, guaranteed to be within 0–100.
///
/// This newtype enforces validity at the type level, making it impossible
/// to create an out-of-range volume value. The mute flag lives on the
/// session, not here, so a muted player keeps its numeric level and
/// unmuting restores it.
///
/// # Example
///
/// ```
/// use playback_controller::player::Volume;
///
/// let vol = Volume::new(50);
/// assert_eq!(vol.percent(), 50);
///
/// // Values outside range are clamped
/// let too_loud = Volume::new(160);
/// assert_eq!(too_loud.percent(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume(u8);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.clamp(MIN_VOLUME_PERCENT, MAX_VOLUME_PERCENT))
    }

    /// Returns the volume as a percentage (0–100).
    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Returns the volume as a fraction (0.0–1.0) for media backends
    /// that take normalized gain.
    #[must_use]
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Returns true if the level itself is silent.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 == 0
    }

    /// Increases volume by one step, clamping to maximum.
    #[must_use]
    pub fn increase(self) -> Self {
        Self::new(self.0.saturating_add(VOLUME_STEP_PERCENT))
    }

    /// Decreases volume by one step, clamping to minimum.
    #[must_use]
    pub fn decrease(self) -> Self {
        Self::new(self.0.saturating_sub(VOLUME_STEP_PERCENT))
    }

    /// Returns true if this is the minimum volume.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_VOLUME_PERCENT
    }

    /// Returns true if this is the maximum volume.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_VOLUME_PERCENT
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME_PERCENT)
    }
}

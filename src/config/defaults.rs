// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Audio volume range and keyboard step
//! - **Controls**: Inactivity auto-hide timeouts per input profile
//! - **Gestures**: Tap/double-tap/drag classification thresholds
//! - **Keyboard**: Seek step and debounce
//! - **Watch Progress**: Sampling interval, write guard, store capacity
//! - **Playback**: End-of-media detection tolerance

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume in percent.
pub const DEFAULT_VOLUME_PERCENT: u8 = 80;

/// Minimum volume level in percent.
pub const MIN_VOLUME_PERCENT: u8 = 0;

/// Maximum volume level in percent.
pub const MAX_VOLUME_PERCENT: u8 = 100;

/// Volume adjustment step per key press (5%).
pub const VOLUME_STEP_PERCENT: u8 = 5;

// ==========================================================================
// Controls Auto-Hide Defaults
// ==========================================================================

/// Inactivity timeout before controls hide on desktop (milliseconds).
pub const DEFAULT_INACTIVITY_TIMEOUT_MS: u32 = 3000;

/// Inactivity timeout before controls hide on touch devices (milliseconds).
/// Longer than desktop because touch targets take more time to re-summon.
pub const TOUCH_INACTIVITY_TIMEOUT_MS: u32 = 5000;

/// Minimum allowed inactivity timeout (milliseconds).
pub const MIN_INACTIVITY_TIMEOUT_MS: u32 = 1000;

/// Maximum allowed inactivity timeout (milliseconds).
pub const MAX_INACTIVITY_TIMEOUT_MS: u32 = 30_000;

// ==========================================================================
// Gesture Classification Defaults
// ==========================================================================

/// Maximum interval between two taps to count as a double-tap (milliseconds).
pub const DOUBLE_TAP_WINDOW_MS: u64 = 500;

/// Minimum horizontal travel for a touch sequence to classify as a
/// seek drag instead of a tap (logical pixels).
pub const DRAG_MIN_DISTANCE_PX: f32 = 50.0;

/// Maximum duration of a seek drag (milliseconds). Slower horizontal
/// movement is treated as scrubbing-intent-free and ignored.
pub const DRAG_MAX_DURATION_MS: u64 = 500;

/// Seconds skipped by one seek drag (left = back, right = forward).
pub const GESTURE_SEEK_SECS: f64 = 10.0;

// ==========================================================================
// Keyboard Defaults
// ==========================================================================

/// Seconds skipped by one ArrowLeft/ArrowRight press.
pub const KEYBOARD_SEEK_STEP_SECS: f64 = 10.0;

/// Debounce between keyboard-initiated seeks (milliseconds), so key
/// autorepeat does not flood the media element with seek requests.
pub const KEYBOARD_SEEK_DEBOUNCE_MS: u64 = 200;

// ==========================================================================
// Watch Progress Defaults
// ==========================================================================

/// Wall-clock interval between progress samples while playing (seconds).
pub const PROGRESS_SAMPLE_INTERVAL_SECS: u64 = 10;

/// Minimum watched position before progress is persisted (seconds).
/// Avoids recording trivial or accidental plays.
pub const MIN_WATCHED_SECS: f64 = 30.0;

/// Maximum entries retained by the file-backed progress store.
/// Oldest writes are evicted first once the cap is reached.
pub const MAX_PROGRESS_ENTRIES: usize = 500;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Tolerance when deciding whether the playhead sits at the end of the
/// media (seconds). Native position reports rarely land exactly on the
/// duration value.
pub const END_OF_MEDIA_TOLERANCE_SECS: f64 = 0.1;

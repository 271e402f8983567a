// SPDX-License-Identifier: MPL-2.0
//! Touch gesture classification for the player surface.
//!
//! Raw touch-start/touch-end pairs are classified into domain gestures:
//!
//! - **Tap**: short touch without significant travel.
//! - **DoubleTap**: second tap within the double-tap window.
//! - **Drag**: fast horizontal travel past the distance threshold,
//!   interpreted as a seek (left = back, right = forward).
//!
//! A drag takes precedence over tap classification for its touch
//! sequence and also cancels any pending double-tap pairing, so a
//! swipe after a tap never registers as a double-tap.

use crate::config::{DOUBLE_TAP_WINDOW_MS, DRAG_MAX_DURATION_MS, DRAG_MIN_DISTANCE_PX};
use std::time::{Duration, Instant};

/// Direction of a seek drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    Back,
    Forward,
}

/// A classified touch interaction, distinct from the raw touch events
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Tap,
    DoubleTap,
    Drag(SeekDirection),
}

#[derive(Debug, Clone, Copy)]
struct TouchStart {
    at: Instant,
    x: f32,
    y: f32,
}

/// Stateful classifier fed with touch-start/touch-end pairs.
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    active_touch: Option<TouchStart>,
    last_tap: Option<Instant>,
}

impl GestureRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the start of a touch sequence.
    pub fn touch_start(&mut self, now: Instant, x: f32, y: f32) {
        self.active_touch = Some(TouchStart { at: now, x, y });
    }

    /// Completes a touch sequence and returns the classified gesture,
    /// if any. Returns `None` when no matching touch-start was seen or
    /// the movement fits neither tap nor drag.
    pub fn touch_end(&mut self, now: Instant, x: f32, y: f32) -> Option<Gesture> {
        let start = self.active_touch.take()?;
        let dx = x - start.x;
        let dy = y - start.y;
        let elapsed = now.duration_since(start.at);

        // Drag wins over tap classification for this sequence.
        if dx.abs() >= DRAG_MIN_DISTANCE_PX
            && dx.abs() > dy.abs()
            && elapsed < Duration::from_millis(DRAG_MAX_DURATION_MS)
        {
            self.last_tap = None;
            let direction = if dx < 0.0 {
                SeekDirection::Back
            } else {
                SeekDirection::Forward
            };
            return Some(Gesture::Drag(direction));
        }

        // Significant travel that does not qualify as a drag is not a tap.
        if dx.abs() >= DRAG_MIN_DISTANCE_PX || dy.abs() >= DRAG_MIN_DISTANCE_PX {
            self.last_tap = None;
            return None;
        }

        match self.last_tap {
            Some(previous)
                if now.duration_since(previous)
                    <= Duration::from_millis(DOUBLE_TAP_WINDOW_MS) =>
            {
                // Consume the pairing so a third tap starts over and a
                // double-tap fires exactly once.
                self.last_tap = None;
                Some(Gesture::DoubleTap)
            }
            _ => {
                self.last_tap = Some(now);
                Some(Gesture::Tap)
            }
        }
    }

    /// Clears in-flight touch state (session teardown).
    pub fn reset(&mut self) {
        self.active_touch = None;
        self.last_tap = None;
    }
}

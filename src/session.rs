// SPDX-License-Identifier: MPL-2.0
//! Playback session snapshot.
//!
//! A [`PlaybackSession`] is one attachment of the controller to a single
//! media source. The controller keeps it synchronously up to date so the
//! presentation layer can re-render from it after every operation or
//! media event, without reaching into the media element itself.

use crate::error::MediaError;
use crate::player::{PlaybackState, Volume};
use std::fmt;

/// Opaque identifier of a piece of content.
///
/// The controller never interprets it; it only keys watch-progress
/// entries and distinguishes one session from the next.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaId(String);

impl MediaId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Externally observable state of one playback session.
///
/// `media_id` and `source_url` are immutable for the session's life.
/// Everything else is derived from operations and media events.
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    media_id: MediaId,
    source_url: String,

    /// Current playhead position in seconds.
    pub current_time: f64,

    /// Media duration in seconds; `None` until metadata has loaded.
    pub duration: Option<f64>,

    /// Furthest buffered time in seconds, monotonic within a session.
    pub buffered_end: f64,

    /// Stored volume level; independent from `muted` so that unmuting
    /// restores the prior numeric level.
    pub volume: Volume,
    pub muted: bool,

    pub playback_state: PlaybackState,

    /// Reflects the actual fullscreen element, not intent.
    pub fullscreen: bool,

    /// Whether the control overlay is currently shown. Decoupled from
    /// `playback_state`: hidden only while playing with no recent
    /// pointer activity.
    pub controls_visible: bool,
}

impl PlaybackSession {
    /// Creates a fresh session for the given content in the `Idle` state.
    #[must_use]
    pub fn new(media_id: MediaId, source_url: impl Into<String>) -> Self {
        Self {
            media_id,
            source_url: source_url.into(),
            current_time: 0.0,
            duration: None,
            buffered_end: 0.0,
            volume: Volume::default(),
            muted: false,
            playback_state: PlaybackState::Idle,
            fullscreen: false,
            controls_visible: true,
        }
    }

    #[must_use]
    pub fn media_id(&self) -> &MediaId {
        &self.media_id
    }

    #[must_use]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Returns playback progress as a percentage, once duration is known.
    #[must_use]
    pub fn progress_percent(&self) -> Option<f64> {
        match self.duration {
            Some(duration) if duration > 0.0 => {
                Some((self.current_time / duration * 100.0).clamp(0.0, 100.0))
            }
            _ => None,
        }
    }

    /// Returns the error carried by the `Errored` state, if any.
    #[must_use]
    pub fn error(&self) -> Option<&MediaError> {
        self.playback_state.error()
    }
}

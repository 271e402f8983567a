// SPDX-License-Identifier: MPL-2.0
//! Domain events produced by the media host adapter.
//!
//! The host listens to the native media element (and to the document's
//! fullscreen-change events, for every vendor prefix) and translates
//! each native signal into one of these tagged variants. The controller
//! consumes them without ever seeing a raw DOM event, which keeps the
//! state machine testable without a browser.

use crate::error::MediaError;

/// Events sent from the media host to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Metadata loaded; duration is now known.
    LoadedMetadata { duration_secs: f64 },

    /// Enough data is available to start or resume playback.
    CanPlay,

    /// Playback actually started (post-play-request confirmation).
    Playing,

    /// Playback stopped at the host's initiative (e.g. OS media keys).
    Paused,

    /// Playback stalled waiting for data.
    Waiting,

    /// The playhead moved.
    TimeUpdate { position_secs: f64 },

    /// More data was buffered; carries the furthest buffered time.
    Progress { buffered_end_secs: f64 },

    /// Playback reached the end of the media.
    Ended,

    /// A play request was rejected because no user gesture preceded it.
    /// Expected and non-fatal; the controller swallows it.
    AutoplayBlocked,

    /// The document's fullscreen element changed.
    FullscreenChanged { fullscreen: bool },

    /// A native decode/network error. Fatal for the session.
    Error { error: MediaError },
}

impl MediaEvent {
    /// Convenience constructor translating a native error code and
    /// message into an `Error` event.
    #[must_use]
    pub fn from_error_code(code: u32, message: &str) -> Self {
        MediaEvent::Error {
            error: MediaError::from_code(code, message),
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Commands the controller issues toward the media host.
//!
//! The controller never touches the media element or the fullscreen API
//! directly. Every side effect is expressed as a [`MediaCommand`] pushed
//! through an unbounded channel; the host adapter drains the channel on
//! its event loop and applies each command to the real element.

use tokio::sync::mpsc;

/// Commands sent to the media host.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    /// Attach the source URL and begin preloading.
    Load { source_url: String },

    /// Request playback start. The host must swallow autoplay
    /// rejection and report it back as `MediaEvent::AutoplayBlocked`.
    Play,

    /// Request playback stop.
    Pause,

    /// Move the playhead to an absolute position in seconds.
    Seek { position_secs: f64 },

    /// Apply a volume level, in percent.
    SetVolume { percent: u8 },

    /// Apply the mute flag without changing the volume level.
    SetMuted { muted: bool },

    /// Enter fullscreen on the player container element.
    EnterFullscreen,

    /// Leave fullscreen.
    ExitFullscreen,

    /// Close/back intent (Escape outside fullscreen). The host decides
    /// what "closing the player" means.
    Close,
}

/// Cloneable handle for sending commands to the media host.
///
/// Sends are best-effort: once the host has torn the session down the
/// receiver is gone, and a command aimed at a dead session is dropped
/// with a debug log rather than surfaced as an error.
#[derive(Clone)]
pub struct MediaCommandSender {
    tx: mpsc::UnboundedSender<MediaCommand>,
}

impl MediaCommandSender {
    /// Creates a connected sender/receiver pair.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<MediaCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Sends a command to the media host.
    pub fn send(&self, command: MediaCommand) {
        if self.tx.send(command).is_err() {
            log::debug!("media host gone, dropping command");
        }
    }
}

impl std::fmt::Debug for MediaCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaCommandSender")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

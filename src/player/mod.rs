// SPDX-License-Identifier: MPL-2.0
//! Core playback machinery: the state machine, the command/event bridge
//! to the media host, volume handling, and watch-progress persistence.

pub mod command;
pub mod events;
pub mod progress;
pub mod state;
pub mod volume;

pub use command::{MediaCommand, MediaCommandSender};
pub use events::MediaEvent;
pub use progress::{FileProgressStore, MemoryProgressStore, ProgressStore, WatchProgressTracker};
pub use state::{PlaybackController, PlaybackState};
pub use volume::Volume;

/// Formats a position in seconds as `M:SS` or `H:MM:SS` for the timeline
/// readout. Negative and non-finite inputs render as zero.
#[must_use]
pub fn format_timestamp(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

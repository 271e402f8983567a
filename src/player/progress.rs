// SPDX-License-Identifier: MPL-2.0
//! Watch-progress persistence.
//!
//! Remembers the last playback position per content item so a new
//! session can resume where the viewer left off. The tracker samples
//! the playhead on a wall-clock interval while playing and only writes
//! once a minimum-watched threshold is passed, so trivial or accidental
//! plays never leave a resume point behind.

use crate::config::{MAX_PROGRESS_ENTRIES, MIN_WATCHED_SECS, PROGRESS_SAMPLE_INTERVAL_SECS};
use crate::error::Result;
use crate::session::MediaId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Store of last known playback positions, keyed by content id.
pub trait ProgressStore {
    /// Returns the stored position for the given content, if any.
    fn get(&self, media_id: &MediaId) -> Option<f64>;

    /// Stores or replaces the position for the given content.
    fn set(&mut self, media_id: &MediaId, position_secs: f64);
}

/// Ephemeral in-memory store. Positions vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    entries: HashMap<MediaId, f64>,
}

impl MemoryProgressStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn get(&self, media_id: &MediaId) -> Option<f64> {
        self.entries.get(media_id).copied()
    }

    fn set(&mut self, media_id: &MediaId, position_secs: f64) {
        self.entries.insert(media_id.clone(), position_secs);
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ProgressEntry {
    media_id: String,
    last_position: f64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProgressFile {
    #[serde(default)]
    entries: Vec<ProgressEntry>,
}

/// TOML-file-backed store with a bounded entry count.
///
/// Entries are kept in write order; updating an existing entry moves it
/// to the back, and once the capacity is reached the oldest write is
/// evicted. Write failures are logged, not surfaced; losing a resume
/// point is not worth interrupting playback for.
#[derive(Debug)]
pub struct FileProgressStore {
    path: PathBuf,
    entries: Vec<ProgressEntry>,
    capacity: usize,
}

impl FileProgressStore {
    /// Opens the store at the given path, loading existing entries.
    /// A missing or unreadable file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            toml::from_str::<ProgressFile>(&content)
                .unwrap_or_default()
                .entries
        } else {
            Vec::new()
        };
        Ok(Self {
            path,
            entries,
            capacity: MAX_PROGRESS_ENTRIES,
        })
    }

    /// Overrides the entry capacity. Mainly for tests.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = ProgressFile {
            entries: self
                .entries
                .iter()
                .map(|e| ProgressEntry {
                    media_id: e.media_id.clone(),
                    last_position: e.last_position,
                })
                .collect(),
        };
        let content = toml::to_string_pretty(&file)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl ProgressStore for FileProgressStore {
    fn get(&self, media_id: &MediaId) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.media_id == media_id.as_str())
            .map(|e| e.last_position)
    }

    fn set(&mut self, media_id: &MediaId, position_secs: f64) {
        self.entries.retain(|e| e.media_id != media_id.as_str());
        self.entries.push(ProgressEntry {
            media_id: media_id.as_str().to_string(),
            last_position: position_secs,
        });
        while self.entries.len() > self.capacity {
            self.entries.remove(0);
        }
        if let Err(err) = self.persist() {
            log::warn!("failed to persist watch progress: {}", err);
        }
    }
}

/// Samples the playhead while playing and writes resume points.
///
/// One tracker serves one session: [`resume_position`] consults the
/// store at most once, after the first transition out of Loading, and
/// never before metadata is available (seeking earlier would be a
/// no-op anyway).
///
/// [`resume_position`]: WatchProgressTracker::resume_position
#[derive(Debug)]
pub struct WatchProgressTracker {
    sample_interval: Duration,
    min_watched_secs: f64,
    last_sample: Option<Instant>,
    resume_consulted: bool,
}

impl WatchProgressTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sample_interval: Duration::from_secs(PROGRESS_SAMPLE_INTERVAL_SECS),
            min_watched_secs: MIN_WATCHED_SECS,
            last_sample: None,
            resume_consulted: false,
        }
    }

    /// Builds a tracker with custom thresholds.
    #[must_use]
    pub fn with_thresholds(sample_interval: Duration, min_watched_secs: f64) -> Self {
        Self {
            sample_interval,
            min_watched_secs,
            last_sample: None,
            resume_consulted: false,
        }
    }

    /// Takes a sample. Returns true if a resume point was written.
    ///
    /// Samples are taken at most once per interval and only while
    /// playing; positions below the minimum-watched threshold advance
    /// the sampling clock but write nothing.
    pub fn sample<S: ProgressStore + ?Sized>(
        &mut self,
        now: Instant,
        playing: bool,
        media_id: &MediaId,
        position_secs: f64,
        store: &mut S,
    ) -> bool {
        if !playing {
            return false;
        }

        let due = match self.last_sample {
            Some(last) => now.duration_since(last) >= self.sample_interval,
            None => true,
        };
        if !due {
            return false;
        }
        self.last_sample = Some(now);

        if position_secs < self.min_watched_secs {
            return false;
        }
        store.set(media_id, position_secs);
        true
    }

    /// Returns the stored resume position, at most once per session.
    /// Subsequent calls return `None` regardless of the store contents.
    pub fn resume_position<S: ProgressStore + ?Sized>(
        &mut self,
        media_id: &MediaId,
        store: &S,
    ) -> Option<f64> {
        if self.resume_consulted {
            return None;
        }
        self.resume_consulted = true;
        store.get(media_id)
    }

    /// Clears sampling and resume state (session teardown).
    pub fn reset(&mut self) {
        self.last_sample = None;
        self.resume_consulted = false;
    }
}

impl Default for WatchProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

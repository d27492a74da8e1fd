//! Session history: every finished run's survival time, append-only.
//!
//! The on-disk format is plain text with one float per line. Reads are
//! forgiving in the same way the game always was: a missing file is an empty
//! history, and scanning stops at the first token that is not a number.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

pub trait HistoryStore {
    fn append(&mut self, time: f32);

    /// Best recorded time, or 0 when nothing has been recorded.
    fn high_score(&self) -> f32;

    /// Number of recorded games.
    fn count(&self) -> usize;
}

/// Parse recorded times, stopping at the first malformed token.
pub fn scan_times(contents: &str) -> impl Iterator<Item = f32> + '_ {
    contents
        .split_whitespace()
        .map_while(|token| token.parse::<f32>().ok().filter(|t| t.is_finite()))
}

fn best_of(times: impl Iterator<Item = f32>) -> f32 {
    times.fold(0.0, |best, t| if t > best { t } else { best })
}

// ── File-backed store ─────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileHistory { path: path.into() }
    }

    fn read(&self) -> String {
        fs::read_to_string(&self.path).unwrap_or_else(|e| {
            log::debug!("no history at {}: {}", self.path.display(), e);
            String::new()
        })
    }
}

impl HistoryStore for FileHistory {
    fn append(&mut self, time: f32) {
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", time));
        match result {
            Ok(()) => log::info!("recorded {} to {}", time, self.path.display()),
            Err(e) => log::warn!("could not record {} to {}: {}", time, self.path.display(), e),
        }
    }

    fn high_score(&self) -> f32 {
        best_of(scan_times(&self.read()))
    }

    fn count(&self) -> usize {
        scan_times(&self.read()).count()
    }
}

// ── In-memory store ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct MemoryHistory {
    pub times: Vec<f32>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_times(times: Vec<f32>) -> Self {
        MemoryHistory { times }
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&mut self, time: f32) {
        self.times.push(time);
    }

    fn high_score(&self) -> f32 {
        best_of(self.times.iter().copied())
    }

    fn count(&self) -> usize {
        self.times.len()
    }
}

//! Best score and fastest completion time
//!
//! Each record lives in its own plain-text file holding a single number.
//! Reading is best effort: a missing or malformed file yields the default.

use std::fs;
use std::path::{Path, PathBuf};

const HIGH_SCORE_FILE: &str = "highscore.txt";
const FASTEST_TIME_FILE: &str = "fastest_time.txt";

/// Which records a finished run improved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub new_high_score: bool,
    pub new_fastest_time: bool,
}

/// Best results across runs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestRecords {
    pub high_score: u64,
    /// Fastest full completion in seconds (None until a run is completed)
    pub fastest_time: Option<f32>,
}

impl BestRecords {
    /// Read both records from `dir`
    pub fn load(dir: &Path) -> Self {
        let high_score = read_number::<u64>(&dir.join(HIGH_SCORE_FILE)).unwrap_or(0);
        let fastest_time = read_number::<f32>(&dir.join(FASTEST_TIME_FILE));
        log::debug!(
            "Loaded records: high score {}, fastest time {:?}",
            high_score,
            fastest_time
        );
        Self {
            high_score,
            fastest_time,
        }
    }

    /// Merge a finished run. Only completed runs compete for fastest time.
    pub fn record_run(&mut self, score: u64, completed: bool, elapsed: f32) -> RecordUpdate {
        let mut update = RecordUpdate::default();

        if score > self.high_score {
            self.high_score = score;
            update.new_high_score = true;
        }

        if completed && self.fastest_time.is_none_or(|best| elapsed < best) {
            self.fastest_time = Some(elapsed);
            update.new_fastest_time = true;
        }

        update
    }

    /// Write the records touched by `update` back to `dir`
    pub fn save(&self, dir: &Path, update: RecordUpdate) {
        if update.new_high_score {
            write_record(dir.join(HIGH_SCORE_FILE), self.high_score.to_string());
        }
        if update.new_fastest_time {
            if let Some(time) = self.fastest_time {
                write_record(dir.join(FASTEST_TIME_FILE), format!("{:.2}", time));
            }
        }
    }
}

fn read_number<T: std::str::FromStr>(path: &Path) -> Option<T> {
    let text = fs::read_to_string(path).ok()?;
    match text.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring malformed record in {}", path.display());
            None
        }
    }
}

fn write_record(path: PathBuf, contents: String) {
    if let Err(e) = fs::write(&path, contents) {
        log::warn!("Failed to write {}: {}", path.display(), e);
    }
}

/// Format seconds as `Xm Ys`
pub fn format_time(seconds: f32) -> String {
    let total = seconds.max(0.0) as u32;
    format!("{}m {}s", total / 60, total % 60)
}

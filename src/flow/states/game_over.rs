//! Results screen and best-record bookkeeping

use std::path::PathBuf;

use crate::flow::{Flow, GameState, StateId};
use crate::highscores::{BestRecords, RecordUpdate, format_time};
use crate::platform::{FrameInput, Key};

/// Results screen. Merges the finished run into the saved records on entry.
#[derive(Debug)]
pub struct GameOverState {
    records_dir: PathBuf,
    update: RecordUpdate,
}

impl GameOverState {
    pub fn new(records_dir: impl Into<PathBuf>) -> Self {
        Self {
            records_dir: records_dir.into(),
            update: RecordUpdate::default(),
        }
    }

    /// Which records the last run improved
    pub fn last_update(&self) -> RecordUpdate {
        self.update
    }
}

impl GameState for GameOverState {
    fn id(&self) -> StateId {
        StateId::GameOver
    }

    fn load(&mut self, flow: &mut Flow) {
        let mut records = BestRecords::load(&self.records_dir);
        self.update = RecordUpdate::default();

        match &flow.vars.summary {
            Some(summary) => {
                self.update = records.record_run(summary.score, summary.completed, flow.vars.elapsed);
                records.save(&self.records_dir, self.update);
                log::info!(
                    "Game over: score {} ({} of {} levels) in {}",
                    summary.score,
                    summary.levels_cleared(),
                    summary.level_count,
                    format_time(flow.vars.elapsed)
                );
                if self.update.new_high_score {
                    log::info!("New high score: {}", records.high_score);
                }
                if self.update.new_fastest_time {
                    log::info!("New fastest time: {}", format_time(flow.vars.elapsed));
                }
            }
            None => log::warn!("Game over without a finished run"),
        }

        flow.vars.best = Some(records);
    }

    fn unload(&mut self, _flow: &mut Flow) {}

    fn update(&mut self, flow: &mut Flow, input: &FrameInput, _dt: f32) {
        if input.pressed(Key::Confirm) || input.pressed(Key::Back) {
            flow.change(StateId::MainMenu);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::RunSummary;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ring-rush-game-over-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn summary(score: u64, completed: bool) -> RunSummary {
        RunSummary {
            lives: if completed { 2 } else { -1 },
            coins: 0,
            score,
            level_reached: 2,
            level_count: 2,
            completed,
        }
    }

    #[test]
    fn test_completed_run_sets_both_records() {
        let dir = scratch_dir("completed");
        let mut state = GameOverState::new(&dir);
        let mut flow = Flow::default();
        flow.vars.summary = Some(summary(40, true));
        flow.vars.elapsed = 95.0;

        state.load(&mut flow);
        assert!(state.last_update().new_high_score);
        assert!(state.last_update().new_fastest_time);

        let saved = BestRecords::load(&dir);
        assert_eq!(saved.high_score, 40);
        assert_eq!(saved.fastest_time, Some(95.0));
        assert_eq!(flow.vars.best, Some(saved));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_death_never_sets_fastest_time() {
        let dir = scratch_dir("death");
        let mut state = GameOverState::new(&dir);
        let mut flow = Flow::default();
        flow.vars.summary = Some(summary(10, false));
        flow.vars.elapsed = 5.0;

        state.load(&mut flow);
        assert!(state.last_update().new_high_score);
        assert!(!state.last_update().new_fastest_time);
        assert_eq!(BestRecords::load(&dir).fastest_time, None);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_lower_score_keeps_record() {
        let dir = scratch_dir("lower");
        fs::write(dir.join("highscore.txt"), "100").unwrap();
        let mut state = GameOverState::new(&dir);
        let mut flow = Flow::default();
        flow.vars.summary = Some(summary(10, false));

        state.load(&mut flow);
        assert_eq!(state.last_update(), RecordUpdate::default());
        assert_eq!(BestRecords::load(&dir).high_score, 100);
        let _ = fs::remove_dir_all(&dir);
    }
}

//! Data shared between game states
//!
//! Lives as long as the state machine. Nothing here is cleared on a state
//! transition; each state clears the fields it owns when it is done with them.

use crate::highscores::BestRecords;

/// Final numbers of a finished run, written by Levels and read by GameOver
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub lives: i32,
    pub coins: u32,
    pub score: u64,
    /// 1-based level the run ended on
    pub level_reached: u32,
    pub level_count: u32,
    /// True when the last level was finished, false on death
    pub completed: bool,
}

impl RunSummary {
    /// Levels fully cleared by this run
    pub fn levels_cleared(&self) -> u32 {
        if self.completed {
            self.level_count
        } else {
            self.level_reached.saturating_sub(1)
        }
    }
}

/// Live numbers for the in-game HUD
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub label: String,
    pub lives: i32,
    pub coins: u32,
    pub score: u64,
    pub jump_boost: Option<f32>,
    pub speed_boost: Option<f32>,
}

#[derive(Debug, Clone, Default)]
pub struct SharedVars {
    /// Seconds spent in the current run
    pub elapsed: f32,
    pub hud: Option<Hud>,
    /// Set by the pause overlay to leave the run for the main menu
    pub abandon_run: bool,
    pub summary: Option<RunSummary>,
    /// Best results, filled in by the game-over screen
    pub best: Option<BestRecords>,
}

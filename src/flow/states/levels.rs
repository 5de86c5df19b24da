//! Gameplay state: runs levels in order until the player dies or finishes

use glam::Vec2;

use crate::flow::{Flow, GameState, Hud, RunSummary, StateId};
use crate::persistence::LevelSource;
use crate::platform::{FrameInput, Key};
use crate::sim::{Level, LevelError, Run, TriggerOutcome, tick};
use crate::tuning::Tuning;

/// Gameplay. Owns the run, which survives being suspended under Pause.
pub struct LevelsState {
    source: Box<dyn LevelSource>,
    tuning: Tuning,
    view_size: Vec2,
    run: Option<Run>,
}

impl LevelsState {
    pub fn new(source: Box<dyn LevelSource>, tuning: Tuning, view_size: Vec2) -> Self {
        Self {
            source,
            tuning,
            view_size,
            run: None,
        }
    }

    pub fn run(&self) -> Option<&Run> {
        self.run.as_ref()
    }

    fn load_level(&self, index: u32) -> Result<Level, LevelError> {
        let grid = self.source.load(index)?;
        Ok(Level::new(grid, self.tuning.cell_size))
    }

    fn start_run(&mut self, flow: &mut Flow) {
        match self.load_level(1) {
            Ok(level) => {
                let run = Run::new(level, self.source.level_count(), self.view_size, &self.tuning);
                log::info!("Starting run at {}", run.level_label());
                flow.vars.elapsed = 0.0;
                flow.vars.summary = None;
                self.run = Some(run);
            }
            Err(e) => {
                log::error!("Failed to load level 1: {}", e);
                flow.change(StateId::MainMenu);
            }
        }
    }

    /// Move on to the next level, or finish the run after the last one
    fn finish_level(&mut self, flow: &mut Flow) {
        let Some(run) = self.run.as_ref() else {
            return;
        };
        if run.is_final_level() {
            self.end_run(flow, true);
            return;
        }

        let next = run.level_index + 1;
        match self.load_level(next) {
            Ok(level) => {
                if let Some(run) = self.run.as_mut() {
                    run.enter_level(level, next);
                    log::info!("Entering {}", run.level_label());
                }
            }
            Err(e) => {
                log::error!("Failed to load level {}: {}", next, e);
                self.abandon_run(flow);
            }
        }
    }

    fn end_run(&mut self, flow: &mut Flow, completed: bool) {
        let Some(run) = self.run.take() else {
            return;
        };
        let summary = RunSummary {
            lives: run.player.lives,
            coins: run.player.coins,
            score: run.player.score,
            level_reached: run.level_index,
            level_count: run.level_count,
            completed,
        };
        log::info!(
            "Run over after {:.1}s: score {}, completed {}",
            flow.vars.elapsed,
            summary.score,
            completed
        );
        flow.vars.summary = Some(summary);
        flow.vars.hud = None;
        flow.change(StateId::GameOver);
    }

    fn abandon_run(&mut self, flow: &mut Flow) {
        self.run = None;
        flow.vars.hud = None;
        flow.change(StateId::MainMenu);
    }
}

impl GameState for LevelsState {
    fn id(&self) -> StateId {
        StateId::Levels
    }

    fn load(&mut self, flow: &mut Flow) {
        if std::mem::take(&mut flow.vars.abandon_run) {
            log::info!("Run abandoned");
            self.abandon_run(flow);
            return;
        }
        match &self.run {
            Some(run) => log::info!("Resuming {}", run.level_label()),
            None => self.start_run(flow),
        }
    }

    fn unload(&mut self, _flow: &mut Flow) {}

    fn update(&mut self, flow: &mut Flow, input: &FrameInput, dt: f32) {
        let Some(run) = self.run.as_mut() else {
            return;
        };

        if input.pressed(Key::Pause) {
            flow.push(StateId::Pause);
            return;
        }
        if input.pressed(Key::Back) {
            log::info!("Run abandoned");
            self.abandon_run(flow);
            return;
        }
        if input.pressed(Key::Restart) {
            run.restart_level();
        }
        if input.pressed(Key::SkipLevel) {
            self.finish_level(flow);
            return;
        }

        flow.vars.elapsed += dt;
        let report = tick(run, input, &self.tuning, dt);
        flow.vars.hud = Some(Hud {
            label: run.level_label(),
            lives: run.player.lives,
            coins: run.player.coins,
            score: run.player.score,
            jump_boost: run.player.jump_boost,
            speed_boost: run.player.speed_boost,
        });

        match report.outcome {
            TriggerOutcome::GameOver => self.end_run(flow, false),
            TriggerOutcome::EndReached => self.finish_level(flow),
            TriggerOutcome::Continue | TriggerOutcome::Respawned | TriggerOutcome::Launched => {}
        }
    }
}

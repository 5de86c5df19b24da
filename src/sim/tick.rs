//! Per-frame simulation step
//!
//! Order within a frame is fixed: input, physics, collision, triggers,
//! camera, boost timers.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::collision::resolve_colliders;
use super::level::Level;
use super::physics::integrate;
use super::player::Player;
use super::triggers::{GameEvent, TriggerOutcome, dispatch_triggers};
use crate::platform::{FrameInput, Key};
use crate::tuning::Tuning;

/// One play-through: the current level plus everything that carries across levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    pub level: Level,
    pub player: Player,
    pub camera: Camera,
    /// 1-based index of the current level
    pub level_index: u32,
    pub level_count: u32,
    /// Simulated frames since the run began
    pub time_ticks: u64,
}

impl Run {
    /// Start a run on `level` (index 1) with fresh player stats
    pub fn new(level: Level, level_count: u32, view_size: Vec2, tuning: &Tuning) -> Self {
        let mut run = Self {
            player: Player::new(tuning),
            camera: Camera::new(view_size),
            level_index: 1,
            level_count,
            time_ticks: 0,
            level,
        };
        run.place_player();
        run
    }

    /// Replace the level and drop the player at its entry
    pub fn enter_level(&mut self, level: Level, index: u32) {
        self.level = level;
        self.level_index = index;
        self.player.coins = 0;
        self.place_player();
    }

    /// Put the current level back to its loaded state and start over
    pub fn restart_level(&mut self) {
        self.level.reset();
        self.player.coins = 0;
        self.player.clear_boosts();
        self.place_player();
    }

    pub fn is_final_level(&self) -> bool {
        self.level_index >= self.level_count
    }

    /// Caption shown above the start tile: levels come in worlds of three
    pub fn level_label(&self) -> String {
        let i = self.level_index.saturating_sub(1);
        format!("Level {} - {}", i / 3 + 1, i % 3 + 1)
    }

    fn place_player(&mut self) {
        self.player.pos = self.level.entry_position();
        self.player.vel = Vec2::ZERO;
        self.player.grounded = false;
        self.camera.set_level_size(self.level.world_size());
        self.camera.follow(self.player.pos);
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    pub outcome: TriggerOutcome,
    /// The delta was too large and nothing was simulated
    pub skipped: bool,
}

/// Advance the run by one frame
pub fn tick(run: &mut Run, input: &FrameInput, tuning: &Tuning, dt: f32) -> TickReport {
    let mut report = TickReport::default();
    if tuning.skips_frame(dt) {
        log::debug!("Skipping frame with dt {:.3}", dt);
        report.skipped = true;
        return report;
    }

    let player = &mut run.player;
    if input.pressed(Key::Jump) && player.try_jump() {
        report.events.push(GameEvent::Jumped);
    }
    player.steer(input.held.direction());

    integrate(player, tuning, dt);
    resolve_colliders(player, &run.level.colliders);
    report.outcome = dispatch_triggers(&mut run.level, player, tuning, &mut report.events);

    run.camera.follow(player.pos);
    player.tick_boosts(dt);
    run.time_ticks += 1;

    report
}

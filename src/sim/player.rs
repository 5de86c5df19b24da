//! The player: a rolling ball with lives, coins, and temporary boosts

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Centre of the collision circle (world units)
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Dead once this drops below zero
    pub lives: i32,
    pub coins: u32,
    pub score: u64,
    pub grounded: bool,

    pub base_jump: f32,
    pub boosted_jump: f32,
    pub base_speed: f32,
    pub boosted_speed: f32,
    /// Acceleration applied per frame while a direction is held
    pub move_accel: f32,

    /// Seconds left on the jump boost
    pub jump_boost: Option<f32>,
    /// Seconds left on the speed boost
    pub speed_boost: Option<f32>,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: tuning.player_radius,
            lives: tuning.starting_lives,
            coins: 0,
            score: 0,
            grounded: false,
            base_jump: tuning.jump_impulse,
            boosted_jump: tuning.boosted_jump_impulse,
            base_speed: tuning.move_speed,
            boosted_speed: tuning.boosted_move_speed,
            move_accel: tuning.move_accel,
            jump_boost: None,
            speed_boost: None,
        }
    }

    /// Vertical velocity applied by a jump (negative is up)
    pub fn jump_impulse(&self) -> f32 {
        if self.jump_boost.is_some() {
            self.boosted_jump
        } else {
            self.base_jump
        }
    }

    /// Horizontal speed cap for steering
    pub fn max_speed(&self) -> f32 {
        if self.speed_boost.is_some() {
            self.boosted_speed
        } else {
            self.base_speed
        }
    }

    /// Jump if standing on something. Returns whether the jump happened.
    pub fn try_jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.grounded = false;
        self.vel.y = self.jump_impulse();
        true
    }

    /// Accelerate toward `direction` (-1, 0, +1) without exceeding the speed cap
    pub fn steer(&mut self, direction: i32) {
        let cap = self.max_speed();
        match direction {
            d if d < 0 && self.vel.x > -cap => self.vel.x -= self.move_accel,
            d if d > 0 && self.vel.x < cap => self.vel.x += self.move_accel,
            _ => {}
        }
    }

    pub fn start_jump_boost(&mut self, duration: f32) {
        self.jump_boost = Some(duration);
    }

    pub fn start_speed_boost(&mut self, duration: f32) {
        self.speed_boost = Some(duration);
    }

    /// Count both boost timers down; expired boosts drop back to baseline
    pub fn tick_boosts(&mut self, dt: f32) {
        for timer in [&mut self.jump_boost, &mut self.speed_boost] {
            if let Some(remaining) = timer {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    *timer = None;
                }
            }
        }
    }

    pub fn clear_boosts(&mut self) {
        self.jump_boost = None;
        self.speed_boost = None;
    }

    /// Lose a life and reappear at `respawn`
    pub fn die(&mut self, respawn: Vec2) {
        self.pos = respawn;
        self.vel = Vec2::ZERO;
        self.lives -= 1;
    }

    pub fn is_dead(&self) -> bool {
        self.lives < 0
    }

    /// Fresh stats for a new run
    pub fn reset_stats(&mut self, lives: i32) {
        self.coins = 0;
        self.score = 0;
        self.lives = lives;
        self.vel = Vec2::ZERO;
        self.grounded = false;
        self.clear_boosts();
    }
}

//! Data-driven game balance
//!
//! Every physics and gameplay constant the simulation reads, grouped so a
//! settings file can override any of them. Missing fields fall back to the
//! values in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub cell_size: f32,
    pub world_scale: f32,
    pub max_frame_dt: f32,

    // === Physics ===
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub friction_step: f32,
    pub friction_snap: f32,

    // === Player ===
    pub player_radius: f32,
    pub jump_impulse: f32,
    pub boosted_jump_impulse: f32,
    pub move_speed: f32,
    pub boosted_move_speed: f32,
    pub move_accel: f32,
    pub starting_lives: i32,

    // === Triggers ===
    pub boost_duration: f32,
    pub launch_impulse: f32,
    pub coin_threshold: u32,
    pub coin_score: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            world_scale: WORLD_SCALE,
            max_frame_dt: MAX_FRAME_DT,

            gravity: GRAVITY,
            terminal_velocity: TERMINAL_VELOCITY,
            friction_step: FRICTION_STEP,
            friction_snap: FRICTION_SNAP,

            player_radius: PLAYER_RADIUS,
            jump_impulse: JUMP_IMPULSE,
            boosted_jump_impulse: BOOSTED_JUMP_IMPULSE,
            move_speed: MOVE_SPEED,
            boosted_move_speed: BOOSTED_MOVE_SPEED,
            move_accel: MOVE_ACCEL,
            starting_lives: STARTING_LIVES,

            boost_duration: BOOST_DURATION,
            launch_impulse: LAUNCH_IMPULSE,
            coin_threshold: COIN_THRESHOLD,
            coin_score: COIN_SCORE,
        }
    }
}

impl Tuning {
    /// True when a frame delta is too large to simulate safely
    #[inline]
    pub fn skips_frame(&self, dt: f32) -> bool {
        dt > self.max_frame_dt
    }
}

//! Ring Rush - a tile-based ball platformer
//!
//! Core modules:
//! - `sim`: Level geometry, player physics, collisions, triggers
//! - `flow`: Stack-based game state machine and the game's states
//! - `platform`: Decoded input events handed in by the host
//! - `persistence`: Level sources (directory or in-memory)
//! - `highscores`: Best score / fastest time records
//! - `settings`, `tuning`: JSON configuration and data-driven balance

pub mod flow;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::BestRecords;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::{IVec2, Vec2};

/// Game configuration constants
pub mod consts {
    /// Side length of one grid cell in world units (pixels)
    pub const CELL_SIZE: f32 = 64.0;
    /// Frames with a longer delta than this are skipped entirely
    pub const MAX_FRAME_DT: f32 = 2.0 / 60.0;
    /// World units per velocity unit (64px = 1 metre)
    pub const WORLD_SCALE: f32 = 64.0;

    /// Downward acceleration (velocity units per second)
    pub const GRAVITY: f32 = 19.6;
    /// Maximum falling speed
    pub const TERMINAL_VELOCITY: f32 = 33.0;
    /// Horizontal speed removed per frame by friction
    pub const FRICTION_STEP: f32 = 0.2;
    /// Below this horizontal speed the player stops dead
    pub const FRICTION_SNAP: f32 = 0.3;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 28.0;
    pub const JUMP_IMPULSE: f32 = -7.6;
    pub const BOOSTED_JUMP_IMPULSE: f32 = -14.0;
    pub const MOVE_SPEED: f32 = 3.3;
    pub const BOOSTED_MOVE_SPEED: f32 = 7.0;
    /// Horizontal acceleration per frame while a direction is held
    pub const MOVE_ACCEL: f32 = 1.1;
    pub const STARTING_LIVES: i32 = 5;

    /// Boost pickups last this many seconds
    pub const BOOST_DURATION: f32 = 5.0;
    /// Vertical velocity applied by a launcher
    pub const LAUNCH_IMPULSE: f32 = -20.0;
    /// Coins needed to open the end of a level
    pub const COIN_THRESHOLD: u32 = 20;
    /// Score per collected coin
    pub const COIN_SCORE: u64 = 2;

    /// Resting contact classification threshold on the resolution normal
    pub const CONTACT_NORMAL_Y: f32 = 0.7;
}

/// Top-left corner of a grid cell in world units
#[inline]
pub fn cell_to_world(cell: IVec2, cell_size: f32) -> Vec2 {
    cell.as_vec2() * cell_size
}

/// Centre of a grid cell in world units
#[inline]
pub fn cell_center(cell: IVec2, cell_size: f32) -> Vec2 {
    cell_to_world(cell, cell_size) + Vec2::splat(cell_size / 2.0)
}

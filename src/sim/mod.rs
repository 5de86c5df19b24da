//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module renders, plays
//! sound, or touches the filesystem except [`TileGrid::load`].
//! - Triggers are scanned in generation order (row-major)
//! - A frame with an oversized delta is skipped, never subdivided

pub mod camera;
pub mod colliders;
pub mod collision;
pub mod grid;
pub mod level;
pub mod physics;
pub mod player;
pub mod region;
pub mod tick;
pub mod tile;
pub mod triggers;

pub use camera::Camera;
pub use colliders::{LevelGeometry, generate};
pub use collision::{CollisionResult, Contact, circle_overlaps_rect, circle_rect_collision, resolve_colliders};
pub use grid::{GridError, LevelError, ParseError, ResetRecord, TileGrid};
pub use level::Level;
pub use player::Player;
pub use region::Region;
pub use tick::{Run, TickReport, tick};
pub use tile::TileKind;
pub use triggers::{GameEvent, TriggerOutcome, dispatch_triggers};

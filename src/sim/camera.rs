//! Follow camera clamped to the level bounds

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Extra margin around the view when culling draw calls
const VIEW_BUFFER: f32 = 64.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Top-left of the view in world units
    pub pos: Vec2,
    pub size: Vec2,
    bounds_min: Vec2,
    bounds_max: Vec2,
}

impl Camera {
    pub fn new(size: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            size,
            bounds_min: Vec2::ZERO,
            bounds_max: Vec2::ZERO,
        }
    }

    /// Limit the view to a level of `world_size`
    pub fn set_level_size(&mut self, world_size: Vec2) {
        self.bounds_min = Vec2::ZERO;
        self.bounds_max = world_size - self.size;
    }

    /// Centre on `target`, then clamp. A level smaller than the view pins to the top-left.
    pub fn follow(&mut self, target: Vec2) {
        let wanted = target - self.size / 2.0;
        self.pos = wanted.min(self.bounds_max).max(self.bounds_min);
    }

    /// Whether a world point is close enough to the view to be worth drawing
    pub fn is_within_view(&self, point: Vec2) -> bool {
        let buffer = Vec2::splat(VIEW_BUFFER);
        let min = self.pos - buffer;
        let max = self.pos + self.size + buffer;
        point.cmpge(min).all() && point.cmple(max).all()
    }

    /// Convert a world position to view space
    #[inline]
    pub fn to_view(&self, world: Vec2) -> Vec2 {
        world - self.pos
    }
}

//! Axis-aligned rectangles used for both solid colliders and triggers

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::tile::TileKind;

/// A rectangle in world space generated from one or more grid cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub kind: TileKind,
    /// Top-left corner (world units)
    pub pos: Vec2,
    /// Width and height (world units)
    pub size: Vec2,
    /// Triggers deactivate after a one-shot effect; colliders never do
    pub active: bool,
    /// Grid cell the region was generated from (leftmost/topmost of a run)
    pub cell: IVec2,
}

impl Region {
    pub fn new(kind: TileKind, pos: Vec2, size: Vec2, cell: IVec2) -> Self {
        Self {
            kind,
            pos,
            size,
            active: true,
            cell,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Kind name for rendering/audio collaborators
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Closest point of the rectangle (surface or interior) to `point`
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min(), self.max())
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.cmpgt(self.min()).all() && point.cmplt(self.max()).all()
    }
}

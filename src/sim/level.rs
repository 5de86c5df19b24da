//! A loaded level: the live tile grid plus the geometry generated from it

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::colliders::generate;
use super::grid::{ParseError, TileGrid};
use super::region::Region;
use crate::cell_center;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub grid: TileGrid,
    /// Merged walls, solid for the level's lifetime
    pub colliders: Vec<Region>,
    /// Interactive regions in generation (row-major) order
    pub triggers: Vec<Region>,
    pub cell_size: f32,
}

impl Level {
    /// Generate geometry for a freshly parsed grid
    pub fn new(mut grid: TileGrid, cell_size: f32) -> Self {
        let geometry = generate(&mut grid, cell_size);
        Self {
            grid,
            colliders: geometry.colliders,
            triggers: geometry.triggers,
            cell_size,
        }
    }

    pub fn parse(source: &str, cell_size: f32) -> Result<Self, ParseError> {
        Ok(Self::new(TileGrid::parse(source)?, cell_size))
    }

    /// Put the level back the way it was loaded. Idempotent.
    pub fn reset(&mut self) {
        self.grid.reset();
        for trigger in &mut self.triggers {
            trigger.active = true;
        }
    }

    /// Level size in world units
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.grid.width() as f32, self.grid.height() as f32) * self.cell_size
    }

    /// Where the player enters: centred one cell above the start tile
    pub fn entry_position(&self) -> Vec2 {
        let start = self.grid.start.unwrap_or(IVec2::ZERO);
        cell_center(start - IVec2::Y, self.cell_size)
    }

    /// Where the player reappears after losing a life
    pub fn respawn_position(&self) -> Vec2 {
        let spawn = self.grid.spawn.unwrap_or(IVec2::ZERO);
        cell_center(spawn, self.cell_size)
    }
}

//! Tile kinds and their level-file codes

use serde::{Deserialize, Serialize};

/// Category of one grid cell.
///
/// The discriminant is the integer code used in level files; the mapping is
/// fixed and must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileKind {
    #[default]
    Empty = 0,
    Wall = 1,
    Slope = 2,
    Collectible = 3,
    Hazard = 4,
    Launcher = 5,
    Start = 6,
    End = 7,
    CheckpointActive = 8,
    CheckpointInactive = 9,
    EndLocked = 10,
    JumpBoost = 11,
    SpeedBoost = 12,
}

impl TileKind {
    pub const ALL: [TileKind; 13] = [
        TileKind::Empty,
        TileKind::Wall,
        TileKind::Slope,
        TileKind::Collectible,
        TileKind::Hazard,
        TileKind::Launcher,
        TileKind::Start,
        TileKind::End,
        TileKind::CheckpointActive,
        TileKind::CheckpointInactive,
        TileKind::EndLocked,
        TileKind::JumpBoost,
        TileKind::SpeedBoost,
    ];

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Name handed to rendering/audio collaborators
    pub fn name(self) -> &'static str {
        match self {
            TileKind::Empty => "Empty",
            TileKind::Wall => "Wall",
            TileKind::Slope => "Slope",
            TileKind::Collectible => "Collectible",
            TileKind::Hazard => "Hazard",
            TileKind::Launcher => "Launcher",
            TileKind::Start => "Start",
            TileKind::End => "End",
            TileKind::CheckpointActive => "CheckpointActive",
            TileKind::CheckpointInactive => "CheckpointInactive",
            TileKind::EndLocked => "EndLocked",
            TileKind::JumpBoost => "JumpBoost",
            TileKind::SpeedBoost => "SpeedBoost",
        }
    }

    /// Tiles restored by a level reset (pickups and unreached checkpoints)
    pub fn is_resettable(self) -> bool {
        matches!(
            self,
            TileKind::Collectible
                | TileKind::JumpBoost
                | TileKind::SpeedBoost
                | TileKind::CheckpointInactive
        )
    }
}

//! Tile grid parsed from a level file
//!
//! Level files are plain text: one line per grid row, each line a
//! comma-separated list of tile codes (see [`TileKind`]).

use std::fs;
use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tile::TileKind;

/// Why a level description was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("level has no rows")]
    Empty,
    #[error("row {row}, column {column}: {token:?} is not a non-negative integer")]
    InvalidToken {
        row: usize,
        column: usize,
        token: String,
    },
    #[error("row {row}, column {column}: unknown tile code {code}")]
    UnknownTile { row: usize, column: usize, code: u32 },
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Failure loading a level from disk
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed level: {0}")]
    Parse(#[from] ParseError),
    #[error("level {0} does not exist")]
    Missing(u32),
}

/// Stored grid whose fields disagree with each other
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("{width}x{height} grid holds {cells} cells")]
    Shape {
        width: usize,
        height: usize,
        cells: usize,
    },
    #[error("reset record points at cell {0}, outside the grid")]
    ResetIndex(usize),
}

/// A tile that a level reset puts back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetRecord {
    pub index: usize,
    pub kind: TileKind,
}

/// Row-major grid of tiles plus the level's key coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredGrid")]
pub struct TileGrid {
    width: usize,
    height: usize,
    cells: Vec<TileKind>,
    /// First Start tile
    pub start: Option<IVec2>,
    /// First End tile, moved when the end is flipped
    pub end: Option<IVec2>,
    /// Where the player respawns; follows checkpoints
    pub spawn: Option<IVec2>,
    reset_records: Vec<ResetRecord>,
}

/// Unchecked serialized form of [`TileGrid`]
#[derive(Deserialize)]
struct StoredGrid {
    width: usize,
    height: usize,
    cells: Vec<TileKind>,
    start: Option<IVec2>,
    end: Option<IVec2>,
    spawn: Option<IVec2>,
    reset_records: Vec<ResetRecord>,
}

impl TryFrom<StoredGrid> for TileGrid {
    type Error = GridError;

    fn try_from(stored: StoredGrid) -> Result<Self, Self::Error> {
        if stored.width.checked_mul(stored.height) != Some(stored.cells.len()) {
            return Err(GridError::Shape {
                width: stored.width,
                height: stored.height,
                cells: stored.cells.len(),
            });
        }
        if let Some(record) = stored
            .reset_records
            .iter()
            .find(|r| r.index >= stored.cells.len())
        {
            return Err(GridError::ResetIndex(record.index));
        }
        Ok(Self {
            width: stored.width,
            height: stored.height,
            cells: stored.cells,
            start: stored.start,
            end: stored.end,
            spawn: stored.spawn,
            reset_records: stored.reset_records,
        })
    }
}

impl TileGrid {
    /// Parse a level description. Fails without producing a partial grid.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;
        let mut start = None;
        let mut end = None;

        for line in source.lines().filter(|l| !l.trim().is_empty()) {
            let row = height;
            let mut found = 0;
            for (column, token) in line.split(',').enumerate() {
                let token = token.trim();
                let code: u32 = token.parse().map_err(|_| ParseError::InvalidToken {
                    row,
                    column,
                    token: token.to_string(),
                })?;
                let kind = u8::try_from(code)
                    .ok()
                    .and_then(TileKind::from_code)
                    .ok_or(ParseError::UnknownTile { row, column, code })?;

                let coord = IVec2::new(column as i32, row as i32);
                match kind {
                    TileKind::Start if start.is_none() => start = Some(coord),
                    TileKind::End if end.is_none() => end = Some(coord),
                    _ => {}
                }

                cells.push(kind);
                found += 1;
            }

            if row == 0 {
                width = found;
            } else if found != width {
                return Err(ParseError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        if height == 0 {
            return Err(ParseError::Empty);
        }

        Ok(Self {
            width,
            height,
            cells,
            start,
            end,
            spawn: start,
            reset_records: Vec::new(),
        })
    }

    /// Read and parse a level file
    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let source = fs::read_to_string(path)?;
        let grid = Self::parse(&source)?;
        log::info!(
            "Loaded level {} ({}x{})",
            path.display(),
            grid.width,
            grid.height
        );
        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cells(&self) -> &[TileKind] {
        &self.cells
    }

    pub fn reset_records(&self) -> &[ResetRecord] {
        &self.reset_records
    }

    pub(crate) fn set_reset_records(&mut self, records: Vec<ResetRecord>) {
        self.reset_records = records;
    }

    /// Flat index of a cell, None when outside the grid
    pub fn index_of(&self, cell: IVec2) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 {
            return None;
        }
        let (x, y) = (cell.x as usize, cell.y as usize);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    pub fn get(&self, cell: IVec2) -> Option<TileKind> {
        self.index_of(cell).map(|i| self.cells[i])
    }

    /// Overwrite a cell. Out-of-range writes are ignored.
    pub fn set(&mut self, cell: IVec2, kind: TileKind) {
        match self.index_of(cell) {
            Some(i) => self.cells[i] = kind,
            None => log::warn!("Ignoring write outside the grid at {}", cell),
        }
    }

    /// Remove a picked-up tile
    pub fn clear_cell(&mut self, cell: IVec2) {
        self.set(cell, TileKind::Empty);
    }

    /// Mark a checkpoint as reached and respawn one row above it from now on
    pub fn activate_checkpoint(&mut self, cell: IVec2) {
        self.set(cell, TileKind::CheckpointActive);
        self.spawn = Some(cell - IVec2::Y);
    }

    /// Rewrite every End tile as EndLocked and record `cell` as the end.
    pub fn flip_endpoint(&mut self, cell: IVec2) {
        for kind in self.cells.iter_mut().filter(|k| **k == TileKind::End) {
            *kind = TileKind::EndLocked;
        }
        self.end = Some(cell);
    }

    /// Restore pickups and checkpoints and send the spawn back to the start
    pub fn reset(&mut self) {
        for record in &self.reset_records {
            self.cells[record.index] = record.kind;
        }
        self.spawn = self.start;
    }

    /// Count cells of one kind
    pub fn count(&self, kind: TileKind) -> usize {
        self.cells.iter().filter(|k| **k == kind).count()
    }
}

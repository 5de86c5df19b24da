//! Level sources
//!
//! The Levels state asks a [`LevelSource`] for level N and never cares where
//! the text came from: numbered files in a directory, or strings in memory.

use std::path::PathBuf;

use crate::sim::{LevelError, TileGrid};

/// Supplies numbered levels (1-based)
pub trait LevelSource {
    fn level_count(&self) -> u32;

    fn load(&self, index: u32) -> Result<TileGrid, LevelError>;
}

/// `Level1.dat`, `Level2.dat`, ... inside one directory
#[derive(Debug, Clone)]
pub struct DirLevelSource {
    dir: PathBuf,
    count: u32,
}

impl DirLevelSource {
    pub fn new(dir: impl Into<PathBuf>, count: u32) -> Self {
        Self {
            dir: dir.into(),
            count,
        }
    }

    pub fn path_of(&self, index: u32) -> PathBuf {
        self.dir.join(format!("Level{}.dat", index))
    }
}

impl LevelSource for DirLevelSource {
    fn level_count(&self) -> u32 {
        self.count
    }

    fn load(&self, index: u32) -> Result<TileGrid, LevelError> {
        if index == 0 || index > self.count {
            return Err(LevelError::Missing(index));
        }
        TileGrid::load(&self.path_of(index))
    }
}

/// Levels held as strings, for tests and embedded content
#[derive(Debug, Clone, Default)]
pub struct MemoryLevelSource {
    levels: Vec<String>,
}

impl MemoryLevelSource {
    pub fn new<S: Into<String>>(levels: impl IntoIterator<Item = S>) -> Self {
        Self {
            levels: levels.into_iter().map(Into::into).collect(),
        }
    }
}

impl LevelSource for MemoryLevelSource {
    fn level_count(&self) -> u32 {
        self.levels.len() as u32
    }

    fn load(&self, index: u32) -> Result<TileGrid, LevelError> {
        let source = index
            .checked_sub(1)
            .and_then(|i| self.levels.get(i as usize))
            .ok_or(LevelError::Missing(index))?;
        Ok(TileGrid::parse(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_is_one_based() {
        let source = MemoryLevelSource::new(["6,7", "6,0,7"]);
        assert_eq!(source.level_count(), 2);
        assert_eq!(source.load(2).unwrap().width(), 3);
        assert!(matches!(source.load(0), Err(LevelError::Missing(0))));
        assert!(matches!(source.load(3), Err(LevelError::Missing(3))));
    }

    #[test]
    fn test_memory_source_reports_parse_errors() {
        let source = MemoryLevelSource::new(["6,x"]);
        assert!(matches!(source.load(1), Err(LevelError::Parse(_))));
    }

    #[test]
    fn test_dir_source_missing_file_is_io_error() {
        let source = DirLevelSource::new("no/such/dir", 3);
        assert!(matches!(source.load(1), Err(LevelError::Io(_))));
        assert!(matches!(source.load(4), Err(LevelError::Missing(4))));
        assert!(source.path_of(2).ends_with("Level2.dat"));
    }

    #[test]
    fn test_bundled_levels_parse() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/levels");
        let source = DirLevelSource::new(dir, 2);
        for index in 1..=2 {
            let grid = source.load(index).unwrap();
            assert!(grid.start.is_some());
            assert!(grid.end.is_some());
        }
    }
}

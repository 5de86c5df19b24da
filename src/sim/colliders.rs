//! Collider and trigger generation
//!
//! Walls are merged greedily into larger rectangles so the resolver has fewer
//! boxes to test. The merge is linear, not an optimal rectangle cover:
//! - scan row-major; an unconsumed wall cell starts a run
//! - extend the run right while the next cell is also a wall
//! - only if the run stayed 1 wide, extend it downward instead
//!
//! Consumed cells are cleared in a working copy so they are never emitted twice.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::grid::{ResetRecord, TileGrid};
use super::region::Region;
use super::tile::TileKind;
use crate::cell_to_world;

/// Static colliders and interactive triggers of one level
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelGeometry {
    pub colliders: Vec<Region>,
    pub triggers: Vec<Region>,
}

/// Build colliders and triggers for `grid` and record its resettable tiles.
pub fn generate(grid: &mut TileGrid, cell_size: f32) -> LevelGeometry {
    let width = grid.width();
    let height = grid.height();
    let mut work = grid.cells().to_vec();
    let mut geometry = LevelGeometry::default();
    let mut resets = Vec::new();

    let c = cell_size;
    let full_cell = Vec2::splat(c);
    // Pickups occupy a vertical band in the middle half of their cell
    let band_offset = Vec2::new(c / 4.0, 0.0);
    let band_size = Vec2::new(c / 2.0, c);

    for y in 0..height {
        for x in 0..width {
            let index = y * width + x;
            let kind = work[index];
            let cell = IVec2::new(x as i32, y as i32);
            let origin = cell_to_world(cell, c);

            match kind {
                TileKind::Wall => {
                    let run_w = consume_right(&mut work, width, x, y);
                    let run_h = if run_w == 1 {
                        consume_down(&mut work, width, height, x, y)
                    } else {
                        1
                    };
                    let size = Vec2::new(run_w as f32, run_h as f32) * c;
                    geometry.colliders.push(Region::new(kind, origin, size, cell));
                }
                TileKind::Collectible | TileKind::JumpBoost | TileKind::SpeedBoost => {
                    geometry
                        .triggers
                        .push(Region::new(kind, origin + band_offset, band_size, cell));
                    resets.push(ResetRecord { index, kind });
                }
                TileKind::Hazard => {
                    // Spikes sit in the lower half and merge horizontally only
                    let run_w = consume_right(&mut work, width, x, y);
                    geometry.triggers.push(Region::new(
                        kind,
                        origin + Vec2::new(0.0, c / 2.0),
                        Vec2::new(run_w as f32 * c, c / 2.0),
                        cell,
                    ));
                }
                TileKind::Launcher => {
                    let inset = c / 8.0;
                    geometry.triggers.push(Region::new(
                        kind,
                        origin + Vec2::new(0.0, inset),
                        Vec2::new(c, c - inset),
                        cell,
                    ));
                }
                TileKind::Start | TileKind::End => {
                    geometry
                        .triggers
                        .push(Region::new(kind, origin, full_cell, cell));
                }
                TileKind::CheckpointInactive => {
                    geometry
                        .triggers
                        .push(Region::new(kind, origin, full_cell, cell));
                    resets.push(ResetRecord { index, kind });
                }
                TileKind::Empty
                | TileKind::Slope
                | TileKind::CheckpointActive
                | TileKind::EndLocked => {}
            }
        }
    }

    log::debug!(
        "Generated {} colliders, {} triggers, {} reset records",
        geometry.colliders.len(),
        geometry.triggers.len(),
        resets.len()
    );
    grid.set_reset_records(resets);
    geometry
}

/// Consume same-kind cells to the right of (x, y); returns the run width
fn consume_right(work: &mut [TileKind], width: usize, x: usize, y: usize) -> usize {
    let row = y * width;
    let kind = work[row + x];
    work[row + x] = TileKind::Empty;

    let mut run = 1;
    for i in x + 1..width {
        if work[row + i] != kind {
            break;
        }
        work[row + i] = TileKind::Empty;
        run += 1;
    }
    run
}

/// Consume same-kind cells below (x, y); returns the run height.
/// The origin cell has already been consumed by [`consume_right`].
fn consume_down(work: &mut [TileKind], width: usize, height: usize, x: usize, y: usize) -> usize {
    let mut run = 1;
    for j in y + 1..height {
        let index = j * width + x;
        if work[index] != TileKind::Wall {
            break;
        }
        work[index] = TileKind::Empty;
        run += 1;
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CELL_SIZE;
    use proptest::prelude::*;

    const C: f32 = CELL_SIZE;

    #[test]
    fn test_single_row_merges_into_one_collider() {
        let mut grid = TileGrid::parse("0,1,1,1,0").unwrap();
        let geometry = generate(&mut grid, C);
        assert_eq!(geometry.colliders.len(), 1);
        let wall = &geometry.colliders[0];
        assert_eq!(wall.pos, Vec2::new(C, 0.0));
        assert_eq!(wall.size, Vec2::new(3.0 * C, C));
        assert!(geometry.triggers.is_empty());
    }

    #[test]
    fn test_l_shape_does_not_merge_vertically() {
        let mut grid = TileGrid::parse("1,1,1\n1,0,0").unwrap();
        let geometry = generate(&mut grid, C);
        assert_eq!(geometry.colliders.len(), 2);
        assert_eq!(geometry.colliders[0].size, Vec2::new(3.0 * C, C));
        assert_eq!(geometry.colliders[1].pos, Vec2::new(0.0, C));
        assert_eq!(geometry.colliders[1].size, Vec2::new(C, C));
    }

    #[test]
    fn test_column_merges_vertically() {
        let mut grid = TileGrid::parse("0,1\n0,1\n0,1\n1,1").unwrap();
        let geometry = generate(&mut grid, C);
        // Column from (1,0) takes (1,3) too, leaving (0,3) on its own
        assert_eq!(geometry.colliders.len(), 2);
        assert_eq!(geometry.colliders[0].pos, Vec2::new(C, 0.0));
        assert_eq!(geometry.colliders[0].size, Vec2::new(C, 4.0 * C));
        assert_eq!(geometry.colliders[1].pos, Vec2::new(0.0, 3.0 * C));
        assert_eq!(geometry.colliders[1].size, Vec2::new(C, C));
    }

    #[test]
    fn test_trigger_shapes() {
        let mut grid = TileGrid::parse("3,4,4,5,6,7,9,11,12,8,10,2").unwrap();
        let geometry = generate(&mut grid, C);
        let kinds: Vec<_> = geometry.triggers.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TileKind::Collectible,
                TileKind::Hazard,
                TileKind::Launcher,
                TileKind::Start,
                TileKind::End,
                TileKind::CheckpointInactive,
                TileKind::JumpBoost,
                TileKind::SpeedBoost,
            ]
        );

        let coin = &geometry.triggers[0];
        assert_eq!(coin.pos, Vec2::new(C / 4.0, 0.0));
        assert_eq!(coin.size, Vec2::new(C / 2.0, C));

        let spikes = &geometry.triggers[1];
        assert_eq!(spikes.pos, Vec2::new(C, C / 2.0));
        assert_eq!(spikes.size, Vec2::new(2.0 * C, C / 2.0));
        assert_eq!(spikes.cell, IVec2::new(1, 0));

        let pad = &geometry.triggers[2];
        assert_eq!(pad.pos, Vec2::new(3.0 * C, C / 8.0));
        assert_eq!(pad.size, Vec2::new(C, C - C / 8.0));

        assert_eq!(geometry.triggers[3].size, Vec2::splat(C));
    }

    #[test]
    fn test_reset_records() {
        let mut grid = TileGrid::parse("3,0,9\n11,12,1").unwrap();
        generate(&mut grid, C);
        let records = grid.reset_records();
        assert_eq!(
            records,
            &[
                ResetRecord { index: 0, kind: TileKind::Collectible },
                ResetRecord { index: 2, kind: TileKind::CheckpointInactive },
                ResetRecord { index: 3, kind: TileKind::JumpBoost },
                ResetRecord { index: 4, kind: TileKind::SpeedBoost },
            ]
        );
    }

    #[test]
    fn test_regenerate_does_not_duplicate_records() {
        let mut grid = TileGrid::parse("3,3").unwrap();
        generate(&mut grid, C);
        generate(&mut grid, C);
        assert_eq!(grid.reset_records().len(), 2);
    }

    fn wall_grid() -> impl Strategy<Value = (usize, Vec<bool>)> {
        (1usize..8, 1usize..8).prop_flat_map(|(w, h)| (Just(w), prop::collection::vec(any::<bool>(), w * h)))
    }

    proptest! {
        #[test]
        fn prop_walls_covered_exactly_once((width, walls) in wall_grid()) {
            let source: String = walls
                .chunks(width)
                .map(|row| row.iter().map(|w| if *w { "1" } else { "0" }).collect::<Vec<_>>().join(","))
                .collect::<Vec<_>>()
                .join("\n");
            let mut grid = TileGrid::parse(&source).unwrap();
            let geometry = generate(&mut grid, C);

            for (i, is_wall) in walls.iter().enumerate() {
                let cell = IVec2::new((i % width) as i32, (i / width) as i32);
                let center = crate::cell_center(cell, C);
                let covering = geometry
                    .colliders
                    .iter()
                    .filter(|r| r.contains_point(center))
                    .count();
                prop_assert_eq!(covering, usize::from(*is_wall));
            }
        }
    }
}

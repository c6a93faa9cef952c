//! Placement of 3D blocks for a maze: a floor, a post on every grid corner and a wall block
//! for every standing wall. Positions are block centres, y is up, the maze is centred on the
//! origin in the x/z plane with rows growing along z.

use crate::cells::{CellCoordinate, Direction};
use crate::grid::WallGrid;
use crate::units::GridSize;

use itertools::Itertools;

pub type Vector3 = [f32; 3];

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutConfig {
    pub corridor_width: f32,
    pub wall_thickness: f32,
    pub wall_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> LayoutConfig {
        LayoutConfig {
            corridor_width: 2.0,
            wall_thickness: 0.5,
            wall_height: 2.0,
        }
    }
}

impl LayoutConfig {
    /// Distance between two neighbouring grid lines.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.wall_thickness + self.corridor_width
    }

    /// Side length of the whole maze including the outer walls.
    pub fn extent(&self, size: GridSize) -> f32 {
        size.0 as f32 * self.pitch() + self.wall_thickness
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum BlockKind {
    Floor,
    Corner,
    /// Runs along x, closing the top or bottom of a cell.
    HorizontalWall,
    /// Runs along z, closing the left or right of a cell.
    VerticalWall,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneBlock {
    pub kind: BlockKind,
    pub name: String,
    pub position: Vector3,
    pub scale: Vector3,
}

/// Lays out the blocks of `grid`. Only the wall flags of the cells are read.
pub fn build_scene(grid: &WallGrid, config: &LayoutConfig) -> Vec<SceneBlock> {
    let GridSize(size) = grid.size();
    let extent = config.extent(grid.size());
    let pitch = config.pitch();
    let half_height = config.wall_height * 0.5;
    let builder = BlockBuilder { config };

    let mut blocks = vec![SceneBlock {
        kind: BlockKind::Floor,
        name: String::from("Floor"),
        position: [0.0, 0.0, 0.0],
        scale: [extent, 0.0, extent],
    }];

    for (row, column) in (0..size).cartesian_product(0..size) {
        let coord = CellCoordinate::new(column as u32, row as u32);
        let origin = [column as f32 * pitch - extent * 0.5,
                      0.0,
                      row as f32 * pitch - extent * 0.5];
        let at = |dx: f32, dz: f32| [origin[0] + dx, half_height, origin[2] + dz];
        let is_last_row = row == size - 1;
        let is_last_column = column == size - 1;

        blocks.push(builder.corner(column, row, at(0.0, 0.0)));
        if grid.has_wall(coord, Direction::Up) {
            blocks.push(builder.horizontal_wall(column, row, at(pitch * 0.5, 0.0)));
        }
        if grid.has_wall(coord, Direction::Left) {
            blocks.push(builder.vertical_wall(column, row, at(0.0, pitch * 0.5)));
        }

        if is_last_row {
            blocks.push(builder.corner(column, row + 1, at(0.0, pitch)));
            if grid.has_wall(coord, Direction::Down) {
                blocks.push(builder.horizontal_wall(column, row + 1, at(pitch * 0.5, pitch)));
            }
        }
        if is_last_column {
            blocks.push(builder.corner(column + 1, row, at(pitch, 0.0)));
            if grid.has_wall(coord, Direction::Right) {
                blocks.push(builder.vertical_wall(column + 1, row, at(pitch, pitch * 0.5)));
            }
        }
        if is_last_row && is_last_column {
            blocks.push(builder.corner(column + 1, row + 1, at(pitch, pitch)));
        }
    }

    blocks
}

/// Block counts by kind, for logging.
pub fn summarise(blocks: &[SceneBlock]) -> Vec<(BlockKind, usize)> {
    blocks.iter()
        .map(|block| block.kind)
        .sorted_by_key(|kind| *kind as u8)
        .dedup_with_count()
        .map(|(count, kind)| (kind, count))
        .collect()
}

struct BlockBuilder<'a> {
    config: &'a LayoutConfig,
}

impl<'a> BlockBuilder<'a> {
    fn corner(&self, line_x: usize, line_z: usize, position: Vector3) -> SceneBlock {
        let LayoutConfig { wall_thickness: t, wall_height: h, .. } = *self.config;
        SceneBlock {
            kind: BlockKind::Corner,
            name: format!("Corner_{}_{}", line_x, line_z),
            position,
            scale: [t, h, t],
        }
    }

    fn horizontal_wall(&self, column: usize, line_z: usize, position: Vector3) -> SceneBlock {
        let LayoutConfig { corridor_width: w, wall_thickness: t, wall_height: h } = *self.config;
        SceneBlock {
            kind: BlockKind::HorizontalWall,
            name: format!("HorizontalWall_{}_{}", column, line_z),
            position,
            scale: [w, h, t],
        }
    }

    fn vertical_wall(&self, line_x: usize, row: usize, position: Vector3) -> SceneBlock {
        let LayoutConfig { corridor_width: w, wall_thickness: t, wall_height: h } = *self.config;
        SceneBlock {
            kind: BlockKind::VerticalWall,
            name: format!("VerticalWall_{}_{}", line_x, row),
            position,
            scale: [t, h, w],
        }
    }
}

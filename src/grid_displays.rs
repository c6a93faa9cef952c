use crate::carver::MazeCarver;
use crate::cells::{CellCoordinate, Direction};
use crate::grid::WallGrid;
use crate::random::RandomSource;
use crate::units::GridSize;

use std::fmt;

pub trait GridDisplay {
    /// Render the contents of a grid cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: CellCoordinate) -> String {
        String::from("   ")
    }
}

/// Shows where the walk is and which cells it has not reached yet.
#[derive(Debug)]
pub struct CarvingProgressDisplay<'a> {
    grid: &'a WallGrid,
    cursor: CellCoordinate,
}

impl<'a> CarvingProgressDisplay<'a> {
    pub fn new(grid: &'a WallGrid, cursor: CellCoordinate) -> CarvingProgressDisplay<'a> {
        CarvingProgressDisplay { grid, cursor }
    }
}

impl<'a> GridDisplay for CarvingProgressDisplay<'a> {
    fn render_cell_body(&self, coord: CellCoordinate) -> String {
        if coord == self.cursor {
            String::from(" @ ")
        } else if !self.grid.is_visited(coord) {
            String::from("░░░")
        } else {
            String::from("   ")
        }
    }
}

struct EmptyCellsDisplay;
impl GridDisplay for EmptyCellsDisplay {}

/// Box drawing text for the walls of `grid`, with cell bodies filled in by `displayer`.
pub fn render_text(grid: &WallGrid, displayer: &dyn GridDisplay) -> String {
    const WALL_L: &str = "╴";
    const WALL_R: &str = "╶";
    const WALL_U: &str = "╵";
    const WALL_D: &str = "╷";
    const WALL_LR_3: &str = "───";
    const WALL_LR: &str = "─";
    const WALL_UD: &str = "│";
    const WALL_LD: &str = "┐";
    const WALL_RU: &str = "└";
    const WALL_LU: &str = "┘";
    const WALL_RD: &str = "┌";
    const WALL_LRU: &str = "┴";
    const WALL_LRD: &str = "┬";
    const WALL_LRUD: &str = "┼";
    const WALL_RUD: &str = "├";
    const WALL_LUD: &str = "┤";

    let GridSize(size) = grid.size();

    // Start by special case rendering the text for the top boundary
    let mut output = String::from(WALL_RD);
    for column in 0..size {
        output.push_str(WALL_LR_3);
        let coord = CellCoordinate::new(column as u32, 0);
        if grid.is_open(coord, Direction::Right) {
            output.push_str(WALL_LR);
        } else if column == size - 1 {
            output.push_str(WALL_LD);
        } else {
            output.push_str(WALL_LRD);
        }
    }
    output.push('\n');

    for (index_row, row) in grid.iter_row().enumerate() {
        let is_last_row = index_row == size - 1;

        // The top section of the cell is done by the previous row.
        let mut row_middle_section_render = String::from(WALL_UD);
        let mut row_bottom_section_render = String::new();

        for (index_column, cell_coord) in row.into_iter().enumerate() {
            let is_first_column = index_column == 0;
            let is_last_column = index_column == size - 1;
            let right_open = grid.is_open(cell_coord, Direction::Right);
            let down_open = grid.is_open(cell_coord, Direction::Down);

            // Each cell uses the bottom wall of the cell above as its own top wall, so only
            // the body, the right boundary and the bottom boundary are drawn here.
            row_middle_section_render.push_str(&displayer.render_cell_body(cell_coord));
            row_middle_section_render.push_str(if right_open { " " } else { WALL_UD });

            if is_first_column {
                row_bottom_section_render = if is_last_row {
                    String::from(WALL_RU)
                } else if down_open {
                    String::from(WALL_UD)
                } else {
                    String::from(WALL_RUD)
                };
            }
            row_bottom_section_render.push_str(if down_open { "   " } else { WALL_LR_3 });

            let corner = match (is_last_row, is_last_column) {
                (true, true) => WALL_LU,
                (true, false) => if right_open { WALL_LR } else { WALL_LRU },
                (false, true) => if down_open { WALL_UD } else { WALL_LUD },
                (false, false) => {
                    let open_below_right_neighbour =
                        grid.neighbour_at_direction(cell_coord, Direction::Right)
                            .map_or(false, |c| grid.is_open(c, Direction::Down));
                    let open_right_of_lower_neighbour =
                        grid.neighbour_at_direction(cell_coord, Direction::Down)
                            .map_or(false, |c| grid.is_open(c, Direction::Right));
                    let show_right_section = !open_below_right_neighbour;
                    let show_down_section = !open_right_of_lower_neighbour;
                    let show_up_section = !right_open;
                    let show_left_section = !down_open;

                    match (show_left_section,
                           show_right_section,
                           show_up_section,
                           show_down_section) {
                        (true, true, true, true) => WALL_LRUD,
                        (true, true, true, false) => WALL_LRU,
                        (true, true, false, true) => WALL_LRD,
                        (true, false, true, true) => WALL_LUD,
                        (false, true, true, true) => WALL_RUD,
                        (true, true, false, false) => WALL_LR,
                        (false, false, true, true) => WALL_UD,
                        (false, true, true, false) => WALL_RU,
                        (true, false, false, true) => WALL_LD,
                        (true, false, true, false) => WALL_LU,
                        (false, true, false, true) => WALL_RD,
                        (true, false, false, false) => WALL_L,
                        (false, true, false, false) => WALL_R,
                        (false, false, true, false) => WALL_U,
                        (false, false, false, true) => WALL_D,
                        _ => " ",
                    }
                }
            };
            row_bottom_section_render.push_str(corner);
        }

        output.push_str(&row_middle_section_render);
        output.push('\n');
        output.push_str(&row_bottom_section_render);
        output.push('\n');
    }

    output
}

impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text(self, &EmptyCellsDisplay))
    }
}

impl<R: RandomSource> fmt::Display for MazeCarver<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let progress = CarvingProgressDisplay::new(self.grid(), self.cursor());
        write!(f, "{}", render_text(self.grid(), &progress))
    }
}

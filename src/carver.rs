//! Incremental random walk maze carving.
//!
//! The walk starts on a random cell and repeatedly moves to a uniformly chosen neighbour.
//! The wall to a neighbour is removed only the first time that neighbour is entered, so the
//! removed walls always form a tree over the visited cells. Once every cell has been visited
//! the tree spans the grid and the maze is perfect.
//!
//! Unlike a recursive backtracker there is no stack: the walk wanders back over carved
//! passages until it stumbles onto unvisited cells again, which gives uniform spanning trees
//! at the cost of many idle steps near the end.

use crate::cells::{CellCoordinate, Direction, DIRECTIONS_COUNT};
use crate::errors::*;
use crate::grid::WallGrid;
use crate::random::RandomSource;
use crate::units::{GridSize, StepsCount, VisitedCount};

use log::{info, trace};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum StepOutcome {
    /// Moved into an unvisited cell, removing the wall behind.
    Carved,
    /// Moved into a cell that was already visited.
    Revisited,
    /// The chosen direction left the grid; nothing changed.
    OutOfBounds,
    /// Every cell had been visited before the step; nothing changed.
    AlreadyComplete,
}

/// What one call to `MazeCarver::step` did.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct StepResult {
    pub outcome: StepOutcome,
    /// None only when the maze was already complete.
    pub direction: Option<Direction>,
    pub previous_cursor: CellCoordinate,
    pub cursor: CellCoordinate,
    pub visited: VisitedCount,
}

impl StepResult {
    #[inline]
    pub fn carved(&self) -> bool {
        self.outcome == StepOutcome::Carved
    }

    #[inline]
    pub fn moved(&self) -> bool {
        self.previous_cursor != self.cursor
    }
}

pub struct MazeCarver<R: RandomSource> {
    grid: WallGrid,
    cursor: CellCoordinate,
    rng: R,
    steps_taken: StepsCount,
}

impl<R: RandomSource> MazeCarver<R> {
    /// A carver over a fresh `size * size` grid with a randomly placed, already visited,
    /// starting cell.
    pub fn new(size: GridSize, rng: R) -> Result<MazeCarver<R>> {
        let mut rng = rng;
        let (grid, cursor) = seed_grid(size, &mut rng)?;
        Ok(MazeCarver {
            grid,
            cursor,
            rng,
            steps_taken: StepsCount(0),
        })
    }

    /// Start over on a fresh grid, replacing the random source.
    ///
    /// On error the carver is left untouched.
    pub fn reset(&mut self, size: GridSize, rng: R) -> Result<()> {
        let mut rng = rng;
        let (grid, cursor) = seed_grid(size, &mut rng)?;
        self.grid = grid;
        self.cursor = cursor;
        self.rng = rng;
        self.steps_taken = StepsCount(0);
        Ok(())
    }

    /// Advance the walk by one random move.
    ///
    /// Never fails. After completion this is a no-op that draws nothing from the random source.
    pub fn step(&mut self) -> StepResult {
        let previous_cursor = self.cursor;

        if self.is_complete() {
            return StepResult {
                outcome: StepOutcome::AlreadyComplete,
                direction: None,
                previous_cursor,
                cursor: previous_cursor,
                visited: self.grid.visited_count(),
            };
        }

        self.steps_taken.0 += 1;
        let direction = Direction::from_index(self.rng.next_int(0, DIRECTIONS_COUNT));

        let outcome = match self.grid.neighbour_at_direction(previous_cursor, direction) {
            None => StepOutcome::OutOfBounds,
            Some(neighbour) => {
                let outcome = if self.grid.is_visited(neighbour) {
                    StepOutcome::Revisited
                } else {
                    let _ = self.grid.carve(previous_cursor, direction);
                    let _ = self.grid.mark_visited(neighbour);
                    StepOutcome::Carved
                };
                self.cursor = neighbour;
                outcome
            }
        };

        let visited = self.grid.visited_count();
        trace!("step {}: cursor {} -> {} going {:?}, {:?}, {}/{} visited",
               self.steps_taken.0,
               previous_cursor,
               self.cursor,
               direction,
               outcome,
               visited.0,
               self.grid.cells_count().0);
        if outcome == StepOutcome::Carved && self.is_complete() {
            info!("maze of size {} complete after {} steps",
                  self.grid.size().0,
                  self.steps_taken.0);
        }

        StepResult {
            outcome,
            direction: Some(direction),
            previous_cursor,
            cursor: self.cursor,
            visited,
        }
    }

    /// Steps until every cell has been visited, returning the number of steps this took.
    pub fn run_to_completion(&mut self) -> StepsCount {
        let start = self.steps_taken;
        while !self.is_complete() {
            let _ = self.step();
        }
        StepsCount(self.steps_taken.0 - start.0)
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.grid.is_fully_visited()
    }

    #[inline]
    pub fn grid(&self) -> &WallGrid {
        &self.grid
    }

    #[inline]
    pub fn cursor(&self) -> CellCoordinate {
        self.cursor
    }

    #[inline]
    pub fn visited_count(&self) -> VisitedCount {
        self.grid.visited_count()
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.grid.size()
    }

    /// Steps that drew a direction since the last reset.
    #[inline]
    pub fn steps_taken(&self) -> StepsCount {
        self.steps_taken
    }

    /// Fraction of cells visited, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        self.grid.visited_count().0 as f64 / self.grid.cells_count().0 as f64
    }
}

fn seed_grid<R: RandomSource>(size: GridSize,
                              rng: &mut R)
                              -> Result<(WallGrid, CellCoordinate)> {
    let mut grid = WallGrid::new(size)?;
    let GridSize(n) = size;
    let column = rng.next_int(0, n) as u32;
    let row = rng.next_int(0, n) as u32;
    let start = CellCoordinate::new(column, row);
    let _ = grid.mark_visited(start);
    trace!("carving a {0}x{0} maze from {1}", n, start);
    Ok((grid, start))
}

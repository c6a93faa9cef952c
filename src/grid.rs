use crate::cells::{Cell, CellCoordinate, Direction};
use crate::errors::*;
use crate::units::{CellsCount, GridSize, VisitedCount};

use smallvec::SmallVec;
use std::fmt;
use std::slice;

pub type CoordinateSmallVec = SmallVec<[CellCoordinate; 4]>;

/// A square grid of walled cells stored row major (`row * size + column`).
///
/// Walls can only ever be removed and are always removed from both sides of a shared edge
/// at once, so the two cells of an adjacent pair agree on the wall between them.
#[derive(Clone, PartialEq, Eq)]
pub struct WallGrid {
    size: GridSize,
    cells: Vec<Cell>,
    visited_count: VisitedCount,
}

impl fmt::Debug for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "WallGrid :: size: {:?}, visited: {:?}, passages: {}",
               self.size, self.visited_count, self.passages_count())
    }
}

impl WallGrid {
    /// A grid of unvisited cells with every wall standing.
    pub fn new(size: GridSize) -> Result<WallGrid> {
        let CellsCount(cells_count) = checked_cells_count(size)?;
        Ok(WallGrid {
            size,
            cells: vec![Cell::default(); cells_count],
            visited_count: VisitedCount(0),
        })
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    pub fn cells_count(&self) -> CellsCount {
        CellsCount(self.cells.len())
    }

    #[inline]
    pub fn visited_count(&self) -> VisitedCount {
        self.visited_count
    }

    #[inline]
    pub fn is_fully_visited(&self) -> bool {
        self.visited_count.0 == self.cells.len()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, coord: CellCoordinate) -> Option<&Cell> {
        self.coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: CellCoordinate) -> bool {
        let GridSize(size) = self.size;
        (coord.column as usize) < size && (coord.row as usize) < size
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.cells_count().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: CellCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row as usize * self.size.0 + coord.column as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_coordinate(&self, index: usize) -> Option<CellCoordinate> {
        if index < self.cells.len() {
            let GridSize(size) = self.size;
            Some(CellCoordinate::new((index % size) as u32, (index / size) as u32))
        } else {
            None
        }
    }

    pub fn neighbour_at_direction(&self,
                                  coord: CellCoordinate,
                                  direction: Direction)
                                  -> Option<CellCoordinate> {
        coord.offset(direction).filter(|neighbour| self.is_valid_coordinate(*neighbour))
    }

    /// Cells up, left, down or right of `coord` that are inside the grid, whether or not a
    /// wall separates them.
    pub fn neighbours(&self, coord: CellCoordinate) -> CoordinateSmallVec {
        Direction::ALL
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    /// Is there a wall on the given side of the cell? Invalid coordinates are solid.
    pub fn has_wall(&self, coord: CellCoordinate, direction: Direction) -> bool {
        self.cell(coord).map_or(true, |cell| cell.has_wall(direction))
    }

    /// Can the neighbour in `direction` be reached directly from `coord`?
    /// Always false at the grid boundary.
    pub fn is_open(&self, coord: CellCoordinate, direction: Direction) -> bool {
        self.neighbour_at_direction(coord, direction).is_some() && !self.has_wall(coord, direction)
    }

    pub fn is_visited(&self, coord: CellCoordinate) -> bool {
        self.cell(coord).map_or(false, |cell| cell.visited)
    }

    /// Marks a cell as visited, returning true if it was not visited before.
    pub(crate) fn mark_visited(&mut self, coord: CellCoordinate) -> bool {
        match self.coordinate_to_index(coord) {
            Some(index) if !self.cells[index].visited => {
                self.cells[index].visited = true;
                self.visited_count.0 += 1;
                true
            }
            _ => false,
        }
    }

    /// Removes the wall between `coord` and its neighbour in `direction` on both sides.
    /// Returns the neighbour, or None (and changes nothing) at the grid boundary.
    pub(crate) fn carve(&mut self,
                        coord: CellCoordinate,
                        direction: Direction)
                        -> Option<CellCoordinate> {
        let neighbour = self.neighbour_at_direction(coord, direction)?;
        let index = self.coordinate_to_index(coord)?;
        let neighbour_index = self.coordinate_to_index(neighbour)?;

        self.cells[index].walls[direction.index()] = false;
        self.cells[neighbour_index].walls[direction.opposite().index()] = false;
        Some(neighbour)
    }

    #[cfg(test)]
    pub(crate) fn set_walls_for_test(&mut self, coord: CellCoordinate, walls: [bool; 4]) {
        if let Some(index) = self.coordinate_to_index(coord) {
            self.cells[index].walls = walls;
        }
    }

    /// Number of removed interior walls.
    pub fn passages_count(&self) -> usize {
        self.iter_passages().count()
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter {
            index: 0,
            size: self.size,
            cells_count: self.cells.len(),
        }
    }

    /// Coordinates batched one row at a time, top row first.
    pub fn iter_row(&self) -> impl Iterator<Item = Vec<CellCoordinate>> {
        let GridSize(size) = self.size;
        (0..size).map(move |row| {
            (0..size).map(|column| CellCoordinate::new(column as u32, row as u32)).collect()
        })
    }

    /// Every removed interior wall as the pair of cells it used to separate, each pair once.
    pub fn iter_passages(&self) -> PassagesIter {
        PassagesIter {
            grid: self,
            cells: self.cells.iter().enumerate(),
            pending: SmallVec::new(),
        }
    }
}

pub(crate) fn checked_cells_count(size: GridSize) -> Result<CellsCount> {
    let GridSize(n) = size;
    if n == 0 || n > u32::MAX as usize {
        bail!(ErrorKind::InvalidSize(n));
    }
    size.cells_count().ok_or_else(|| ErrorKind::InvalidSize(n).into())
}

#[derive(Debug, Clone)]
pub struct CellIter {
    index: usize,
    size: GridSize,
    cells_count: usize,
}

impl Iterator for CellIter {
    type Item = CellCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.cells_count {
            let GridSize(size) = self.size;
            let coord = CellCoordinate::new((self.index % size) as u32, (self.index / size) as u32);
            self.index += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.index;
        (remaining, Some(remaining))
    }
}
impl ExactSizeIterator for CellIter {} // default impl using size_hint()

pub struct PassagesIter<'a> {
    grid: &'a WallGrid,
    cells: std::iter::Enumerate<slice::Iter<'a, Cell>>,
    pending: SmallVec<[(CellCoordinate, CellCoordinate); 2]>,
}

impl<'a> Iterator for PassagesIter<'a> {
    type Item = (CellCoordinate, CellCoordinate);

    fn next(&mut self) -> Option<Self::Item> {
        // Only the down and right sides are looked at so that every passage is seen once.
        loop {
            if let Some(passage) = self.pending.pop() {
                return Some(passage);
            }
            let (index, _) = self.cells.next()?;
            let coord = self.grid.index_to_coordinate(index)?;
            for dir in &[Direction::Down, Direction::Right] {
                if self.grid.is_open(coord, *dir) {
                    if let Some(neighbour) = self.grid.neighbour_at_direction(coord, *dir) {
                        self.pending.push((coord, neighbour));
                    }
                }
            }
        }
    }
}

impl<'a> fmt::Debug for PassagesIter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PassagesIter :: pending: {:?}", self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn grid(n: usize) -> WallGrid {
        WallGrid::new(GridSize(n)).expect("valid grid size")
    }

    #[test]
    fn zero_size_is_rejected() {
        match WallGrid::new(GridSize(0)) {
            Err(Error(ErrorKind::InvalidSize(0), _)) => {}
            other => panic!("expected InvalidSize, got {:?}", other),
        }
    }

    #[test]
    fn unrepresentable_size_is_rejected() {
        let too_big = GridSize(u32::MAX as usize + 1);
        assert!(WallGrid::new(too_big).is_err());
    }

    #[test]
    fn new_grid_is_closed() {
        let g = grid(4);
        assert_eq!(g.cells_count(), CellsCount(16));
        assert_eq!(g.visited_count(), VisitedCount(0));
        assert_eq!(g.passages_count(), 0);
        assert!(g.cells().iter().all(|cell| *cell == Cell::default()));
    }

    #[test]
    fn neighbour_cells() {
        let g = grid(10);
        let gc = |c, r| CellCoordinate::new(c, r);
        let check_expected_neighbours = |coord, expected: &[CellCoordinate]| {
            let found: Vec<CellCoordinate> = g.neighbours(coord).iter().cloned().sorted().collect();
            let expected: Vec<CellCoordinate> = expected.iter().cloned().sorted().collect();
            assert_eq!(found, expected);
        };

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(1, 0), gc(0, 1)]);
        check_expected_neighbours(gc(9, 0), &[gc(8, 0), gc(9, 1)]);
        check_expected_neighbours(gc(0, 9), &[gc(0, 8), gc(1, 9)]);
        check_expected_neighbours(gc(9, 9), &[gc(9, 8), gc(8, 9)]);

        // sides
        check_expected_neighbours(gc(1, 0), &[gc(0, 0), gc(1, 1), gc(2, 0)]);
        check_expected_neighbours(gc(9, 8), &[gc(9, 7), gc(9, 9), gc(8, 8)]);

        check_expected_neighbours(gc(1, 1), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);
    }

    #[test]
    fn coordinate_as_index() {
        let g = grid(3);
        let indices: Vec<Option<usize>> = g.iter().map(|coord| g.coordinate_to_index(coord)).collect();
        let expected: Vec<Option<usize>> = (0..9).map(Some).collect();
        assert_eq!(indices, expected);

        assert_eq!(g.coordinate_to_index(CellCoordinate::new(2, 3)), None);
        assert_eq!(g.coordinate_to_index(CellCoordinate::new(3, 2)), None);
        assert_eq!(g.index_to_coordinate(5), Some(CellCoordinate::new(2, 1)));
        assert_eq!(g.index_to_coordinate(9), None);
    }

    #[test]
    fn row_iter() {
        let g = grid(2);
        assert_eq!(g.iter_row().collect::<Vec<Vec<CellCoordinate>>>(),
                   vec![vec![CellCoordinate::new(0, 0), CellCoordinate::new(1, 0)],
                        vec![CellCoordinate::new(0, 1), CellCoordinate::new(1, 1)]]);
    }

    #[test]
    fn carving_clears_both_sides() {
        let mut g = grid(3);
        let a = CellCoordinate::new(1, 1);
        let b = g.carve(a, Direction::Left).expect("neighbour inside grid");
        assert_eq!(b, CellCoordinate::new(0, 1));
        assert!(!g.has_wall(a, Direction::Left));
        assert!(!g.has_wall(b, Direction::Right));
        assert!(g.is_open(a, Direction::Left));
        assert!(g.is_open(b, Direction::Right));
        assert!(g.has_wall(a, Direction::Up));
        assert_eq!(g.iter_passages().collect::<Vec<_>>(), vec![(b, a)]);
    }

    #[test]
    fn carving_out_of_the_grid_changes_nothing() {
        let mut g = grid(2);
        let before = g.clone();
        assert_eq!(g.carve(CellCoordinate::new(0, 0), Direction::Up), None);
        assert_eq!(g.carve(CellCoordinate::new(1, 1), Direction::Right), None);
        assert_eq!(g, before);
    }

    #[test]
    fn visiting_is_counted_once() {
        let mut g = grid(2);
        let c = CellCoordinate::new(1, 0);
        assert!(g.mark_visited(c));
        assert!(!g.mark_visited(c));
        assert!(!g.mark_visited(CellCoordinate::new(5, 5)));
        assert_eq!(g.visited_count(), VisitedCount(1));
        assert!(g.is_visited(c));
        assert!(!g.is_fully_visited());
    }
}

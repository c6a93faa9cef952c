use smallvec::SmallVec;
use std::fmt;

pub const DIRECTIONS_COUNT: usize = 4;

/// Column and row of a cell in a square grid. `(0, 0)` is the top left cell.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct CellCoordinate {
    pub column: u32,
    pub row: u32,
}

impl CellCoordinate {
    pub fn new(column: u32, row: u32) -> CellCoordinate {
        CellCoordinate { column, row }
    }

    /// The coordinate one cell away in the given direction.
    /// Returns None if the result would be negative; the upper bound is left to the grid.
    pub fn offset(self, direction: Direction) -> Option<CellCoordinate> {
        let (d_column, d_row) = direction.offset();
        let column = i64::from(self.column) + d_column;
        let row = i64::from(self.row) + d_row;
        if column < 0 || row < 0 || column > i64::from(u32::MAX) || row > i64::from(u32::MAX) {
            None
        } else {
            Some(CellCoordinate::new(column as u32, row as u32))
        }
    }
}

impl From<(u32, u32)> for CellCoordinate {
    fn from(column_row_pair: (u32, u32)) -> CellCoordinate {
        CellCoordinate::new(column_row_pair.0, column_row_pair.1)
    }
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// The four sides of a cell. The discriminant is the index into `Cell::walls`.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum Direction {
    Up = 0,
    Left = 1,
    Down = 2,
    Right = 3,
}

pub type DirectionSmallVec = SmallVec<[Direction; DIRECTIONS_COUNT]>;

// (column delta, row delta) indexed by direction. Rows grow downwards.
const OFFSETS: [(i64, i64); DIRECTIONS_COUNT] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

const OPPOSITES: [Direction; DIRECTIONS_COUNT] =
    [Direction::Down, Direction::Right, Direction::Up, Direction::Left];

impl Direction {
    pub const ALL: [Direction; DIRECTIONS_COUNT] =
        [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Maps `0..4` onto the directions, wrapping larger values.
    #[inline]
    pub fn from_index(index: usize) -> Direction {
        Direction::ALL[index % DIRECTIONS_COUNT]
    }

    #[inline]
    pub fn offset(self) -> (i64, i64) {
        OFFSETS[self.index()]
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        OPPOSITES[self.index()]
    }
}

/// One grid square: whether the walk has entered it yet and which of its walls still stand.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    pub visited: bool,
    pub walls: [bool; DIRECTIONS_COUNT],
}

impl Default for Cell {
    fn default() -> Cell {
        Cell {
            visited: false,
            walls: [true; DIRECTIONS_COUNT],
        }
    }
}

impl Cell {
    #[inline]
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    /// Directions with the wall removed.
    pub fn open_directions(&self) -> DirectionSmallVec {
        Direction::ALL
            .iter()
            .cloned()
            .filter(|dir| !self.has_wall(*dir))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites_are_involutions() {
        for dir in Direction::ALL.iter() {
            assert_eq!(dir.opposite().opposite(), *dir);
            assert_ne!(dir.opposite(), *dir);
        }
    }

    #[test]
    fn opposite_offsets_cancel_out() {
        for dir in Direction::ALL.iter() {
            let (dc, dr) = dir.offset();
            let (odc, odr) = dir.opposite().offset();
            assert_eq!((dc + odc, dr + odr), (0, 0));
            assert_eq!(dc.abs() + dr.abs(), 1);
        }
    }

    #[test]
    fn wall_indices_follow_up_left_down_right() {
        assert_eq!(Direction::Up.index(), 0);
        assert_eq!(Direction::Left.index(), 1);
        assert_eq!(Direction::Down.index(), 2);
        assert_eq!(Direction::Right.index(), 3);
        assert_eq!(Direction::from_index(2), Direction::Down);
        assert_eq!(Direction::from_index(7), Direction::Right);
    }

    #[test]
    fn coordinate_offsets() {
        let c = CellCoordinate::new(0, 0);
        assert_eq!(c.offset(Direction::Up), None);
        assert_eq!(c.offset(Direction::Left), None);
        assert_eq!(c.offset(Direction::Down), Some(CellCoordinate::new(0, 1)));
        assert_eq!(c.offset(Direction::Right), Some(CellCoordinate::new(1, 0)));

        let far = CellCoordinate::new(u32::MAX, 3);
        assert_eq!(far.offset(Direction::Right), None);
        assert_eq!(far.offset(Direction::Up), Some(CellCoordinate::new(u32::MAX, 2)));
    }

    #[test]
    fn new_cells_are_closed_and_unvisited() {
        let cell = Cell::default();
        assert!(!cell.visited);
        assert!(Direction::ALL.iter().all(|dir| cell.has_wall(*dir)));
        assert!(cell.open_directions().is_empty());
    }

    #[test]
    fn open_directions_lists_cleared_walls() {
        let cell = Cell {
            visited: true,
            walls: [false, true, true, false],
        };
        assert_eq!(&*cell.open_directions(), &[Direction::Up, Direction::Right]);
    }
}

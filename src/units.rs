/// Side length of a square grid, the grid has `GridSize * GridSize` cells.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct GridSize(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct CellsCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct VisitedCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct StepsCount(pub usize);

impl GridSize {
    /// The number of cells in the grid, None if it overflows `usize`.
    #[inline]
    pub fn cells_count(self) -> Option<CellsCount> {
        self.0.checked_mul(self.0).map(CellsCount)
    }
}

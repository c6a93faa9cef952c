//! Structural checks on carved grids: a perfect maze is a spanning tree of the grid graph.

use crate::cells::{CellCoordinate, Direction};
use crate::errors::*;
use crate::grid::WallGrid;

use bit_set::BitSet;
use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::VecDeque;

/// Undirected graph with one node per cell (node index == row major cell index) and one
/// edge per removed interior wall.
pub fn passage_graph(grid: &WallGrid) -> UnGraph<CellCoordinate, ()> {
    let mut graph = UnGraph::with_capacity(grid.cells_count().0, grid.cells_count().0);
    for coord in grid.iter() {
        let _ = graph.add_node(coord);
    }
    for (a, b) in grid.iter_passages() {
        if let (Some(a_index), Some(b_index)) =
               (grid.coordinate_to_index(a), grid.coordinate_to_index(b)) {
            let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
        }
    }
    graph
}

/// Does every pair of adjacent cells agree about the wall between them?
pub fn is_wall_symmetric(grid: &WallGrid) -> bool {
    first_asymmetric_cell(grid).is_none()
}

/// Are the carved passages free of cycles?
pub fn is_forest(grid: &WallGrid) -> bool {
    !is_cyclic_undirected(&passage_graph(grid))
}

/// Indices of the cells reachable from `start` through removed walls.
/// Empty if `start` is outside the grid.
pub fn reachable_from(grid: &WallGrid, start: CellCoordinate) -> BitSet {
    let mut seen = BitSet::with_capacity(grid.cells_count().0);
    let start_index = match grid.coordinate_to_index(start) {
        Some(index) => index,
        None => return seen,
    };

    let mut frontier = VecDeque::new();
    let _ = seen.insert(start_index);
    frontier.push_back(start);

    while let Some(coord) = frontier.pop_front() {
        for dir in Direction::ALL.iter() {
            if !grid.is_open(coord, *dir) {
                continue;
            }
            if let Some(neighbour) = grid.neighbour_at_direction(coord, *dir) {
                if let Some(index) = grid.coordinate_to_index(neighbour) {
                    if seen.insert(index) {
                        frontier.push_back(neighbour);
                    }
                }
            }
        }
    }
    seen
}

/// Exactly `cells - 1` passages, every cell connected and no cycles.
pub fn is_spanning_tree(grid: &WallGrid) -> bool {
    verify_perfect_maze(grid).is_ok()
}

/// Checks that the grid is a perfect maze, reporting the first defect found.
pub fn verify_perfect_maze(grid: &WallGrid) -> Result<()> {
    if let Some(coord) = first_asymmetric_cell(grid) {
        bail!(ErrorKind::AsymmetricWall(coord.column, coord.row));
    }

    let graph = passage_graph(grid);
    if is_cyclic_undirected(&graph) {
        bail!(ErrorKind::CyclicPassages);
    }

    let total = grid.cells_count().0;
    if connected_components(&graph) != 1 {
        let reachable = reachable_from(grid, CellCoordinate::new(0, 0)).len();
        bail!(ErrorKind::DisconnectedCells(reachable, total));
    }

    // Connected and acyclic already implies this, it guards the graph construction.
    let passages = graph.edge_count();
    if passages != total - 1 {
        bail!(ErrorKind::PassageCount(passages, total - 1));
    }

    Ok(())
}

fn first_asymmetric_cell(grid: &WallGrid) -> Option<CellCoordinate> {
    grid.iter().find(|coord| {
        [Direction::Down, Direction::Right].iter().any(|dir| {
            grid.neighbour_at_direction(*coord, *dir).map_or(false, |neighbour| {
                grid.has_wall(*coord, *dir) != grid.has_wall(neighbour, dir.opposite())
            })
        })
    })
}

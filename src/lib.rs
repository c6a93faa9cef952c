//! **maze_walk** carves perfect mazes with an interruptible random walk and lays them out
//! as text, images or 3D blocks.
//!
//! ```
//! use maze_walk::{carver::MazeCarver, random, units::GridSize, verify};
//!
//! let mut carver = MazeCarver::new(GridSize(8), random::seeded_rng(1)).unwrap();
//! while !carver.is_complete() {
//!     carver.step();
//! }
//! assert!(verify::is_spanning_tree(carver.grid()));
//! ```

pub mod carver;
pub mod cells;
pub mod driver;
pub mod errors;
pub mod grid;
pub mod grid_displays;
pub mod layout;
pub mod random;
pub mod renderers;
pub mod units;
pub mod verify;

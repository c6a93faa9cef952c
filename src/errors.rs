// Create the Error, ErrorKind, ResultExt, and Result types
// Result is a typedef of std `Result` with the error type our own `Error`
// Defines the From conversions that let ? work for our `Error`.
// ResultExt adds the `chain_err` trait method.
#![allow(deprecated)]

pub use error_chain::bail;
use error_chain::*;

error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Image(::image::ImageError);
    }

    errors {
        InvalidSize(size: usize) {
            description("invalid grid size")
            display("invalid grid size {}: must be at least 1 and at most u32::MAX cells per side", size)
        }
        InvalidCellPixels(pixels: u32) {
            description("invalid cell pixel size")
            display("invalid cell pixel size {}: must be at least 2", pixels)
        }
        AsymmetricWall(column: u32, row: u32) {
            description("adjacent cells disagree about their shared wall")
            display("cell ({}, {}) disagrees with a neighbour about their shared wall", column, row)
        }
        CyclicPassages {
            description("the carved passages contain a cycle")
            display("the carved passages contain a cycle")
        }
        DisconnectedCells(reachable: usize, total: usize) {
            description("not every cell is reachable")
            display("only {} of {} cells are reachable", reachable, total)
        }
        PassageCount(found: usize, expected: usize) {
            description("wrong number of carved passages")
            display("found {} carved passages, a spanning tree needs {}", found, expected)
        }
    }
}

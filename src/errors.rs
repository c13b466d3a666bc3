//! Crate wide `Error`, `ErrorKind`, `ResultExt` and `Result` types, generated by `error_chain!`.
//!
//! Construction problems (bad dimensions, coordinates off the grid) and contract violations
//! (querying a path that was never carved, malformed wall pairs) each get their own kind so
//! callers can tell them apart.

use error_chain::error_chain;

use crate::grid::CellLinkError;

error_chain! {
    errors {
        InvalidDimensions(columns: usize, rows: usize) {
            description("invalid grid dimensions")
            display("grid dimensions must be at least 1x1, got {}x{}", columns, rows)
        }
        GridTooLarge(cells: usize, max: usize) {
            description("grid too large for its index type")
            display("a grid of {} cells cannot be indexed, the maximum is {}", cells, max)
        }
        CoordinateOutOfBounds(x: u32, y: u32) {
            description("coordinate outside of the grid")
            display("coordinate ({}, {}) is outside of the grid", x, y)
        }
        CellLink(reason: CellLinkError) {
            description("invalid wall between cells")
            display("cannot clear wall: {}", reason)
        }
        IncompleteCoordinate(x: Option<u32>, y: Option<u32>) {
            description("coordinate needs both x and y")
            display("a coordinate needs both x and y, got x: {:?}, y: {:?}", x, y)
        }
        GridAlreadyCarved(passages: usize) {
            description("grid already has passages")
            display("maze generation needs a fresh grid, this one already has {} passages", passages)
        }
        Unreachable(x: u32, y: u32) {
            description("cell not reachable from the start")
            display("no distance recorded for ({}, {}), it is not reachable from the start", x, y)
        }
        InconsistentDistances(x: u32, y: u32) {
            description("distances do not match the grid")
            display("no linked neighbour of ({}, {}) is closer to the start", x, y)
        }
    }
}

impl From<CellLinkError> for Error {
    fn from(reason: CellLinkError) -> Error {
        ErrorKind::CellLink(reason).into()
    }
}

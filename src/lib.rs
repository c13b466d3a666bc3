//! **perfect_maze** generates perfect mazes with a randomized depth-first backtracker and finds the
//! shortest path between two of their cells.

pub mod cells;
pub mod config;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod grids;
pub mod maze;
pub mod pathing;
pub mod units;
mod utils;

pub use crate::config::MazeConfig;
pub use crate::maze::Maze;

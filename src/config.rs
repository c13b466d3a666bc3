use error_chain::bail;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::units::{ColumnsCount, RowsCount};

pub const DEFAULT_COLUMNS: usize = 16;
pub const DEFAULT_ROWS: usize = 16;

/// Construction parameters of a `Maze`.
///
/// An unset start is the top left cell and an unset end is the bottom right cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub columns: usize,
    pub rows: usize,
    pub start: Option<(u32, u32)>,
    pub end: Option<(u32, u32)>,
}

/// Pair up separately supplied x and y values.
///
/// Neither given is no coordinate at all; only one of them given is an error.
pub fn coordinate_from_parts(x: Option<u32>, y: Option<u32>) -> Result<Option<GridCoordinate>> {
    match (x, y) {
        (Some(x), Some(y)) => Ok(Some(GridCoordinate::new(x, y))),
        (None, None) => Ok(None),
        _ => bail!(ErrorKind::IncompleteCoordinate(x, y)),
    }
}

/// A `MazeConfig` that passed `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub columns: ColumnsCount,
    pub rows: RowsCount,
    pub start: GridCoordinate,
    pub end: GridCoordinate,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig::new(DEFAULT_COLUMNS, DEFAULT_ROWS)
    }
}

impl MazeConfig {
    pub fn new(columns: usize, rows: usize) -> MazeConfig {
        MazeConfig {
            columns,
            rows,
            start: None,
            end: None,
        }
    }

    pub fn with_start(mut self, start: GridCoordinate) -> MazeConfig {
        self.start = Some((start.x, start.y));
        self
    }

    pub fn with_end(mut self, end: GridCoordinate) -> MazeConfig {
        self.end = Some((end.x, end.y));
        self
    }

    /// Check dimensions and resolve the start and end cells.
    ///
    /// Start and end may be the same cell when given explicitly; only randomised placement keeps
    /// them apart.
    pub fn validate(&self) -> Result<ValidatedConfig> {
        if self.columns == 0 || self.rows == 0 {
            bail!(ErrorKind::InvalidDimensions(self.columns, self.rows));
        }
        let max_side = u32::max_value() as usize;
        if self.columns > max_side || self.rows > max_side {
            bail!(ErrorKind::GridTooLarge(self.columns.saturating_mul(self.rows), max_side));
        }

        let last_column = (self.columns - 1) as u32;
        let last_row = (self.rows - 1) as u32;
        let start = self.start.map_or(GridCoordinate::new(0, 0), GridCoordinate::from);
        let end = self.end.map_or(GridCoordinate::new(last_column, last_row), GridCoordinate::from);

        for coord in [start, end].iter() {
            if coord.x > last_column || coord.y > last_row {
                bail!(ErrorKind::CoordinateOutOfBounds(coord.x, coord.y));
            }
        }

        Ok(ValidatedConfig {
            columns: ColumnsCount(self.columns),
            rows: RowsCount(self.rows),
            start,
            end,
        })
    }
}

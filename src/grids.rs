use crate::errors::*;
use crate::grid::Grid;
use crate::grid_dimensions::RectGridDimensions;
use crate::units::{ColumnsCount, RowsCount};

pub type SmallRectangularGrid = Grid<u8>;
pub type MediumRectangularGrid = Grid<u16>;
pub type LargeRectangularGrid = Grid<u32>;

/// Up to 255 cells.
pub fn small_rect_grid(columns: ColumnsCount, rows: RowsCount) -> Result<SmallRectangularGrid> {
    SmallRectangularGrid::new(RectGridDimensions::new(columns, rows))
}

pub fn medium_rect_grid(columns: ColumnsCount, rows: RowsCount) -> Result<MediumRectangularGrid> {
    MediumRectangularGrid::new(RectGridDimensions::new(columns, rows))
}

pub fn large_rect_grid(columns: ColumnsCount, rows: RowsCount) -> Result<LargeRectangularGrid> {
    LargeRectangularGrid::new(RectGridDimensions::new(columns, rows))
}

use std::fmt;

use crate::cells::GridCoordinate;
use crate::grid_dimensions::RectGridDimensions;
use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};


#[derive(Clone)]
pub struct CellIter {
    columns: ColumnsCount,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub fn new(dimensions: &RectGridDimensions) -> CellIter {
        CellIter {
            columns: dimensions.columns(),
            current_cell_number: 0,
            cells_count: dimensions.size().0,
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = GridCoordinate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = GridCoordinate::from_row_major_index(self.current_cell_number,
                                                             self.columns);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        (lower_bound, Some(lower_bound))
    }
}

/// Iterates the grid one row at a time, top to bottom.
#[derive(Debug, Copy, Clone)]
pub struct RowIter {
    current_row: usize,
    columns: ColumnsCount,
    rows: RowsCount,
}

impl RowIter {
    pub fn new(dimensions: &RectGridDimensions) -> RowIter {
        RowIter {
            current_row: 0,
            columns: dimensions.columns(),
            rows: dimensions.rows(),
        }
    }
}

impl ExactSizeIterator for RowIter {}
impl Iterator for RowIter {
    type Item = Vec<GridCoordinate>;
    fn next(&mut self) -> Option<Self::Item> {
        let RowsCount(count) = self.rows;
        if self.current_row < count {
            let ColumnsCount(length) = self.columns;
            let coords = (0..length)
                .map(|i: usize| {
                    GridCoordinate::from_row_column_indices(ColumnIndex(i),
                                                            RowIndex(self.current_row))
                })
                .collect();
            self.current_row += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows.0 - self.current_row;
        (remaining, Some(remaining))
    }
}

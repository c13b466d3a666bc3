use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};


#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RectGridDimensions {
    columns: ColumnsCount,
    rows: RowsCount,
}

impl RectGridDimensions {
    pub fn new(columns: ColumnsCount, rows: RowsCount) -> RectGridDimensions {
        RectGridDimensions { columns, rows }
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.columns.0 * self.rows.0)
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// Node count and an upper bound on the number of passages: every interior wall cleared.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let (ColumnsCount(w), RowsCount(h)) = (self.columns, self.rows);
        let interior_walls = w.saturating_sub(1) * h + w * h.saturating_sub(1);
        (self.size(), EdgesCount(interior_walls))
    }
}

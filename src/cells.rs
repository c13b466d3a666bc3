use std::convert::From;
use std::fmt;

use smallvec::SmallVec;

use crate::units::{ColumnIndex, ColumnsCount, RowIndex};

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;
pub type CoordinateOptionSmallVec = SmallVec<[Option<GridCoordinate>; 4]>;

/// A cell position on a rectangular grid. `x` is the column, `y` the row, `(0, 0)` is the top left.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub x: u32,
    pub y: u32,
}

impl GridCoordinate {
    pub fn new(x: u32, y: u32) -> GridCoordinate {
        GridCoordinate { x, y }
    }

    #[inline]
    pub fn from_row_major_index(index: usize, columns: ColumnsCount) -> GridCoordinate {
        let ColumnsCount(width) = columns;
        GridCoordinate::new((index % width) as u32, (index / width) as u32)
    }

    #[inline]
    pub fn from_row_column_indices(col_index: ColumnIndex, row_index: RowIndex) -> GridCoordinate {
        let (ColumnIndex(col), RowIndex(row)) = (col_index, row_index);
        GridCoordinate::new(col as u32, row as u32)
    }

    /// The coordinate one step away in `dir`, or None if that would go below zero.
    /// No upper bound check is made here, the grid knows its own size.
    pub fn offset(self, dir: Direction) -> Option<GridCoordinate> {
        let (x, y) = (self.x, self.y);
        match dir {
            Direction::Left => x.checked_sub(1).map(|x| GridCoordinate::new(x, y)),
            Direction::Right => x.checked_add(1).map(|x| GridCoordinate::new(x, y)),
            Direction::Up => y.checked_sub(1).map(|y| GridCoordinate::new(x, y)),
            Direction::Down => y.checked_add(1).map(|y| GridCoordinate::new(x, y)),
        }
    }

    /// Which direction leads from `self` to `other`, if they are exactly one step apart on one axis.
    pub fn direction_to(self, other: GridCoordinate) -> Option<Direction> {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        match (dx, dy) {
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            _ => None,
        }
    }
}

impl From<(u32, u32)> for GridCoordinate {
    fn from(x_y_pair: (u32, u32)) -> GridCoordinate {
        GridCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Neighbour examination order used everywhere on the grid.
pub const DIRECTIONS: [Direction; 4] = [Direction::Left,
                                        Direction::Right,
                                        Direction::Up,
                                        Direction::Down];

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Per cell view of the four walls. `true` means the wall is standing.
///
/// This is derived from the grid's passages, it is never stored, so the view from each side of a
/// shared wall always agrees.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Walls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Walls {
    pub fn all_standing() -> Walls {
        Walls {
            left: true,
            right: true,
            up: true,
            down: true,
        }
    }

    pub fn is_standing(&self, dir: Direction) -> bool {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }
}

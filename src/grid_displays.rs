use std::fmt;

use crate::cells::{Direction, GridCoordinate};
use crate::grid::{Grid, IndexType};
use crate::maze::Maze;
use crate::pathing::Distances;
use crate::utils::{self, FnvHashSet};

const BLANK_CELL_BODY: &str = "   ";

/// Text drawn inside a cell, three characters wide.
pub trait GridDisplay {
    fn render_cell_body(&self, _: GridCoordinate) -> String {
        String::from(BLANK_CELL_BODY)
    }
}

/// Empty cell bodies, only the walls are drawn.
#[derive(Debug, Copy, Clone, Default)]
pub struct WallsOnly;
impl GridDisplay for WallsOnly {}

impl GridDisplay for Distances {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if let Some(d) = self.distance_from_start_to(coord) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from(BLANK_CELL_BODY)
        }
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<GridCoordinate>,
}
impl PathDisplay {
    pub fn new(path: &[GridCoordinate]) -> Self {
        let mut on_path_coordinates = utils::fnv_hashset(path.len());
        on_path_coordinates.extend(path.iter().cloned());
        PathDisplay { on_path_coordinates }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from(BLANK_CELL_BODY)
        }
    }
}

#[derive(Debug)]
pub struct StartEndPointsDisplay {
    start: GridCoordinate,
    end: GridCoordinate,
}
impl StartEndPointsDisplay {
    pub fn new(start: GridCoordinate, end: GridCoordinate) -> StartEndPointsDisplay {
        StartEndPointsDisplay { start, end }
    }
}
impl GridDisplay for StartEndPointsDisplay {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        if coord == self.start {
            String::from(" S ")
        } else if coord == self.end {
            String::from(" E ")
        } else {
            String::from(BLANK_CELL_BODY)
        }
    }
}

/// Layered displays, the first one that draws something in a cell wins.
impl<A: GridDisplay, B: GridDisplay> GridDisplay for (A, B) {
    fn render_cell_body(&self, coord: GridCoordinate) -> String {
        let top = self.0.render_cell_body(coord);
        if top.trim().is_empty() {
            self.1.render_cell_body(coord)
        } else {
            top
        }
    }
}

/// A grid paired with the cell bodies to draw in it, ready for `format!`.
pub struct GridText<'a, GridIndexType: IndexType, D: GridDisplay + ?Sized> {
    grid: &'a Grid<GridIndexType>,
    cells: &'a D,
}

impl<GridIndexType: IndexType> Grid<GridIndexType> {
    pub fn text_with<'a, D: GridDisplay + ?Sized>(&'a self,
                                                  cells: &'a D)
                                                  -> GridText<'a, GridIndexType, D> {
        GridText { grid: self, cells }
    }
}

impl<GridIndexType: IndexType> fmt::Display for Grid<GridIndexType> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text_with(&WallsOnly))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cells = (StartEndPointsDisplay::new(self.start(), self.end()),
                     PathDisplay::new(self.shortest_path()));
        write!(f, "{}", self.grid().text_with(&cells))
    }
}

impl<'a, GridIndexType, D> fmt::Display for GridText<'a, GridIndexType, D>
    where GridIndexType: IndexType,
          D: GridDisplay + ?Sized
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";

        let grid = self.grid;
        let columns_count = grid.columns().0;
        let rows_count = grid.rows().0;

        // The top boundary is drawn up front, every row then draws its own middle and bottom.
        let mut output = String::from(WALL_RD);
        if let Some(first_grid_row) = grid.iter_row().next() {
            for (index, coord) in first_grid_row.iter().enumerate() {
                output.push_str(WALL_LR_3);
                if grid.is_neighbour_linked(*coord, Direction::Right) {
                    output.push_str(WALL_LR);
                } else if index == columns_count - 1 {
                    output.push_str(WALL_LD);
                } else {
                    output.push_str(WALL_LRD);
                }
            }
        }
        output.push('\n');

        for (index_row, row) in grid.iter_row().enumerate() {
            let is_last_row = index_row == rows_count - 1;

            let mut row_middle_section_render = String::from(WALL_UD);
            let mut row_bottom_section_render = String::new();

            for (index_column, cell_coord) in row.into_iter().enumerate() {
                let is_first_column = index_column == 0;
                let is_last_column = index_column == columns_count - 1;
                let right_open = grid.is_neighbour_linked(cell_coord, Direction::Right);
                let down_open = grid.is_neighbour_linked(cell_coord, Direction::Down);

                row_middle_section_render.push_str(&self.cells.render_cell_body(cell_coord));
                row_middle_section_render.push_str(if right_open { " " } else { WALL_UD });

                if is_first_column {
                    row_bottom_section_render = String::from(if is_last_row {
                        WALL_RU
                    } else if down_open {
                        WALL_UD
                    } else {
                        WALL_RUD
                    });
                }
                row_bottom_section_render.push_str(if down_open { "   " } else { WALL_LR_3 });

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => if right_open { WALL_LR } else { WALL_LRU },
                    (false, true) => if down_open { WALL_UD } else { WALL_LUD },
                    (false, false) => {
                        let right_and_below = grid.neighbours_at_directions(cell_coord,
                                                                            &[Direction::Right,
                                                                              Direction::Down]);
                        let across_from_right = right_and_below[0]
                            .map_or(false, |c| grid.is_neighbour_linked(c, Direction::Down));
                        let across_from_below = right_and_below[1]
                            .map_or(false, |c| grid.is_neighbour_linked(c, Direction::Right));
                        let show_left_section = !down_open;
                        let show_right_section = !across_from_right;
                        let show_up_section = !right_open;
                        let show_down_section = !across_from_below;

                        match (show_left_section,
                               show_right_section,
                               show_up_section,
                               show_down_section) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            (false, false, false, false) => " ",
                        }
                    }
                };
                row_bottom_section_render.push_str(corner);
            }

            output.push_str(&row_middle_section_render);
            output.push('\n');
            output.push_str(&row_bottom_section_render);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}

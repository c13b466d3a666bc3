use std::fmt;
use std::slice;

use petgraph::graph;
pub use petgraph::graph::IndexType;
use petgraph::{Graph, Undirected};
use error_chain::bail;
use rand::Rng;

use crate::cells::{CoordinateOptionSmallVec, CoordinateSmallVec, Direction, GridCoordinate, Walls,
                   DIRECTIONS};
use crate::errors::*;
use crate::grid_dimensions::RectGridDimensions;
use crate::grid_iterators::{CellIter, RowIter};
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};


/// A rectangular grid of cells where every cleared wall is an undirected edge of a graph.
///
/// Each wall between two adjacent cells is stored exactly once, as the presence or absence of an
/// edge, so the two cells always agree about it. `clear_wall_between` is the only way to mutate
/// the walls; a grid is never un-carved, it is replaced with a fresh one instead.
pub struct Grid<GridIndexType: IndexType> {
    graph: Graph<(), (), Undirected, GridIndexType>,
    dimensions: RectGridDimensions,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellLinkError {
    InvalidGridCoordinate,
    SelfLink,
    NotAdjacent,
}

impl fmt::Display for CellLinkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reason = match *self {
            CellLinkError::InvalidGridCoordinate => "a coordinate is outside of the grid",
            CellLinkError::SelfLink => "a cell has no wall with itself",
            CellLinkError::NotAdjacent => "the cells are not adjacent",
        };
        write!(f, "{}", reason)
    }
}

impl<GridIndexType: IndexType> fmt::Debug for Grid<GridIndexType> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: graph: {:?}, columns: {:?}, rows: {:?}",
               self.graph, self.columns(), self.rows())
    }
}

impl<GridIndexType: IndexType> Grid<GridIndexType> {
    /// Creates a grid with every wall standing.
    ///
    /// Fails if either dimension is zero or the grid has more cells than `GridIndexType` can index.
    pub fn new(dimensions: RectGridDimensions) -> Result<Grid<GridIndexType>> {

        let (ColumnsCount(columns), RowsCount(rows)) = (dimensions.columns(), dimensions.rows());
        if columns == 0 || rows == 0 {
            bail!(ErrorKind::InvalidDimensions(columns, rows));
        }

        let max_cells = <GridIndexType as IndexType>::max().index();
        let cells_count = columns.checked_mul(rows)
            .ok_or_else(|| Error::from(ErrorKind::GridTooLarge(usize::max_value(), max_cells)))?;
        if cells_count > max_cells {
            bail!(ErrorKind::GridTooLarge(cells_count, max_cells));
        }
        let max_side = u32::max_value() as usize;
        if columns > max_side || rows > max_side {
            bail!(ErrorKind::GridTooLarge(cells_count, max_side));
        }

        let (NodesCount(nodes), EdgesCount(edges)) = dimensions.graph_size();
        let mut graph = Graph::with_capacity(nodes, edges);
        for _ in 0..nodes {
            let _ = graph.add_node(());
        }

        Ok(Grid { graph, dimensions })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.dimensions.columns()
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    /// Number of cleared walls (passages) in the grid.
    #[inline]
    pub fn links_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> GridCoordinate {
        let index = rng.gen_range(0..self.size());
        GridCoordinate::from_row_major_index(index, self.columns())
    }

    /// Clear the wall shared by two adjacent cells.
    ///
    /// Clearing an already cleared wall is a no-op. Both cells see the change since the wall is
    /// stored once.
    pub fn clear_wall_between(&mut self,
                              a: GridCoordinate,
                              b: GridCoordinate)
                              -> ::std::result::Result<(), CellLinkError> {
        if a == b {
            return Err(CellLinkError::SelfLink);
        }
        let (a_index, b_index) = match (self.grid_coordinate_graph_index(a),
                                        self.grid_coordinate_graph_index(b)) {
            (Some(a_index), Some(b_index)) => (a_index, b_index),
            _ => return Err(CellLinkError::InvalidGridCoordinate),
        };
        if a.direction_to(b).is_none() {
            return Err(CellLinkError::NotAdjacent);
        }

        let _ = self.graph.update_edge(a_index, b_index, ());
        Ok(())
    }

    /// Cells that are linked to a particular cell by a passage.
    pub fn links(&self, coord: GridCoordinate) -> Option<CoordinateSmallVec> {
        self.grid_coordinate_graph_index(coord).map(|graph_node_index| {
            self.graph
                .neighbors(graph_node_index)
                .map(|node_index| {
                    GridCoordinate::from_row_major_index(node_index.index(), self.columns())
                })
                .collect()
        })
    }

    /// Cells to the left, right, above and below a particular cell (in that order), but not
    /// necessarily linked by a passage.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        DIRECTIONS.iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    pub fn neighbours_at_directions(&self,
                                    coord: GridCoordinate,
                                    dirs: &[Direction])
                                    -> CoordinateOptionSmallVec {
        dirs.iter()
            .map(|direction| self.neighbour_at_direction(coord, *direction))
            .collect()
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: Direction)
                                  -> Option<GridCoordinate> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        coord.offset(direction).filter(|neighbour| self.is_valid_coordinate(*neighbour))
    }

    /// Are two cells in the grid linked?
    pub fn is_linked(&self, a: GridCoordinate, b: GridCoordinate) -> bool {
        if let (Some(a_index), Some(b_index)) = (self.grid_coordinate_graph_index(a),
                                                 self.grid_coordinate_graph_index(b)) {
            self.graph.find_edge(a_index, b_index).is_some()
        } else {
            false
        }
    }

    pub fn is_neighbour_linked(&self, coord: GridCoordinate, direction: Direction) -> bool {
        self.neighbour_at_direction(coord, direction)
            .map_or(false, |neighbour_coord| self.is_linked(coord, neighbour_coord))
    }

    /// Is the wall on the `direction` side of `coord` standing? The outer boundary always is.
    #[inline]
    pub fn has_wall(&self, coord: GridCoordinate, direction: Direction) -> bool {
        !self.is_neighbour_linked(coord, direction)
    }

    /// The four walls of a cell, None if the coordinate is not on the grid.
    pub fn walls(&self, coord: GridCoordinate) -> Option<Walls> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        Some(Walls {
            left: self.has_wall(coord, Direction::Left),
            right: self.has_wall(coord, Direction::Right),
            up: self.has_wall(coord, Direction::Up),
            down: self.has_wall(coord, Direction::Down),
        })
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            let ColumnsCount(row_size) = self.columns();
            Some((coord.y as usize * row_size) + coord.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(&self.dimensions)
    }

    #[inline]
    pub fn iter_row(&self) -> RowIter {
        RowIter::new(&self.dimensions)
    }

    pub fn iter_links(&self) -> LinksIter<'_, GridIndexType> {
        LinksIter {
            graph_edge_iter: self.graph.raw_edges().iter(),
            columns: self.columns(),
        }
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        (coord.x as usize) < self.columns().0 && (coord.y as usize) < self.rows().0
    }

    /// Convert a grid coordinate into petgraph nodeindex
    /// Returns None if the grid coordinate is invalid (out of the grid's dimensions).
    #[inline]
    fn grid_coordinate_graph_index(&self,
                                   coord: GridCoordinate)
                                   -> Option<graph::NodeIndex<GridIndexType>> {
        self.grid_coordinate_to_index(coord).map(graph::NodeIndex::<GridIndexType>::new)
    }
}

/// Every passage in the grid once, as the pair of cells it joins.
pub struct LinksIter<'a, GridIndexType: IndexType> {
    graph_edge_iter: slice::Iter<'a, graph::Edge<(), GridIndexType>>,
    columns: ColumnsCount,
}

impl<'a, GridIndexType: IndexType> Iterator for LinksIter<'a, GridIndexType> {
    type Item = (GridCoordinate, GridCoordinate);

    fn next(&mut self) -> Option<Self::Item> {
        let columns = self.columns;
        self.graph_edge_iter.next().map(|edge| {
            (GridCoordinate::from_row_major_index(edge.source().index(), columns),
             GridCoordinate::from_row_major_index(edge.target().index(), columns))
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.graph_edge_iter.size_hint()
    }
}
impl<'a, GridIndexType: IndexType> ExactSizeIterator for LinksIter<'a, GridIndexType> {} // default impl using size_hint()

impl<'a, GridIndexType: IndexType> fmt::Debug for LinksIter<'a, GridIndexType> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LinksIter :: edges iter : {:?}", self.graph_edge_iter)
    }
}

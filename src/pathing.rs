use error_chain::bail;
use itertools::Itertools;
use smallvec::SmallVec;
use tracing::debug;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::grid::{Grid, IndexType};
use crate::utils;
use crate::utils::FnvHashMap;


/// Steps from a start cell to every cell reachable from it by passages.
///
/// Labels are assigned by a depth first walk with an explicit stack, each cell getting the depth
/// at which it is first reached. On a perfect maze there is exactly one route to each cell, so the
/// depth is also the shortest distance. Cells that are not reachable have no label.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: GridCoordinate,
    distances: FnvHashMap<GridCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    pub fn for_grid<GridIndexType>(grid: &Grid<GridIndexType>,
                                   start_coordinate: GridCoordinate)
                                   -> Result<Distances>
        where GridIndexType: IndexType
    {
        if !grid.is_valid_coordinate(start_coordinate) {
            bail!(ErrorKind::CoordinateOutOfBounds(start_coordinate.x, start_coordinate.y));
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(grid.size());
        distances.insert(start_coordinate, 0);

        // The distances map doubles as the visited set.
        let mut stack = vec![(start_coordinate, 0u32)];
        while let Some((cell_coord, distance_to_cell)) = stack.pop() {

            if distance_to_cell > max {
                max = distance_to_cell;
            }

            if let Some(links) = grid.links(cell_coord) {
                for link_coordinate in links.iter() {
                    if !distances.contains_key(link_coordinate) {
                        distances.insert(*link_coordinate, distance_to_cell + 1);
                        stack.push((*link_coordinate, distance_to_cell + 1));
                    }
                }
            }
        }

        Ok(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> GridCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// Number of cells reached from the start, including the start itself.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: GridCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    /// All cells at the maximum distance, in row major order.
    pub fn furthest_points_on_grid(&self) -> SmallVec<[GridCoordinate; 8]> {
        let furthest_distance = self.max();
        self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(coord, _)| *coord)
            .sorted_by_key(|coord| (coord.y, coord.x))
            .collect()
    }
}

/// The route from the distances' start cell to `end_point`, both ends included, ordered start
/// first.
///
/// Walks back from `end_point`, always stepping to the linked neighbour closest to the start,
/// until distance zero is reached. The number of steps is `distance_from_start_to(end_point)`.
///
/// Fails if `end_point` is off the grid, has no distance (nothing was carved yet, or it is
/// walled off from the start), or if `distances_from_start` was computed for some other grid.
pub fn shortest_path<GridIndexType>(grid: &Grid<GridIndexType>,
                                    distances_from_start: &Distances,
                                    end_point: GridCoordinate)
                                    -> Result<Vec<GridCoordinate>>
    where GridIndexType: IndexType
{
    if !grid.is_valid_coordinate(end_point) {
        bail!(ErrorKind::CoordinateOutOfBounds(end_point.x, end_point.y));
    }

    let end_distance = distances_from_start.distance_from_start_to(end_point)
        .ok_or_else(|| Error::from(ErrorKind::Unreachable(end_point.x, end_point.y)))?;

    let mut path = Vec::with_capacity(end_distance as usize + 1);
    path.push(end_point);
    let mut current_coord = end_point;
    let mut current_distance_to_start = end_distance;

    while current_distance_to_start > 0 {

        let closest_to_start = grid.links(current_coord)
            .unwrap_or_default()
            .iter()
            .filter_map(|coord| {
                distances_from_start.distance_from_start_to(*coord).map(|d| (*coord, d))
            })
            .min_by_key(|&(_, distance)| distance);

        match closest_to_start {
            Some((closer_coord, closer_distance)) if closer_distance < current_distance_to_start => {
                current_coord = closer_coord;
                current_distance_to_start = closer_distance;
                path.push(current_coord);
            }
            _ => bail!(ErrorKind::InconsistentDistances(current_coord.x, current_coord.y)),
        }
    }

    if current_coord != distances_from_start.start() {
        bail!(ErrorKind::InconsistentDistances(current_coord.x, current_coord.y));
    }

    path.reverse();
    Ok(path)
}

/// The longest route through a perfect maze.
///
/// The cell furthest from any cell is one end of a longest path, and the cell furthest from that
/// is the other end. On a grid with loops or walled off regions this is just some long path.
pub fn longest_path<GridIndexType>(grid: &Grid<GridIndexType>) -> Result<Vec<GridCoordinate>>
    where GridIndexType: IndexType
{
    let arbitrary_start_point = GridCoordinate::new(0, 0);
    let first_distances = Distances::for_grid(grid, arbitrary_start_point)?;

    let long_path_start_coordinate = first_distances.furthest_points_on_grid()
        .first()
        .cloned()
        .unwrap_or(arbitrary_start_point);

    let distances_from_start = Distances::for_grid(grid, long_path_start_coordinate)?;
    let end_point = distances_from_start.furthest_points_on_grid()
        .first()
        .cloned()
        .unwrap_or(long_path_start_coordinate);

    debug!("longest path runs from {} to {}, {} steps",
           long_path_start_coordinate,
           end_point,
           distances_from_start.max());
    shortest_path(grid, &distances_from_start, end_point)
}

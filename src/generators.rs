use bit_set::BitSet;
use error_chain::bail;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::cells::{CoordinateSmallVec, GridCoordinate};
use crate::errors::*;
use crate::grid::{Grid, IndexType};

/// Apply the recursive backtracker maze generation algorithm to a grid, starting at `start`.
///
/// A randomised depth first walk: from the cell on top of the stack, carve a passage into a
/// random unvisited neighbour and push it. With no unvisited neighbours left, pop back to the
/// previous cell. When the stack empties every cell has been visited exactly once and the
/// passages form a spanning tree, i.e. a perfect maze with exactly one route between any two
/// cells.
///
/// The stack lives on the heap, so grids far larger than the thread's call stack allows for a
/// recursive walk are fine. The result depends only on the grid size, `start` and the state of
/// `rng`, so a seeded generator always makes the same maze.
///
/// Returns the number of passages carved, `grid.size() - 1`.
///
/// Fails if `start` is not on the grid, or if the grid already has passages.
pub fn recursive_backtracker<GridIndexType, R>(grid: &mut Grid<GridIndexType>,
                                               start: GridCoordinate,
                                               rng: &mut R)
                                               -> Result<usize>
    where GridIndexType: IndexType,
          R: Rng
{
    let start_index = grid.grid_coordinate_to_index(start)
        .ok_or_else(|| Error::from(ErrorKind::CoordinateOutOfBounds(start.x, start.y)))?;
    if grid.links_count() > 0 {
        bail!(ErrorKind::GridAlreadyCarved(grid.links_count()));
    }

    let mut visited = BitSet::with_capacity(grid.size());
    visited.insert(start_index);

    let mut stack = Vec::with_capacity(grid.size());
    stack.push(start);
    let mut carved = 0;

    while let Some(&current) = stack.last() {

        let unvisited_neighbours = grid.neighbours(current)
            .iter()
            .cloned()
            .filter(|neighbour| {
                grid.grid_coordinate_to_index(*neighbour)
                    .map_or(false, |index| !visited.contains(index))
            })
            .collect::<CoordinateSmallVec>();

        if let Some(&next) = unvisited_neighbours.choose(rng) {
            grid.clear_wall_between(current, next)?;
            if let Some(next_index) = grid.grid_coordinate_to_index(next) {
                visited.insert(next_index);
            }
            stack.push(next);
            carved += 1;
        } else {
            trace!("dead end at {}, backtracking from depth {}", current, stack.len());
            stack.pop();
        }
    }

    debug!("recursive backtracker carved {} passages from {} over {} cells",
           carved,
           start,
           grid.size());
    Ok(carved)
}


#[cfg(test)]
mod tests {

    use std::collections::VecDeque;

    use quickcheck::{quickcheck, TestResult};
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::cells::DIRECTIONS;
    use crate::grids::{medium_rect_grid, small_rect_grid, MediumRectangularGrid};
    use crate::units::{ColumnsCount, RowsCount};

    fn carved_grid(w: usize, h: usize, start: GridCoordinate, seed: u64) -> MediumRectangularGrid {
        let mut g = medium_rect_grid(ColumnsCount(w), RowsCount(h)).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(seed);
        recursive_backtracker(&mut g, start, &mut rng).expect("generation failed");
        g
    }

    /// Breadth first walk over passages from the top left, failing on any cycle.
    /// Returns the number of cells reached.
    fn reachable_without_cycles(g: &MediumRectangularGrid) -> usize {
        let origin = GridCoordinate::new(0, 0);
        let mut parents = vec![None; g.size()];
        let mut seen = vec![false; g.size()];
        let mut queue = VecDeque::new();
        seen[0] = true;
        queue.push_back(origin);
        let mut reached = 0;

        while let Some(cell) = queue.pop_front() {
            reached += 1;
            for link in g.links(cell).unwrap().iter() {
                if parents[g.grid_coordinate_to_index(cell).unwrap()] == Some(*link) {
                    continue;
                }
                let link_index = g.grid_coordinate_to_index(*link).unwrap();
                assert!(!seen[link_index], "cycle through {:?}", link);
                seen[link_index] = true;
                parents[link_index] = Some(cell);
                queue.push_back(*link);
            }
        }
        reached
    }

    fn assert_perfect_maze(g: &MediumRectangularGrid) {
        assert_eq!(g.links_count(), g.size() - 1);
        assert_eq!(reachable_without_cycles(g), g.size());
    }

    #[test]
    fn spanning_tree_over_many_sizes() {
        for &(w, h) in &[(1, 1), (1, 2), (2, 1), (2, 2), (3, 7), (16, 16), (32, 5)] {
            for seed in 0..8 {
                let g = carved_grid(w, h, GridCoordinate::new(0, 0), seed);
                assert_perfect_maze(&g);
            }
        }
    }

    #[test]
    fn any_start_cell_gives_a_perfect_maze() {
        let g = carved_grid(6, 4, GridCoordinate::new(5, 3), 11);
        assert_perfect_maze(&g);
        let g = carved_grid(6, 4, GridCoordinate::new(2, 1), 12);
        assert_perfect_maze(&g);
    }

    #[test]
    fn returns_carved_passage_count() {
        let mut g = medium_rect_grid(ColumnsCount(5), RowsCount(5)).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(3);
        let carved = recursive_backtracker(&mut g, GridCoordinate::new(0, 0), &mut rng).unwrap();
        assert_eq!(carved, 24);
        assert_eq!(carved, g.links_count());
    }

    #[test]
    fn single_cell_grid_has_nothing_to_carve() {
        let mut g = small_rect_grid(ColumnsCount(1), RowsCount(1)).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(0);
        let carved = recursive_backtracker(&mut g, GridCoordinate::new(0, 0), &mut rng).unwrap();
        assert_eq!(carved, 0);
        assert_eq!(g.links_count(), 0);
    }

    #[test]
    fn two_by_two_has_three_passages() {
        for seed in 0..16 {
            let g = carved_grid(2, 2, GridCoordinate::new(0, 0), seed);
            assert_eq!(g.links_count(), 3);
        }
    }

    #[test]
    fn walls_are_symmetric() {
        let g = carved_grid(9, 6, GridCoordinate::new(4, 4), 99);
        for coord in g.iter() {
            for dir in DIRECTIONS.iter() {
                if let Some(neighbour) = g.neighbour_at_direction(coord, *dir) {
                    assert_eq!(g.has_wall(coord, *dir), g.has_wall(neighbour, dir.opposite()));
                }
            }
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let walls_of = |g: &MediumRectangularGrid| g.iter().map(|c| g.walls(c).unwrap()).collect::<Vec<_>>();
        let first = carved_grid(4, 4, GridCoordinate::new(0, 0), 0x5eed);
        let second = carved_grid(4, 4, GridCoordinate::new(0, 0), 0x5eed);
        assert_eq!(walls_of(&first), walls_of(&second));
        assert_eq!(first.iter_links().collect::<Vec<_>>(), second.iter_links().collect::<Vec<_>>());
    }

    #[test]
    fn seeded_4x4_carving_order() {
        let g = carved_grid(4, 4, GridCoordinate::new(0, 0), 0x5eed);
        let passages = g.iter_links()
            .map(|(a, b)| ((a.x, a.y), (b.x, b.y)))
            .collect::<Vec<_>>();
        let expected = vec![((0, 0), (1, 0)), ((1, 0), (1, 1)), ((1, 1), (0, 1)), ((0, 1), (0, 2)),
                            ((0, 2), (1, 2)), ((1, 2), (2, 2)), ((2, 2), (3, 2)), ((3, 2), (3, 1)),
                            ((3, 1), (2, 1)), ((2, 1), (2, 0)), ((2, 0), (3, 0)), ((3, 2), (3, 3)),
                            ((3, 3), (2, 3)), ((2, 3), (1, 3)), ((1, 3), (0, 3))];
        assert_eq!(passages, expected);
    }

    #[test]
    fn start_must_be_on_the_grid() {
        let mut g = small_rect_grid(ColumnsCount(3), RowsCount(3)).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(1);
        let result = recursive_backtracker(&mut g, GridCoordinate::new(3, 0), &mut rng);
        match result {
            Err(Error(ErrorKind::CoordinateOutOfBounds(3, 0), _)) => {}
            other => panic!("expected out of bounds start, got {:?}", other),
        }
        assert_eq!(g.links_count(), 0);
    }

    #[test]
    fn refuses_to_carve_twice() {
        let mut g = small_rect_grid(ColumnsCount(3), RowsCount(3)).unwrap();
        let mut rng = XorShiftRng::seed_from_u64(1);
        recursive_backtracker(&mut g, GridCoordinate::new(0, 0), &mut rng).unwrap();
        let result = recursive_backtracker(&mut g, GridCoordinate::new(0, 0), &mut rng);
        match result {
            Err(Error(ErrorKind::GridAlreadyCarved(8), _)) => {}
            other => panic!("expected already carved, got {:?}", other),
        }
    }

    #[test]
    fn large_grid_does_not_overflow_the_stack() {
        let g = carved_grid(250, 250, GridCoordinate::new(0, 0), 42);
        assert_eq!(g.links_count(), 250 * 250 - 1);
    }

    #[test]
    fn quickcheck_perfect_maze_property() {
        fn p(w: u8, h: u8, seed: u64) -> TestResult {
            let (w, h) = (w as usize % 20, h as usize % 20);
            if w == 0 || h == 0 {
                return TestResult::discard();
            }
            let g = carved_grid(w, h, GridCoordinate::new(0, 0), seed);
            TestResult::from_bool(g.links_count() == g.size() - 1 &&
                                  reachable_without_cycles(&g) == g.size())
        }
        quickcheck(p as fn(u8, u8, u64) -> TestResult);
    }
}

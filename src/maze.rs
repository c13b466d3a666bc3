use rand::Rng;
use tracing::debug;

use crate::cells::{GridCoordinate, Walls};
use crate::config::MazeConfig;
use crate::errors::*;
use crate::generators;
use crate::grid_dimensions::RectGridDimensions;
use crate::grids::LargeRectangularGrid;
use crate::pathing::{self, Distances};
use crate::units::{ColumnsCount, RowsCount};

/// A generated perfect maze with designated start and end cells and the route between them.
///
/// Distances are measured from the start cell and `shortest_path` runs from start to end, both
/// included. Apart from construction, `reset` is the only way to change a maze and it replaces
/// every part of it at once.
#[derive(Debug)]
pub struct Maze {
    grid: LargeRectangularGrid,
    start: GridCoordinate,
    end: GridCoordinate,
    distances: Distances,
    shortest_path: Vec<GridCoordinate>,
}

impl Maze {
    /// Validate `config`, carve a maze from its start cell and find the path to its end cell.
    pub fn new<R: Rng>(config: &MazeConfig, rng: &mut R) -> Result<Maze> {
        let config = config.validate()?;
        Maze::build(config.columns, config.rows, config.start, config.end, rng)
    }

    /// Regenerate the maze in place from new random start and end cells.
    ///
    /// Start and end are drawn until they differ. A 1x1 maze has only one cell, so there the
    /// draw is skipped and start and end both stay at (0, 0).
    ///
    /// The replacement is built completely before it is swapped in, so on error the maze is left
    /// as it was. A maze made by `new` always resets successfully.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let (start, end) = if self.grid.size() > 1 {
            let mut draws = 0;
            loop {
                let start = self.grid.random_cell(rng);
                let end = self.grid.random_cell(rng);
                draws += 1;
                if start != end {
                    debug!("picked start {} and end {} after {} draws", start, end, draws);
                    break (start, end);
                }
            }
        } else {
            (self.start, self.end)
        };

        let regenerated = Maze::build(self.grid.columns(), self.grid.rows(), start, end, rng)?;
        *self = regenerated;
        Ok(())
    }

    fn build<R: Rng>(columns: ColumnsCount,
                     rows: RowsCount,
                     start: GridCoordinate,
                     end: GridCoordinate,
                     rng: &mut R)
                     -> Result<Maze> {
        let mut grid = LargeRectangularGrid::new(RectGridDimensions::new(columns, rows))?;
        generators::recursive_backtracker(&mut grid, start, rng)
            .chain_err(|| format!("failed to carve a {}x{} maze", columns.0, rows.0))?;

        let distances = Distances::for_grid(&grid, start)?;
        let shortest_path = pathing::shortest_path(&grid, &distances, end)?;

        debug!("generated {}x{} maze, path from {} to {} is {} steps",
               columns.0,
               rows.0,
               start,
               end,
               shortest_path.len() - 1);

        Ok(Maze {
            grid,
            start,
            end,
            distances,
            shortest_path,
        })
    }

    #[inline]
    pub fn grid(&self) -> &LargeRectangularGrid {
        &self.grid
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.grid.columns()
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.grid.rows()
    }

    #[inline]
    pub fn start(&self) -> GridCoordinate {
        self.start
    }

    #[inline]
    pub fn end(&self) -> GridCoordinate {
        self.end
    }

    /// Steps from the start cell to every cell.
    #[inline]
    pub fn distances(&self) -> &Distances {
        &self.distances
    }

    /// Start to end, both included.
    #[inline]
    pub fn shortest_path(&self) -> &[GridCoordinate] {
        &self.shortest_path
    }

    #[inline]
    pub fn walls(&self, coord: GridCoordinate) -> Option<Walls> {
        self.grid.walls(coord)
    }
}


#[cfg(test)]
mod tests {

    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;

    fn gc(x: u32, y: u32) -> GridCoordinate {
        GridCoordinate::new(x, y)
    }

    #[test]
    fn default_maze_runs_corner_to_corner() {
        let mut rng = XorShiftRng::seed_from_u64(1);
        let maze = Maze::new(&MazeConfig::default(), &mut rng).unwrap();
        assert_eq!(maze.start(), gc(0, 0));
        assert_eq!(maze.end(), gc(15, 15));
        assert_eq!(maze.grid().links_count(), 255);
        assert_eq!(maze.shortest_path().first(), Some(&gc(0, 0)));
        assert_eq!(maze.shortest_path().last(), Some(&gc(15, 15)));
        assert_eq!(maze.shortest_path().len() as u32 - 1,
                   maze.distances().distance_from_start_to(gc(15, 15)).unwrap());
    }

    #[test]
    fn invalid_configuration_fails_at_construction() {
        let mut rng = XorShiftRng::seed_from_u64(1);
        assert!(Maze::new(&MazeConfig::new(0, 3), &mut rng).is_err());
        let off_grid = MazeConfig::new(3, 3).with_end(gc(3, 3));
        match Maze::new(&off_grid, &mut rng) {
            Err(Error(ErrorKind::CoordinateOutOfBounds(3, 3), _)) => {}
            other => panic!("expected out of bounds, got {:?}", other),
        }
    }

    #[test]
    fn single_cell_maze() {
        let mut rng = XorShiftRng::seed_from_u64(2);
        let mut maze = Maze::new(&MazeConfig::new(1, 1), &mut rng).unwrap();
        assert_eq!(maze.grid().links_count(), 0);
        assert_eq!(maze.shortest_path(), &[gc(0, 0)]);

        maze.reset(&mut rng).unwrap();
        assert_eq!(maze.start(), gc(0, 0));
        assert_eq!(maze.end(), gc(0, 0));
        assert_eq!(maze.shortest_path(), &[gc(0, 0)]);
    }

    #[test]
    fn reset_never_leaves_start_on_end() {
        let mut rng = XorShiftRng::seed_from_u64(3);
        let mut maze = Maze::new(&MazeConfig::new(2, 1), &mut rng).unwrap();
        for _ in 0..100 {
            maze.reset(&mut rng).unwrap();
            assert_ne!(maze.start(), maze.end());
            assert_eq!(maze.shortest_path().len(), 2);
        }
    }

    #[test]
    fn reset_rebuilds_everything() {
        let mut rng = XorShiftRng::seed_from_u64(4);
        let mut maze = Maze::new(&MazeConfig::new(8, 6), &mut rng).unwrap();
        for _ in 0..20 {
            maze.reset(&mut rng).unwrap();
            assert_eq!(maze.columns(), ColumnsCount(8));
            assert_eq!(maze.rows(), RowsCount(6));
            assert_eq!(maze.grid().links_count(), 47);
            assert_eq!(maze.distances().start(), maze.start());
            assert_eq!(maze.distances().len(), 48);
            assert_eq!(maze.shortest_path().first(), Some(&maze.start()));
            assert_eq!(maze.shortest_path().last(), Some(&maze.end()));
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let config = MazeConfig::new(4, 4);
        let walls_of = |maze: &Maze| maze.grid().iter().map(|c| maze.walls(c).unwrap()).collect::<Vec<_>>();

        let a = Maze::new(&config, &mut XorShiftRng::seed_from_u64(77)).unwrap();
        let b = Maze::new(&config, &mut XorShiftRng::seed_from_u64(77)).unwrap();
        assert_eq!(walls_of(&a), walls_of(&b));
        assert_eq!(a.shortest_path(), b.shortest_path());
    }

    #[test]
    fn seeded_4x4_maze_path() {
        let maze = Maze::new(&MazeConfig::new(4, 4), &mut XorShiftRng::seed_from_u64(77)).unwrap();
        let expected = [gc(0, 0), gc(0, 1), gc(1, 1), gc(1, 2), gc(2, 2), gc(2, 3), gc(3, 3)];
        assert_eq!(maze.shortest_path(), &expected[..]);
        assert!(maze.walls(gc(0, 0)).unwrap().right);
        assert!(!maze.walls(gc(3, 0)).unwrap().left);
    }
}

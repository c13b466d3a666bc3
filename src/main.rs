use docopt::Docopt;
use error_chain::bail;
use perfect_maze::{
    config::coordinate_from_parts,
    grid_displays::{PathDisplay, StartEndPointsDisplay, WallsOnly},
    grids::LargeRectangularGrid,
    pathing,
    Maze,
    MazeConfig,
};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::{fs::File, io, io::prelude::*};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "Perfect maze

Usage:
    maze_driver -h | --help
    maze_driver [(--size=<n>|[--width=<w> --height=<h>])] [--start-x=<x> --start-y=<y>] [--end-x=<x> --end-y=<y>] [--seed=<s>] [--resets=<n>] [--show-distances|--walls-only|--longest-path] [--text-out=<path>] [--save-edges=<path>]

Options:
    -h --help              Show this screen.
    --size=<n>             The grid size is n * n.
    --width=<w>            The grid width in a w*h grid [default: 16].
    --height=<h>           The grid height in a w*h grid [default: 16].
    --start-x=<x>          x coordinate of the path start, the top left cell if not given.
    --start-y=<y>          y coordinate of the path start.
    --end-x=<x>            x coordinate of the path end, the bottom right cell if not given.
    --end-y=<y>            y coordinate of the path end.
    --seed=<s>             Seed for the random number generator. Random if not given.
    --resets=<n>           Regenerate the maze n times from random start and end points, showing each one [default: 0].
    --show-distances       Show the distance from the start point to all other cells instead of the path.
    --walls-only           Show only the walls of the maze.
    --longest-path         Show the longest path in the maze instead of the start to end path.
    --text-out=<path>      Output file path for the text rendering. Printed to stdout if not given.
    --save-edges=<path>    Serialize the final maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_size: Option<usize>,
    flag_width: usize,
    flag_height: usize,
    flag_start_x: Option<u32>,
    flag_start_y: Option<u32>,
    flag_end_x: Option<u32>,
    flag_end_y: Option<u32>,
    flag_seed: Option<u64>,
    flag_resets: usize,
    flag_show_distances: bool,
    flag_walls_only: bool,
    flag_longest_path: bool,
    flag_text_out: String,
    flag_save_edges: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::perfect_maze::errors::Error, ::perfect_maze::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    init_logging();

    let config = maze_config_from_args(&args)?;
    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("maze seed {}", seed);
    let mut rng = XorShiftRng::seed_from_u64(seed);

    let mut maze = Maze::new(&config, &mut rng)
        .chain_err(|| format!("Failed to build a {}x{} maze", config.columns, config.rows))?;
    let mut text = render_maze(&maze, &args)?;

    for reset in 1..=args.flag_resets {
        maze.reset(&mut rng).chain_err(|| format!("Failed to reset maze, attempt {}", reset))?;
        debug!("reset {} of {}", reset, args.flag_resets);
        text.push('\n');
        text.push_str(&render_maze(&maze, &args)?);
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(maze.grid(), &args.flag_save_edges)?;
    }

    if args.flag_text_out.is_empty() {
        print!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

/// Log to stderr so a maze printed on stdout stays clean. `RUST_LOG` overrides the default levels.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("perfect_maze=info,maze_driver=info"));

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

fn maze_config_from_args(args: &MazeArgs) -> Result<MazeConfig> {
    let (width, height) = if let Some(square_grid_size) = args.flag_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_width, args.flag_height)
    };

    let mut config = MazeConfig::new(width, height);
    let start = coordinate_from_parts(args.flag_start_x, args.flag_start_y)
        .chain_err(|| "--start-x and --start-y must be given together")?;
    if let Some(start) = start {
        config = config.with_start(start);
    }
    let end = coordinate_from_parts(args.flag_end_x, args.flag_end_y)
        .chain_err(|| "--end-x and --end-y must be given together")?;
    if let Some(end) = end {
        config = config.with_end(end);
    }
    Ok(config)
}

/// Pick what goes in the cells of the text rendering:
/// - Nothing, only the walls
/// - Distances from the start cell to every other cell
/// - The longest path in the maze with its own start and end markers
/// - By default the start and end markers and the shortest path between them
fn render_maze(maze: &Maze, args: &MazeArgs) -> Result<String> {
    let grid = maze.grid();

    let text = if args.flag_walls_only {
        grid.text_with(&WallsOnly).to_string()
    } else if args.flag_show_distances {
        grid.text_with(maze.distances()).to_string()
    } else if args.flag_longest_path {
        let longest = pathing::longest_path(grid)?;
        let (first, last) = match (longest.first(), longest.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => bail!("Longest path of the maze is empty"),
        };
        info!("longest path runs from {} to {}, {} steps", first, last, longest.len() - 1);
        let cells = (StartEndPointsDisplay::new(first, last), PathDisplay::new(&longest));
        grid.text_with(&cells).to_string()
    } else {
        maze.to_string()
    };

    Ok(text)
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze_grid: &LargeRectangularGrid, file_path: &str) -> Result<()> {

    let mut graph_data = String::new();
    let vertices_count = maze_grid.size();
    let edges_count = maze_grid.links_count();
    graph_data.push_str(vertices_count.to_string().as_ref());
    graph_data.push(' ');
    graph_data.push_str(edges_count.to_string().as_ref());
    graph_data.push('\n');

    for (src, dst) in maze_grid.iter_links() {
        let index_a = maze_grid
            .grid_coordinate_to_index(src)
            .ok_or("Links iter gave a coordinate outside the grid")?;
        let index_b = maze_grid
            .grid_coordinate_to_index(dst)
            .ok_or("Links iter gave a coordinate outside the grid")?;

        graph_data.push_str((index_a + 1).to_string().as_ref());
        graph_data.push(' ');
        graph_data.push_str((index_b + 1).to_string().as_ref());
        graph_data.push('\n');
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;
    info!("saved {} vertices and {} edges to {}", vertices_count, edges_count, file_path);

    Ok(())
}

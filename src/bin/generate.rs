//! Writes random mazes.
use std::path::PathBuf;
use std::process::ExitCode;

use anstream::println;
use clap::Parser;
use owo_colors::OwoColorize;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use maze_search::problems::maze_2d::Maze2DProblem;
use maze_search::problems::maze_2d::Maze2DSpace;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Generates a random maze as JSON
#[derive(Parser, Debug)]
#[clap(long_version = maze_search::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Where to write the maze. Printed out when missing.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = 0u64)]
    seed: u64,
    #[arg(long, default_value_t = 41usize)]
    width: usize,
    #[arg(long, default_value_t = 41usize)]
    height: usize,
    /// Chance of each cell being a wall.
    #[arg(long, default_value_t = 0.3f64)]
    wall_ratio: f64,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.color.write_global();
    maze_search::cli::init_logging();

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let space = match Maze2DSpace::new_random(args.width, args.height, args.wall_ratio, &mut rng)
    {
        Ok(space) => space,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let Some(maze) = Maze2DProblem::from(space).randomize(&mut rng) else {
        log::error!(
            "Couldn't place a start and goal on a {}x{} maze with seed {}",
            args.width,
            args.height,
            args.seed
        );
        return ExitCode::FAILURE;
    };

    match &args.output {
        Some(p) => {
            if let Err(e) = maze.save(p) {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
            println!("Wrote {:?} to {}", maze, p.display().yellow());
        }
        None => match maze.to_json_string() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
    }
    ExitCode::SUCCESS
}

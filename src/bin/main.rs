//! Compares searches on a maze.
use std::process::ExitCode;

use clap::Parser;

use maze_search::algorithms::Algorithm;
use maze_search::cli::MazeArgs;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Runs several searches on the same maze
#[derive(Parser, Debug)]
#[clap(long_version = maze_search::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    maze: MazeArgs,

    /// Algorithms to run, in order. All of them by default.
    #[arg(short, long = "algorithm", value_enum)]
    algorithms: Vec<Algorithm>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let algorithms = if args.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        args.algorithms
    };
    maze_search::cli::run(&args.maze, &algorithms)
}

//! Breadth-first search on a maze.
use std::process::ExitCode;

use clap::Parser;

use maze_search::algorithms::Algorithm;
use maze_search::cli::MazeArgs;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Breadth-first search on a maze
#[derive(Parser, Debug)]
#[clap(long_version = maze_search::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    maze: MazeArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    maze_search::cli::run(&args.maze, &[Algorithm::BreadthFirst])
}

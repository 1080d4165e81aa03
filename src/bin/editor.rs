//! Console maze editor.
use std::path::PathBuf;
use std::process::ExitCode;

use anstream::println;
use clap::Parser;
use owo_colors::OwoColorize;

use maze_search::editor::Editor;
use maze_search::editor::HELP;
use maze_search::problems::maze_2d::Maze2DProblem;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Edits mazes from the console
#[derive(Parser, Debug)]
#[clap(long_version = maze_search::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Maze to start from, instead of the demo one.
    #[arg(short, long, env = "MAZE")]
    load: Option<PathBuf>,

    /// Width of the demo maze.
    #[arg(long, default_value_t = 41usize)]
    width: usize,
    /// Height of the demo maze.
    #[arg(long, default_value_t = 41usize)]
    height: usize,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.color.write_global();
    maze_search::cli::init_logging();

    let maze = match &args.load {
        Some(p) => match Maze2DProblem::load(p) {
            Ok(maze) => maze,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => match Maze2DProblem::bordered(args.width, args.height) {
            Ok(maze) => maze,
            Err(e) => {
                log::error!("Couldn't build the demo maze: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    println!("{}", "Initial maze:".bold());
    println!("{maze}");
    println!("{HELP}");

    let mut editor = Editor::new(maze);
    let stdin = std::io::stdin();
    let mut out = anstream::stdout();
    if let Err(e) = editor.run(stdin.lock(), &mut out) {
        log::error!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

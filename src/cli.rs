//! Pieces shared by the command line tools.
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use owo_colors::OwoColorize;

use crate::algorithms::Algorithm;
use crate::problems::maze_2d::Maze2DProblem;
use crate::problems::maze_2d::Maze2DState;
use crate::report;
use crate::report::SearchResult;

/// Arguments to pick and draw a maze.
#[derive(clap::Args, Debug)]
pub struct MazeArgs {
    /// Maze file, read as JSON when it ends in `.json` and as text otherwise.
    #[arg(env = "MAZE")]
    pub maze: PathBuf,

    /// Draw the path found over the maze.
    #[arg(short, long, env = "MAZE_RENDER")]
    pub render: bool,

    #[command(flatten)]
    pub color: colorchoice_clap::Color,
}

/// Installs the logger, `RUST_LOG` picks the level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Writes what a search found.
pub fn write_result<W: Write>(
    out: &mut W,
    algorithm: Algorithm,
    maze: &Maze2DProblem,
    result: &SearchResult<Maze2DState>,
    render: bool,
) -> std::io::Result<()> {
    writeln!(out, "{}", algorithm.bold().cyan())?;
    write!(out, "{}", result.summary(algorithm.reports_backtracks()))?;
    if let Some(meeting) = result.meeting {
        writeln!(out, "Meeting: {meeting}")?;
    }
    if !result.found() {
        writeln!(out, "{}", "No path".yellow())?;
    }
    if render {
        write!(out, "{}", maze.overlay(Some(&result.path)))?;
    }
    Ok(())
}

/// Loads the maze and runs every algorithm on it, in order.
///
/// Not finding a path is a success, bad mazes and I/O errors are not.
pub fn run(args: &MazeArgs, algorithms: &[Algorithm]) -> ExitCode {
    args.color.write_global();
    init_logging();

    let maze = match Maze2DProblem::load(&args.maze) {
        Ok(maze) => maze,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Loaded {:?} from {:?}", maze, args.maze);

    let mut out = anstream::stdout();
    for (i, algorithm) in algorithms.iter().enumerate() {
        let result = match report::solve(*algorithm, &maze) {
            Ok(result) => result,
            Err(e) => {
                log::error!("{algorithm}: {e}");
                return ExitCode::FAILURE;
            }
        };

        let written = (if i > 0 { writeln!(out) } else { Ok(()) })
            .and_then(|_| write_result(&mut out, *algorithm, &maze, &result, args.render));
        if let Err(e) = written {
            log::error!("Couldn't write results: {e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

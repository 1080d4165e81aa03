//! Line based console editor for mazes.
//!
//! Reads one command per line, applies it to the maze being edited and
//! writes any feedback to the output. Bad commands are reported and skipped.
use std::io::BufRead;
use std::io::Write;
use std::path::PathBuf;

use indoc::indoc;
use owo_colors::OwoColorize;
use thiserror::Error;

use crate::algorithms::Algorithm;
use crate::algorithms::SearchError;
use crate::problems::maze_2d::Maze2DCell;
use crate::problems::maze_2d::Maze2DProblem;
use crate::problems::maze_2d::Maze2DState;
use crate::problems::maze_2d::MazeEditError;
use crate::problems::maze_2d::MazeLoadError;
use crate::problems::maze_2d::MazeSaveError;
use crate::report;

pub const HELP: &str = indoc! {"
    Commands:
      wall x y | free x y | toggle x y   edit a cell
      start x y | goal x y               move an endpoint
      save file | load file              JSON, or text for other extensions
      show                               draw the maze
      solve bfs|dfs|bds                  search and draw the path found
      help | exit
"};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Wall(Maze2DState),
    Free(Maze2DState),
    Toggle(Maze2DState),
    Start(Maze2DState),
    Goal(Maze2DState),
    Save(PathBuf),
    Load(PathBuf),
    Show,
    Solve(Algorithm),
    Help,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' takes {expected} argument(s), got {found}")]
    Arity {
        command: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Invalid coordinate '{0}'")]
    InvalidCoordinate(String),
    #[error("Unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
}

fn expect_args(
    command: &'static str,
    args: &[&str],
    expected: usize,
) -> Result<(), CommandParseError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CommandParseError::Arity {
            command,
            expected,
            found: args.len(),
        })
    }
}

fn parse_coordinate(s: &str) -> Result<u32, CommandParseError> {
    s.parse()
        .map_err(|_| CommandParseError::InvalidCoordinate(s.to_string()))
}

fn parse_state(command: &'static str, args: &[&str]) -> Result<Maze2DState, CommandParseError> {
    expect_args(command, args, 2)?;
    let x = parse_coordinate(args[0])?;
    let y = parse_coordinate(args[1])?;
    Maze2DState::new(x, y).ok_or_else(|| CommandParseError::InvalidCoordinate(args.join(" ")))
}

fn parse_file(command: &'static str, args: &[&str]) -> Result<PathBuf, CommandParseError> {
    expect_args(command, args, 1)?;
    Ok(PathBuf::from(args[0]))
}

impl std::str::FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Err(CommandParseError::Empty);
        };
        let args: Vec<&str> = words.collect();

        match command {
            "wall" => Ok(Command::Wall(parse_state("wall", &args)?)),
            "free" => Ok(Command::Free(parse_state("free", &args)?)),
            "toggle" => Ok(Command::Toggle(parse_state("toggle", &args)?)),
            "start" => Ok(Command::Start(parse_state("start", &args)?)),
            "goal" => Ok(Command::Goal(parse_state("goal", &args)?)),
            "save" => Ok(Command::Save(parse_file("save", &args)?)),
            "load" => Ok(Command::Load(parse_file("load", &args)?)),
            "show" => expect_args("show", &args, 0).map(|_| Command::Show),
            "help" => expect_args("help", &args, 0).map(|_| Command::Help),
            "exit" => expect_args("exit", &args, 0).map(|_| Command::Exit),
            "solve" => {
                expect_args("solve", &args, 1)?;
                args[0]
                    .parse()
                    .map(Command::Solve)
                    .map_err(|_| CommandParseError::UnknownAlgorithm(args[0].to_string()))
            }
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Edit(#[from] MazeEditError),
    #[error(transparent)]
    Load(#[from] MazeLoadError),
    #[error(transparent)]
    Save(#[from] MazeSaveError),
    #[error(transparent)]
    Search(#[from] SearchError<Maze2DState>),
    #[error("Couldn't write output: {0}")]
    Output(#[from] std::io::Error),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug)]
pub struct Editor {
    maze: Maze2DProblem,
}

impl Editor {
    pub fn new(maze: Maze2DProblem) -> Self {
        Self { maze }
    }

    pub fn maze(&self) -> &Maze2DProblem {
        &self.maze
    }

    pub fn into_maze(self) -> Maze2DProblem {
        self.maze
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, EditorError> {
        log::debug!("Executing {command:?}");
        match command {
            Command::Wall(s) => self.maze.set_cell(s, Maze2DCell::Wall)?,
            Command::Free(s) => self.maze.set_cell(s, Maze2DCell::Free)?,
            Command::Toggle(s) => self.maze.toggle_wall(s)?,
            Command::Start(s) => self.maze.set_start(s)?,
            Command::Goal(s) => self.maze.set_goal(s)?,
            Command::Save(p) => {
                self.maze.save(&p)?;
                writeln!(out, "Saved to {}", p.display())?;
            }
            Command::Load(p) => {
                self.maze = Maze2DProblem::load(&p)?;
                let (w, h) = self.maze.dimensions();
                writeln!(out, "Loaded {w}x{h} maze from {}", p.display())?;
            }
            Command::Show => write!(out, "{}", self.maze)?,
            Command::Solve(algorithm) => {
                let result = report::solve(algorithm, &self.maze)?;
                writeln!(out, "{}", algorithm.bold())?;
                write!(out, "{}", result.summary(algorithm.reports_backtracks()))?;
                if !result.found() {
                    writeln!(out, "No path")?;
                }
                write!(out, "{}", self.maze.overlay(Some(&result.path)))?;
            }
            Command::Help => write!(out, "{HELP}")?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Runs commands from `input` until `exit` or the end of the input.
    ///
    /// Only failing to read or write ends the session early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> std::io::Result<()> {
        write!(out, "> ")?;
        out.flush()?;
        for line in input.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                let flow = match line.parse::<Command>() {
                    Ok(command) => self.execute(command, out),
                    Err(e) => {
                        writeln!(out, "{}", e.red())?;
                        Ok(Flow::Continue)
                    }
                };
                match flow {
                    Ok(Flow::Exit) => return Ok(()),
                    Ok(Flow::Continue) => {}
                    Err(EditorError::Output(e)) => return Err(e),
                    Err(e) => {
                        log::warn!("{e}");
                        writeln!(out, "{}", e.red())?;
                    }
                }
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }
}

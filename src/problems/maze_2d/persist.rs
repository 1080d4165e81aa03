//! JSON persistence of mazes.
//!
//! ```json
//! {
//!   "width": 3,
//!   "height": 1,
//!   "grid": [[2, 0, 3]],
//!   "start": [0, 0],
//!   "goal": [2, 0],
//!   "costs": null
//! }
//! ```
//!
//! Cells are `0` (free), `1` (wall), `2` (start) and `3` (goal). `start`,
//! `goal` and `costs` may be `null` or absent. There's at most one start and
//! one goal cell, and they must sit where `start` and `goal` say.
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use super::Maze2DCell;
use super::Maze2DProblem;
use super::Maze2DProblemParseError;
use super::Maze2DSpace;
use super::Maze2DState;
use crate::problem::Problem;

#[derive(Debug, Serialize, Deserialize)]
struct PersistedMaze {
    width: usize,
    height: usize,
    grid: Vec<Vec<u8>>,
    #[serde(default)]
    start: Option<[u32; 2]>,
    #[serde(default)]
    goal: Option<[u32; 2]>,
    #[serde(default)]
    costs: Option<Vec<Vec<i64>>>,
}

#[derive(Debug, Error)]
pub enum MazeLoadError {
    #[error("I/O error when loading '{p}': {e}")]
    IOError {
        p: PathBuf,
        e: std::io::Error,
    },
    #[error("Invalid maze JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid maze text in '{p}': {e}")]
    Text {
        p: PathBuf,
        e: Maze2DProblemParseError,
    },
    #[error("Expected {expected} rows but found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("Row {y} has {found} cells instead of {expected}")]
    RowLength {
        y: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unknown cell code {code} at ({x},{y})")]
    UnknownCell { code: u8, x: usize, y: usize },
    #[error("The costs don't match the {width}x{height} grid")]
    CostShape { width: usize, height: usize },
    #[error("Coordinate ({x},{y}) can't be represented")]
    Coordinate { x: u32, y: u32 },
    #[error("Found a second {cell} cell at ({x},{y})")]
    DuplicateEndpoint { cell: Maze2DCell, x: usize, y: usize },
    #[error("{cell} cell at {tagged} but the maze says it's at {declared:?}")]
    EndpointMismatch {
        cell: Maze2DCell,
        tagged: Maze2DState,
        declared: Option<Maze2DState>,
    },
}

#[derive(Debug, Error)]
pub enum MazeSaveError {
    #[error("I/O error when saving '{p}': {e}")]
    IOError {
        p: PathBuf,
        e: std::io::Error,
    },
    #[error("Couldn't serialize maze: {0}")]
    Json(#[from] serde_json::Error),
}

fn state_from_pair(pair: Option<[u32; 2]>) -> Result<Option<Maze2DState>, MazeLoadError> {
    pair.map(|[x, y]| Maze2DState::new(x, y).ok_or(MazeLoadError::Coordinate { x, y }))
        .transpose()
}

impl TryFrom<PersistedMaze> for Maze2DProblem {
    type Error = MazeLoadError;

    fn try_from(m: PersistedMaze) -> Result<Self, Self::Error> {
        if m.grid.len() != m.height {
            return Err(MazeLoadError::RowCount {
                expected: m.height,
                found: m.grid.len(),
            });
        }

        let mut rows = Vec::with_capacity(m.height);
        let mut tagged_start = None;
        let mut tagged_goal = None;
        for (y, row) in m.grid.iter().enumerate() {
            if row.len() != m.width {
                return Err(MazeLoadError::RowLength {
                    y,
                    expected: m.width,
                    found: row.len(),
                });
            }
            let mut cells = Vec::with_capacity(m.width);
            for (x, &code) in row.iter().enumerate() {
                let cell =
                    Maze2DCell::from_code(code).ok_or(MazeLoadError::UnknownCell { code, x, y })?;
                let tagged = match cell {
                    Maze2DCell::Start => Some(&mut tagged_start),
                    Maze2DCell::Goal => Some(&mut tagged_goal),
                    _ => None,
                };
                if let Some(tagged) = tagged {
                    if tagged.is_some() {
                        return Err(MazeLoadError::DuplicateEndpoint { cell, x, y });
                    }
                    *tagged = Maze2DState::new_from_usize(x, y);
                }
                cells.push(cell);
            }
            rows.push(cells);
        }
        if let Some(costs) = &m.costs {
            if costs.len() != m.height || costs.iter().any(|row| row.len() != m.width) {
                return Err(MazeLoadError::CostShape {
                    width: m.width,
                    height: m.height,
                });
            }
        }

        let start = state_from_pair(m.start)?;
        let goal = state_from_pair(m.goal)?;
        for (cell, tagged, declared) in [
            (Maze2DCell::Start, tagged_start, start),
            (Maze2DCell::Goal, tagged_goal, goal),
        ] {
            if let Some(tagged) = tagged.filter(|t| Some(*t) != declared) {
                return Err(MazeLoadError::EndpointMismatch {
                    cell,
                    tagged,
                    declared,
                });
            }
        }

        // Untagged endpoints are kept as they are, searches refuse bad ones.
        Ok(Maze2DProblem::from_parts(
            Maze2DSpace::new_from_rows(m.width, rows),
            start,
            goal,
            m.costs,
        ))
    }
}

impl From<&Maze2DProblem> for PersistedMaze {
    fn from(p: &Maze2DProblem) -> Self {
        let (width, height) = p.dimensions();
        PersistedMaze {
            width,
            height,
            grid: p
                .space()
                .rows()
                .map(|row| row.iter().map(Maze2DCell::code).collect())
                .collect(),
            start: p.start().map(|s| [s.x(), s.y()]),
            goal: p.goal().map(|s| [s.x(), s.y()]),
            costs: p.costs().cloned(),
        }
    }
}

impl Maze2DProblem {
    pub fn from_json_str(json: &str) -> Result<Self, MazeLoadError> {
        let m: PersistedMaze = serde_json::from_str(json)?;
        Maze2DProblem::try_from(m)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&PersistedMaze::from(self))
    }

    /// Loads a maze, as JSON for `.json` files and as text otherwise.
    pub fn load(p: &Path) -> Result<Self, MazeLoadError> {
        let contents = std::fs::read_to_string(p).map_err(|e| MazeLoadError::IOError {
            p: p.to_path_buf(),
            e,
        })?;

        if p.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&contents)
        } else {
            Self::try_from(contents.as_str()).map_err(|e| MazeLoadError::Text {
                p: p.to_path_buf(),
                e,
            })
        }
    }

    /// Saves the maze as JSON.
    pub fn save(&self, p: &Path) -> Result<(), MazeSaveError> {
        let json = self.to_json_string()?;
        std::fs::write(p, json).map_err(|e| MazeSaveError::IOError {
            p: p.to_path_buf(),
            e,
        })
    }
}

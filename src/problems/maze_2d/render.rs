//! ASCII drawings of mazes and the paths found on them.
use rustc_hash::FxHashSet;

use super::Maze2DCell;
use super::Maze2DProblem;
use super::Maze2DState;
use crate::problem::Problem;
use crate::space::Path;

const PATH_MARK: char = '*';

/// A maze with a path drawn over it.
///
/// Start and goal are drawn over the path.
pub struct Maze2DOverlay<'a> {
    problem: &'a Maze2DProblem,
    path: FxHashSet<Maze2DState>,
}

impl Maze2DProblem {
    pub fn overlay(&self, path: Option<&Path<Maze2DState>>) -> Maze2DOverlay<'_> {
        Maze2DOverlay {
            problem: self,
            path: path.map(|p| p.iter().copied().collect()).unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for Maze2DOverlay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let start = self.problem.start();
        let goal = self.problem.goal();

        for (y, row) in self.problem.space().rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let s = Maze2DState::new_from_usize(x, y);
                if s.is_some() && s == start {
                    write!(f, "{}", Maze2DCell::Start)?;
                } else if s.is_some() && s == goal {
                    write!(f, "{}", Maze2DCell::Goal)?;
                } else if s.is_some_and(|s| self.path.contains(&s)) {
                    write!(f, "{PATH_MARK}")?;
                } else if *cell == Maze2DCell::Wall {
                    write!(f, "{}", Maze2DCell::Wall)?;
                } else {
                    write!(f, "{}", Maze2DCell::Free)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

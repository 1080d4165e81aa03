//! 2D grid mazes.
//!
//! A rectangular grid of cells where walls can't be traversed and movement is
//! restricted to the 4 orthogonal directions.
use derive_more::Display;
use nonmax::NonMaxU32;
use thiserror::Error;

use crate::problem::Problem;
use crate::space::Neighbours;
use crate::space::Space;
use crate::space::State;

pub mod persist;
pub mod render;

pub use persist::MazeLoadError;
pub use persist::MazeSaveError;
pub use render::Maze2DOverlay;

const RANDOM_STATE_MAX_TRIES: usize = 10_000;

pub(crate) type CoordIntrinsic = u32;
pub type Coord = NonMaxU32;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("({x},{y})")]
pub struct Maze2DState {
    pub(crate) x: Coord,
    pub(crate) y: Coord,
}

impl Maze2DState {
    pub fn new(x: CoordIntrinsic, y: CoordIntrinsic) -> Option<Maze2DState> {
        Some(Maze2DState {
            x: Coord::new(x)?,
            y: Coord::new(y)?,
        })
    }
    pub fn new_from_usize(x: usize, y: usize) -> Option<Maze2DState> {
        let x = CoordIntrinsic::try_from(x).ok()?;
        let y = CoordIntrinsic::try_from(y).ok()?;
        Self::new(x, y)
    }

    #[inline(always)]
    pub fn x(&self) -> CoordIntrinsic {
        self.x.get()
    }
    #[inline(always)]
    pub fn y(&self) -> CoordIntrinsic {
        self.y.get()
    }

    /// Moves one cell towards `direction`, as long as coordinates stay
    /// representable.
    #[inline(always)]
    pub fn step(&self, direction: Maze2DDirection) -> Option<Maze2DState> {
        let (x, y) = (self.x(), self.y());

        #[rustfmt::skip]
        let (x, y) = match direction {
            Maze2DDirection::Down  => (Some(x),         y.checked_add(1)),
            Maze2DDirection::Right => (x.checked_add(1), Some(y)        ),
            Maze2DDirection::Up    => (Some(x),         y.checked_sub(1)),
            Maze2DDirection::Left  => (x.checked_sub(1), Some(y)        ),
        };

        Maze2DState::new(x?, y?)
    }

    /// Number of orthogonal steps between two cells, ignoring walls.
    ///
    /// ```
    /// use maze_search::problems::maze_2d::Maze2DState;
    ///
    /// let a = Maze2DState::new(0, 0).unwrap();
    /// let b = Maze2DState::new(4, 3).unwrap();
    /// assert_eq!(a.manhattan_distance(&b), 7);
    /// assert_eq!(b.manhattan_distance(&a), 7);
    /// ```
    pub fn manhattan_distance(&self, other: &Maze2DState) -> CoordIntrinsic {
        self.x().abs_diff(other.x()) + self.y().abs_diff(other.y())
    }
}
impl State for Maze2DState {}

/// Orthogonal movements. `y` grows downwards, like row indices do.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Maze2DDirection {
    #[display("↓")]
    Down, // y++
    #[display("→")]
    Right, // x++
    #[display("↑")]
    Up, // y--
    #[display("←")]
    Left, // x--
}

/// The order in which neighbours are generated by every search.
pub const NEIGHBOUR_ORDER: [Maze2DDirection; 4] = [
    Maze2DDirection::Down,
    Maze2DDirection::Right,
    Maze2DDirection::Up,
    Maze2DDirection::Left,
];

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Maze2DCell {
    #[display(".")]
    Free,
    #[display("#")]
    Wall,
    #[display("S")]
    Start,
    #[display("G")]
    Goal,
}

impl Maze2DCell {
    #[inline(always)]
    pub fn is_traversable(&self) -> bool {
        *self != Maze2DCell::Wall
    }

    /// The integer code used when persisting mazes.
    pub fn code(&self) -> u8 {
        match self {
            Maze2DCell::Free => 0,
            Maze2DCell::Wall => 1,
            Maze2DCell::Start => 2,
            Maze2DCell::Goal => 3,
        }
    }
    pub fn from_code(code: u8) -> Option<Maze2DCell> {
        match code {
            0 => Some(Maze2DCell::Free),
            1 => Some(Maze2DCell::Wall),
            2 => Some(Maze2DCell::Start),
            3 => Some(Maze2DCell::Goal),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Maze2DCellParseError {
    #[error("Invalid character '{0}' found.")]
    InvalidCharacter(char),
}

impl std::convert::TryFrom<char> for Maze2DCell {
    type Error = Maze2DCellParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            // Rendered paths read back as free cells
            ' ' | '.' | '*' => Ok(Maze2DCell::Free),
            '#' | '█' => Ok(Maze2DCell::Wall),
            'S' => Ok(Maze2DCell::Start),
            'G' => Ok(Maze2DCell::Goal),
            ch => Err(Maze2DCellParseError::InvalidCharacter(ch)),
        }
    }
}

/// The grid of a maze, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Maze2DSpace {
    width: usize,
    height: usize,
    cells: Vec<Maze2DCell>,
}

impl Maze2DSpace {
    /// An all free grid.
    ///
    /// Fails when the grid can't be held in memory or its cells can't be
    /// addressed with [`Coord`]s.
    pub fn new_empty_with_dimensions(width: usize, height: usize) -> Result<Self, MazeEditError> {
        let too_large = || MazeEditError::TooLarge { width, height };
        let addressable =
            CoordIntrinsic::try_from(width).is_ok() && CoordIntrinsic::try_from(height).is_ok();
        let area = width
            .checked_mul(height)
            .filter(|_| addressable)
            .ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(area).map_err(|_| too_large())?;
        cells.resize(area, Maze2DCell::Free);
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid out of `width` wide rows.
    pub(crate) fn new_from_rows(width: usize, rows: Vec<Vec<Maze2DCell>>) -> Self {
        let height = rows.len();
        debug_assert!(rows.iter().all(|r| r.len() == width));
        Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Random walls, each cell being a wall with probability `wall_ratio`.
    pub fn new_random<R: rand::Rng>(
        width: usize,
        height: usize,
        wall_ratio: f64,
        r: &mut R,
    ) -> Result<Self, MazeEditError> {
        // NaN means no walls
        let wall_ratio = if wall_ratio.is_nan() { 0.0 } else { wall_ratio.clamp(0.0, 1.0) };
        let mut space = Self::new_empty_with_dimensions(width, height)?;
        for cell in space.cells.iter_mut() {
            if r.random_bool(wall_ratio) {
                *cell = Maze2DCell::Wall;
            }
        }
        Ok(space)
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline(always)]
    fn index(&self, state: &Maze2DState) -> Option<usize> {
        let (x, y) = (state.x() as usize, state.y() as usize);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Gets the cell at `state`, if it lies within the grid.
    #[inline(always)]
    pub fn cell(&self, state: &Maze2DState) -> Option<Maze2DCell> {
        self.index(state).map(|i| self.cells[i])
    }

    pub(crate) fn set(&mut self, state: &Maze2DState, cell: Maze2DCell) {
        if let Some(i) = self.index(state) {
            self.cells[i] = cell;
        }
    }

    /// Iterates over the rows of cells, top to bottom.
    ///
    /// Always `height` rows, even when they are empty.
    pub fn rows(&self) -> impl Iterator<Item = &[Maze2DCell]> {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    pub fn random_state<R: rand::Rng>(&self, r: &mut R) -> Option<Maze2DState> {
        if self.cells.is_empty() {
            return None;
        }
        for _tries in 0..RANDOM_STATE_MAX_TRIES {
            let x = r.random_range(0..self.width);
            let y = r.random_range(0..self.height);
            let s = Maze2DState::new_from_usize(x, y)?;
            if self.valid(&s) {
                return Some(s);
            }
        }

        None
    }
}

impl Space<Maze2DState> for Maze2DSpace {
    #[inline(always)]
    fn contains(&self, state: &Maze2DState) -> bool {
        self.index(state).is_some()
    }

    #[inline(always)]
    fn valid(&self, state: &Maze2DState) -> bool {
        self.cell(state).is_some_and(|c| c.is_traversable())
    }

    /// Gets the traversable neighbours of a given position.
    ///
    /// Always in `NEIGHBOUR_ORDER`.
    fn neighbours(&self, state: &Maze2DState) -> Neighbours<Maze2DState> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("StateExpansion");

        NEIGHBOUR_ORDER
            .iter()
            .filter_map(|d| state.step(*d))
            .filter(|s| self.valid(s))
            .collect()
    }

    fn size(&self) -> Option<usize> {
        Some(self.cells.len())
    }
}

impl std::fmt::Display for Maze2DSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Maze2DSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Maze2D{:?}", self.dimensions())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeEditError {
    #[error("({x},{y}) is out of bounds")]
    OutOfBounds {
        x: CoordIntrinsic,
        y: CoordIntrinsic,
    },
    #[error("{0} is not free")]
    NotFree(Maze2DState),
    #[error("A {width}x{height} maze is too large")]
    TooLarge { width: usize, height: usize },
    #[error("A {width}x{height} maze has no room for a separate start and goal")]
    TooSmall { width: usize, height: usize },
}

/// A maze: its grid, start and goal.
///
/// Start and goal are tracked apart from the grid so they can be found
/// quickly, and the grid cells they sit on are tagged accordingly.
#[derive(Clone, PartialEq, Eq)]
pub struct Maze2DProblem {
    space: Maze2DSpace,
    start: Option<Maze2DState>,
    goal: Option<Maze2DState>,
    /// Per-cell costs. Kept for callers, searches ignore them.
    costs: Option<Vec<Vec<i64>>>,
}

impl Maze2DProblem {
    /// An open maze without start nor goal.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeEditError> {
        Ok(Self::from(Maze2DSpace::new_empty_with_dimensions(
            width, height,
        )?))
    }

    /// A maze surrounded by walls with a wall run across row 3.
    ///
    /// Start is at `(1,1)` and goal at the opposite inner corner, which need
    /// to be different free cells.
    pub fn bordered(width: usize, height: usize) -> Result<Self, MazeEditError> {
        if width < 3 || height < 3 || (width, height) == (3, 3) {
            return Err(MazeEditError::TooSmall { width, height });
        }
        let mut maze = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let border = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
                let run = y == 3 && x >= 3 && x + 3 < width;
                if border || run {
                    if let Some(s) = Maze2DState::new_from_usize(x, y) {
                        maze.space.set(&s, Maze2DCell::Wall);
                    }
                }
            }
        }
        let start = Maze2DState::new(1, 1).ok_or(MazeEditError::OutOfBounds { x: 1, y: 1 })?;
        let goal = Maze2DState::new_from_usize(width - 2, height - 2).ok_or(
            MazeEditError::TooLarge { width, height },
        )?;
        maze.set_start(start)?;
        maze.set_goal(goal)?;
        Ok(maze)
    }

    /// A random maze with random (free) start and goal.
    pub fn new_random<R: rand::Rng>(
        width: usize,
        height: usize,
        wall_ratio: f64,
        r: &mut R,
    ) -> Option<Self> {
        Self::from(Maze2DSpace::new_random(width, height, wall_ratio, r).ok()?).randomize(r)
    }

    /// Picks a new random start and goal on two different free cells.
    pub fn randomize<R: rand::Rng>(&self, r: &mut R) -> Option<Maze2DProblem> {
        let mut p = self.clone();
        p.clear_endpoints();
        let start = p.space.random_state(r)?;
        let goal = (0..RANDOM_STATE_MAX_TRIES)
            .filter_map(|_| p.space.random_state(r))
            .find(|g| *g != start)?;
        p.set_start(start).ok()?;
        p.set_goal(goal).ok()?;
        Some(p)
    }

    pub(crate) fn from_parts(
        space: Maze2DSpace,
        start: Option<Maze2DState>,
        goal: Option<Maze2DState>,
        costs: Option<Vec<Vec<i64>>>,
    ) -> Self {
        Self {
            space,
            start,
            goal,
            costs,
        }
    }

    pub fn costs(&self) -> Option<&Vec<Vec<i64>>> {
        self.costs.as_ref()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.space.dimensions()
    }

    pub fn in_bounds(&self, s: &Maze2DState) -> bool {
        self.space.contains(s)
    }

    pub fn is_free(&self, s: &Maze2DState) -> bool {
        self.space.valid(s)
    }

    /// The cost of stepping on a cell.
    ///
    /// Walls and out of bounds cells can't be stepped on.
    pub fn cost(&self, s: &Maze2DState) -> Option<i64> {
        if !self.is_free(s) {
            return None;
        }
        match &self.costs {
            Some(costs) => costs
                .get(s.y() as usize)
                .and_then(|row| row.get(s.x() as usize))
                .copied(),
            None => Some(1),
        }
    }

    fn check_bounds(&self, s: &Maze2DState) -> Result<(), MazeEditError> {
        if self.in_bounds(s) {
            Ok(())
        } else {
            Err(MazeEditError::OutOfBounds { x: s.x(), y: s.y() })
        }
    }

    /// Writes a cell.
    ///
    /// Writing a start or goal moves the existing one, which becomes free.
    /// Overwriting the current start or goal with anything else removes it.
    pub fn set_cell(&mut self, s: Maze2DState, cell: Maze2DCell) -> Result<(), MazeEditError> {
        self.check_bounds(&s)?;

        if self.start == Some(s) && cell != Maze2DCell::Start {
            self.start = None;
        }
        if self.goal == Some(s) && cell != Maze2DCell::Goal {
            self.goal = None;
        }
        let previous = match cell {
            Maze2DCell::Start => self.start.replace(s),
            Maze2DCell::Goal => self.goal.replace(s),
            _ => None,
        };
        if let Some(previous) = previous.filter(|p| *p != s) {
            self.space.set(&previous, Maze2DCell::Free);
        }
        self.space.set(&s, cell);
        Ok(())
    }

    /// Turns walls into free cells and anything else into walls.
    pub fn toggle_wall(&mut self, s: Maze2DState) -> Result<(), MazeEditError> {
        self.check_bounds(&s)?;
        if self.space.cell(&s) == Some(Maze2DCell::Wall) {
            self.set_cell(s, Maze2DCell::Free)
        } else {
            self.set_cell(s, Maze2DCell::Wall)
        }
    }

    pub fn set_start(&mut self, s: Maze2DState) -> Result<(), MazeEditError> {
        self.check_bounds(&s)?;
        if !self.is_free(&s) {
            return Err(MazeEditError::NotFree(s));
        }
        self.set_cell(s, Maze2DCell::Start)
    }

    pub fn set_goal(&mut self, s: Maze2DState) -> Result<(), MazeEditError> {
        self.check_bounds(&s)?;
        if !self.is_free(&s) {
            return Err(MazeEditError::NotFree(s));
        }
        self.set_cell(s, Maze2DCell::Goal)
    }

    fn clear_endpoints(&mut self) {
        for s in [self.start.take(), self.goal.take()].into_iter().flatten() {
            self.space.set(&s, Maze2DCell::Free);
        }
    }
}

impl Problem<Maze2DSpace, Maze2DState> for Maze2DProblem {
    fn space(&self) -> &Maze2DSpace {
        &self.space
    }
    fn start(&self) -> Option<Maze2DState> {
        self.start
    }
    fn goal(&self) -> Option<Maze2DState> {
        self.goal
    }
}

impl std::convert::From<Maze2DSpace> for Maze2DProblem {
    /// Lifts a Space into a Problem without start nor goal.
    ///
    /// This problem can't be searched until both are set.
    fn from(space: Maze2DSpace) -> Self {
        Maze2DProblem {
            space,
            start: None,
            goal: None,
            costs: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Maze2DProblemParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Invalid cell {e} found at ({x},{y})")]
    InvalidCell {
        e: Maze2DCellParseError,
        x: usize,
        y: usize,
    },
    #[error("Row {y} has {found} cells instead of {expected}")]
    RaggedRow {
        y: usize,
        expected: usize,
        found: usize,
    },
    #[error("Found a second {cell} at ({x},{y})")]
    DuplicateEndpoint { cell: Maze2DCell, x: usize, y: usize },
    #[error("Maze is too large")]
    TooLarge,
}

impl std::convert::TryFrom<&str> for Maze2DProblem {
    type Error = Maze2DProblemParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let lines: Vec<&str> = s.lines().collect();

        if lines.is_empty() || lines[0].is_empty() {
            return Err(Maze2DProblemParseError::EmptyInput);
        }

        let max_x = lines[0].chars().count();
        let max_y = lines.len();
        if Maze2DState::new_from_usize(max_x, max_y).is_none() {
            return Err(Maze2DProblemParseError::TooLarge);
        }

        let mut rows = Vec::with_capacity(max_y);
        let mut start = None;
        let mut goal = None;
        for (y, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(max_x);
            for (x, ch) in line.chars().enumerate() {
                let cell = Maze2DCell::try_from(ch)
                    .map_err(|e| Maze2DProblemParseError::InvalidCell { e, x, y })?;
                let endpoint = match cell {
                    Maze2DCell::Start => Some(&mut start),
                    Maze2DCell::Goal => Some(&mut goal),
                    _ => None,
                };
                if let Some(endpoint) = endpoint {
                    if endpoint.is_some() {
                        return Err(Maze2DProblemParseError::DuplicateEndpoint { cell, x, y });
                    }
                    *endpoint = Maze2DState::new_from_usize(x, y);
                }
                row.push(cell);
            }
            if row.len() != max_x {
                return Err(Maze2DProblemParseError::RaggedRow {
                    y,
                    expected: max_x,
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        Ok(Maze2DProblem::from_parts(
            Maze2DSpace::new_from_rows(max_x, rows),
            start,
            goal,
            None,
        ))
    }
}

impl std::fmt::Display for Maze2DProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.overlay(None))
    }
}

impl std::fmt::Debug for Maze2DProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (x, y) = self.dimensions();
        write!(f, "Maze2DProblem({x}x{y}) (s:{:?}, g:{:?})", self.start, self.goal)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::problem::Endpoint;
    use crate::problem::InvalidProblemError;

    fn s(x: u32, y: u32) -> Maze2DState {
        Maze2DState::new(x, y).unwrap()
    }

    #[test]
    fn parse() {
        let maze = Maze2DProblem::try_from(indoc! {"
            S.#
            .##
            ..G
        "})
        .unwrap();

        assert_eq!(maze.dimensions(), (3, 3));
        assert_eq!(maze.start(), Some(s(0, 0)));
        assert_eq!(maze.goal(), Some(s(2, 2)));
        assert_eq!(maze.space().cell(&s(2, 0)), Some(Maze2DCell::Wall));
        assert_eq!(maze.space().cell(&s(0, 0)), Some(Maze2DCell::Start));
        assert_eq!(maze.space().cell(&s(3, 0)), None);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Maze2DProblem::try_from(""),
            Err(Maze2DProblemParseError::EmptyInput)
        );
        assert_eq!(
            Maze2DProblem::try_from("S.\n.x"),
            Err(Maze2DProblemParseError::InvalidCell {
                e: Maze2DCellParseError::InvalidCharacter('x'),
                x: 1,
                y: 1,
            })
        );
        assert_eq!(
            Maze2DProblem::try_from("S..\n.G"),
            Err(Maze2DProblemParseError::RaggedRow {
                y: 1,
                expected: 3,
                found: 2,
            })
        );
        assert_eq!(
            Maze2DProblem::try_from("S.S"),
            Err(Maze2DProblemParseError::DuplicateEndpoint {
                cell: Maze2DCell::Start,
                x: 2,
                y: 0,
            })
        );
    }

    #[test]
    fn neighbours_order() {
        let maze = Maze2DProblem::new(3, 3).unwrap();
        let space = maze.space();

        assert_eq!(
            space.neighbours(&s(1, 1)).as_slice(),
            &[s(1, 2), s(2, 1), s(1, 0), s(0, 1)]
        );
        // Corners lose the out-of-bounds neighbours.
        assert_eq!(space.neighbours(&s(0, 0)).as_slice(), &[s(0, 1), s(1, 0)]);
        assert_eq!(space.neighbours(&s(2, 2)).as_slice(), &[s(2, 1), s(1, 2)]);
    }

    #[test]
    fn neighbours_skip_walls() {
        let maze = Maze2DProblem::try_from(indoc! {"
            .#.
            #..
            .#.
        "})
        .unwrap();

        assert_eq!(maze.space().neighbours(&s(1, 1)).as_slice(), &[s(2, 1)]);
        assert!(maze.space().neighbours(&s(0, 0)).is_empty());
        assert!(!maze.space().valid(&s(1, 0)));
        assert!(maze.space().contains(&s(1, 0)));
        assert!(!maze.space().valid(&s(3, 0)));
    }

    #[test]
    fn set_cell_moves_endpoints() {
        let mut maze = Maze2DProblem::new(4, 1).unwrap();
        maze.set_start(s(0, 0)).unwrap();
        maze.set_start(s(1, 0)).unwrap();

        assert_eq!(maze.start(), Some(s(1, 0)));
        assert_eq!(maze.space().cell(&s(0, 0)), Some(Maze2DCell::Free));
        assert_eq!(maze.space().cell(&s(1, 0)), Some(Maze2DCell::Start));

        // Goal replaces the start on the same cell.
        maze.set_goal(s(1, 0)).unwrap();
        assert_eq!(maze.start(), None);
        assert_eq!(maze.goal(), Some(s(1, 0)));

        // Walls erase endpoints.
        maze.set_cell(s(1, 0), Maze2DCell::Wall).unwrap();
        assert_eq!(maze.goal(), None);
    }

    #[test]
    fn edit_errors() {
        let mut maze = Maze2DProblem::new(2, 2).unwrap();
        maze.set_cell(s(1, 1), Maze2DCell::Wall).unwrap();

        assert_eq!(
            maze.set_start(s(1, 1)),
            Err(MazeEditError::NotFree(s(1, 1)))
        );
        assert_eq!(
            maze.set_goal(s(2, 0)),
            Err(MazeEditError::OutOfBounds { x: 2, y: 0 })
        );
        assert_eq!(
            maze.toggle_wall(s(0, 5)),
            Err(MazeEditError::OutOfBounds { x: 0, y: 5 })
        );
    }

    #[test]
    fn toggle_wall() {
        let mut maze = Maze2DProblem::new(2, 1).unwrap();
        maze.set_start(s(0, 0)).unwrap();

        maze.toggle_wall(s(0, 0)).unwrap();
        assert_eq!(maze.start(), None);
        assert_eq!(maze.space().cell(&s(0, 0)), Some(Maze2DCell::Wall));

        maze.toggle_wall(s(0, 0)).unwrap();
        assert_eq!(maze.space().cell(&s(0, 0)), Some(Maze2DCell::Free));
    }

    #[test]
    fn costs() {
        let mut maze = Maze2DProblem::new(2, 1).unwrap();
        maze.set_cell(s(1, 0), Maze2DCell::Wall).unwrap();
        assert_eq!(maze.cost(&s(0, 0)), Some(1));
        assert_eq!(maze.cost(&s(1, 0)), None);
        assert_eq!(maze.cost(&s(2, 0)), None);

        maze.costs = Some(vec![vec![7, 9]]);
        assert_eq!(maze.cost(&s(0, 0)), Some(7));
        assert_eq!(maze.cost(&s(1, 0)), None);
    }

    #[test]
    fn endpoints_validation() {
        let mut maze = Maze2DProblem::new(3, 1).unwrap();
        assert_eq!(
            maze.endpoints(),
            Err(InvalidProblemError::MissingEndpoint(Endpoint::Start))
        );

        maze.set_start(s(0, 0)).unwrap();
        assert_eq!(
            maze.endpoints(),
            Err(InvalidProblemError::MissingEndpoint(Endpoint::Goal))
        );

        maze.goal = Some(s(5, 0));
        assert_eq!(
            maze.endpoints(),
            Err(InvalidProblemError::OutOfBounds {
                endpoint: Endpoint::Goal,
                state: s(5, 0),
            })
        );

        maze.set_goal(s(2, 0)).unwrap();
        maze.space.set(&s(0, 0), Maze2DCell::Wall);
        assert_eq!(
            maze.endpoints(),
            Err(InvalidProblemError::Blocked {
                endpoint: Endpoint::Start,
                state: s(0, 0),
            })
        );

        maze.space.set(&s(0, 0), Maze2DCell::Start);
        assert_eq!(maze.endpoints(), Ok((s(0, 0), s(2, 0))));
    }

    #[test]
    fn bordered() {
        let maze = Maze2DProblem::bordered(9, 6).unwrap();
        assert_eq!(maze.start(), Some(s(1, 1)));
        assert_eq!(maze.goal(), Some(s(7, 4)));
        assert_eq!(
            maze.to_string(),
            indoc! {"
                #########
                #S......#
                #.......#
                #..###..#
                #......G#
                #########
            "}
        );
    }

    #[test]
    fn bordered_needs_two_inner_cells() {
        assert_eq!(
            Maze2DProblem::bordered(3, 3),
            Err(MazeEditError::TooSmall {
                width: 3,
                height: 3
            })
        );
        assert_eq!(
            Maze2DProblem::bordered(2, 2),
            Err(MazeEditError::TooSmall {
                width: 2,
                height: 2
            })
        );
        assert!(Maze2DProblem::bordered(0, 7).is_err());

        let maze = Maze2DProblem::bordered(4, 3).unwrap();
        assert_eq!(maze.start(), Some(s(1, 1)));
        assert_eq!(maze.goal(), Some(s(2, 1)));
        assert_eq!(maze.to_string(), "####\n#SG#\n####\n");
    }

    #[test]
    fn sizes() {
        assert_eq!(
            Maze2DProblem::new(usize::MAX, 2),
            Err(MazeEditError::TooLarge {
                width: usize::MAX,
                height: 2
            })
        );
        let huge = u32::MAX as usize;
        assert!(Maze2DSpace::new_empty_with_dimensions(huge, huge).is_err());
        let mut r = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(Maze2DProblem::new_random(usize::MAX, usize::MAX, 0.3, &mut r), None);

        // Empty grids keep the side they were given.
        let flat = Maze2DProblem::new(5, 0).unwrap();
        assert_eq!(flat.dimensions(), (5, 0));
        assert_eq!(flat.space().rows().count(), 0);
        let thin = Maze2DProblem::new(0, 2).unwrap();
        assert_eq!(thin.dimensions(), (0, 2));
        assert_eq!(thin.space().rows().count(), 2);
        assert_eq!(thin.to_string(), "\n\n");
    }

    #[test]
    fn random_mazes_are_reproducible() {
        let mut r0 = ChaCha8Rng::seed_from_u64(7);
        let mut r1 = ChaCha8Rng::seed_from_u64(7);
        let m0 = Maze2DProblem::new_random(12, 9, 0.3, &mut r0).unwrap();
        let m1 = Maze2DProblem::new_random(12, 9, 0.3, &mut r1).unwrap();

        assert_eq!(m0, m1);
        assert!(m0.endpoints().is_ok());
    }

    #[test]
    fn randomize_picks_different_endpoints() {
        let mut r = ChaCha8Rng::seed_from_u64(3);
        let maze = Maze2DProblem::new(2, 1).unwrap();
        for _ in 0..20 {
            let m = maze.randomize(&mut r).unwrap();
            assert_ne!(m.start(), m.goal());
            assert!(m.endpoints().is_ok());
        }
    }

    #[test]
    fn randomize_needs_free_cells() {
        let mut r = ChaCha8Rng::seed_from_u64(0);
        let walls = Maze2DProblem::from(Maze2DSpace::new_random(4, 4, 1.0, &mut r).unwrap());
        assert_eq!(walls.randomize(&mut r), None);
    }
}

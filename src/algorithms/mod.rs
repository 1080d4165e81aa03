//! Implementation of search algorithms.
//!
//! These algorithms can do path-finding on generic search problems.

use derive_more::Display;
use thiserror::Error;

use crate::problem::InvalidProblemError;
use crate::problem::Problem;
use crate::search::ReconstructionError;
use crate::space::Path;
use crate::space::Space;
use crate::space::State;

pub mod bidirectional;
pub mod single_source;
pub mod traversal;

use bidirectional::BidirectionalSearch;
use single_source::BreadthFirstSearch;
use single_source::DepthFirstSearch;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError<St>
where
    St: State,
{
    #[error("Can't search: {0}")]
    InvalidProblem(#[from] InvalidProblemError<St>),
    #[error("Inconsistent search tree: {0}")]
    Inconsistent(#[from] ReconstructionError<St>),
}

/// What a finished search found.
///
/// Not finding a path is a regular outcome, with an empty path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome<St>
where
    St: State,
{
    pub path: Path<St>,
    pub nodes_expanded: usize,
    /// Expansions that didn't reach any new state.
    pub backtracks: usize,
    /// Where both directions of a bidirectional search met.
    pub meeting: Option<St>,
}

impl<St> SearchOutcome<St>
where
    St: State,
{
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    #[display("BFS")]
    #[value(name = "bfs")]
    BreadthFirst,
    #[display("DFS")]
    #[value(name = "dfs")]
    DepthFirst,
    #[display("Bidirectional BFS")]
    #[value(name = "bds")]
    Bidirectional,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::Bidirectional,
    ];

    /// Whether backtracks are worth reporting.
    ///
    /// Bidirectional searches still count them, but they mix dead ends found
    /// from both sides.
    pub fn reports_backtracks(&self) -> bool {
        !matches!(self, Algorithm::Bidirectional)
    }

    /// Runs the algorithm on a problem.
    pub fn search<P, Sp, St>(&self, problem: &P) -> Result<SearchOutcome<St>, SearchError<St>>
    where
        P: Problem<Sp, St>,
        Sp: Space<St>,
        St: State,
    {
        match self {
            Algorithm::BreadthFirst => BreadthFirstSearch::<P, Sp, St>::new(problem)?.run(),
            Algorithm::DepthFirst => DepthFirstSearch::<P, Sp, St>::new(problem)?.run(),
            Algorithm::Bidirectional => BidirectionalSearch::<P, Sp, St>::new(problem)?.run(),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Algorithm as clap::ValueEnum>::from_str(s, true)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::problem::Endpoint;
    use crate::problems::maze_2d::Maze2DProblem;
    use crate::problems::maze_2d::Maze2DState;

    fn s(x: u32, y: u32) -> Maze2DState {
        Maze2DState::new(x, y).unwrap()
    }

    fn search_all(
        maze: &Maze2DProblem,
    ) -> Vec<(Algorithm, SearchOutcome<Maze2DState>)> {
        Algorithm::ALL
            .iter()
            .map(|a| (*a, a.search(maze).unwrap()))
            .collect()
    }

    /// Size of the connected component around `from`, walls excluded.
    fn component_size(maze: &Maze2DProblem, from: Maze2DState) -> usize {
        let mut seen = FxHashSet::default();
        let mut pending = vec![from];
        seen.insert(from);
        while let Some(s) = pending.pop() {
            for n in maze.space().neighbours(&s) {
                if seen.insert(n) {
                    pending.push(n);
                }
            }
        }
        seen.len()
    }

    #[test]
    fn start_is_goal() {
        // Editing can't put both endpoints on the same cell, but files can.
        let maze = Maze2DProblem::from_json_str(
            r#"{"width": 3, "height": 3, "grid": [[0, 0, 0], [0, 3, 0], [0, 0, 0]], "start": [1, 1], "goal": [1, 1]}"#,
        )
        .unwrap();
        assert_eq!(maze.start(), maze.goal());

        for (a, outcome) in search_all(&maze) {
            assert_eq!(outcome.path.states(), &[s(1, 1)], "{a}");
            assert!(outcome.nodes_expanded >= 1, "{a}");
        }
    }

    #[test]
    fn open_grid() {
        let maze = Maze2DProblem::try_from(indoc! {"
            S....
            .....
            .....
            .....
            ....G
        "})
        .unwrap();

        let outcome = Algorithm::BreadthFirst.search(&maze).unwrap();
        assert_eq!(outcome.path.len(), 9);
        assert!(outcome.nodes_expanded <= 25);

        for (a, outcome) in search_all(&maze) {
            assert!(maze.valid_solution(&outcome.path), "{a}");
            assert!(outcome.found(), "{a}");
        }
    }

    #[test]
    fn single_corridor() {
        let maze = Maze2DProblem::try_from(indoc! {"
            S#.
            .#.
            ..G
        "})
        .unwrap();

        for (a, outcome) in search_all(&maze) {
            assert_eq!(
                outcome.path.states(),
                &[s(0, 0), s(0, 1), s(0, 2), s(1, 2), s(2, 2)],
                "{a}"
            );
        }
    }

    #[test]
    fn enclosed_start() {
        let maze = Maze2DProblem::try_from(indoc! {"
            .#...
            #S#..
            .#..G
        "})
        .unwrap();

        for (a, outcome) in search_all(&maze) {
            assert!(outcome.path.is_empty(), "{a}");
            assert!(!outcome.found(), "{a}");
            assert_eq!(outcome.nodes_expanded, 1, "{a}");
        }
    }

    #[test]
    fn unreachable_goal_explores_the_whole_component() {
        let maze = Maze2DProblem::try_from(indoc! {"
            S..#...
            .#.#.#.
            ...#..G
        "})
        .unwrap();
        let reachable = component_size(&maze, s(0, 0));
        assert_eq!(reachable, 8);

        for a in [Algorithm::BreadthFirst, Algorithm::DepthFirst] {
            let outcome = a.search(&maze).unwrap();
            assert!(outcome.path.is_empty(), "{a}");
            assert_eq!(outcome.nodes_expanded, reachable, "{a}");
        }

        let outcome = Algorithm::Bidirectional.search(&maze).unwrap();
        assert!(outcome.path.is_empty());
        assert!(outcome.nodes_expanded <= reachable + component_size(&maze, s(6, 2)));
    }

    #[test]
    fn corridor_meeting_point() {
        for n in 2..=12usize {
            let corridor = format!("S{}G", ".".repeat(n - 2));
            let maze = Maze2DProblem::try_from(corridor.as_str()).unwrap();

            let outcome = Algorithm::Bidirectional.search(&maze).unwrap();
            let meeting = outcome.meeting.unwrap().x() as usize;
            let middle = (n - 1) / 2;
            assert!(
                meeting == middle || meeting == middle + 1,
                "n={n} met at {meeting}"
            );
            assert_eq!(outcome.path.len(), n);
        }
    }

    #[test]
    fn invalid_problems_are_refused() {
        let maze = Maze2DProblem::try_from("S#G").unwrap();
        let mut walled = maze.clone();
        walled
            .set_cell(s(2, 0), crate::problems::maze_2d::Maze2DCell::Wall)
            .unwrap();

        for a in Algorithm::ALL {
            assert_eq!(
                a.search(&walled),
                Err(SearchError::InvalidProblem(
                    InvalidProblemError::MissingEndpoint(Endpoint::Goal)
                ))
            );
            // A wall in between is just an unsolvable maze.
            assert!(a.search(&maze).unwrap().path.is_empty());
        }
    }

    #[test]
    fn random_mazes() {
        for seed in 0..200u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let Some(maze) = Maze2DProblem::new_random(11, 9, 0.3, &mut rng) else {
                continue;
            };

            let outcomes = search_all(&maze);
            let (_, bfs) = &outcomes[0];
            for (a, outcome) in &outcomes {
                // Everybody agrees on whether there is a path.
                assert_eq!(outcome.found(), bfs.found(), "{a} seed={seed}");
                assert!(maze.valid_solution(&outcome.path), "{a} seed={seed}");
                // Nobody beats BFS.
                assert!(outcome.path.len() >= bfs.path.len(), "{a} seed={seed}");
                // Deterministic
                assert_eq!(a.search(&maze).unwrap(), *outcome, "{a} seed={seed}");
            }
        }
    }

    #[test]
    fn bfs_is_optimal() {
        for seed in 0..100u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let Some(maze) = Maze2DProblem::new_random(8, 8, 0.25, &mut rng) else {
                continue;
            };
            let outcome = Algorithm::BreadthFirst.search(&maze).unwrap();
            // Brute force distances with a plain level by level walk.
            if let (Some(start), Some(goal)) = (maze.start(), maze.goal()) {
                let mut level = vec![start];
                let mut seen = FxHashSet::from_iter([start]);
                let mut distance = 1usize;
                let mut shortest = None;
                while !level.is_empty() {
                    if level.contains(&goal) {
                        shortest = Some(distance);
                        break;
                    }
                    let mut next = vec![];
                    for s in &level {
                        for n in maze.space().neighbours(s) {
                            if seen.insert(n) {
                                next.push(n);
                            }
                        }
                    }
                    level = next;
                    distance += 1;
                }
                assert_eq!(
                    shortest.unwrap_or(0),
                    outcome.path.len(),
                    "seed={seed}"
                );
            }
        }
    }

    #[test]
    fn bidirectional_is_optimal_on_unique_paths() {
        let maze = Maze2DProblem::try_from(indoc! {"
            S.#.....
            #.#.###.
            #...#.#.
            ###.#.#G
        "})
        .unwrap();

        let bfs = Algorithm::BreadthFirst.search(&maze).unwrap();
        let bds = Algorithm::Bidirectional.search(&maze).unwrap();
        assert_eq!(bds.path, bfs.path);
    }

    #[test]
    fn bundled_mazes() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/mazes");

        let winding = Maze2DProblem::load(&dir.join("winding_25x11.json")).unwrap();
        assert_eq!(
            Maze2DProblem::load(&dir.join("winding_25x11.txt")).unwrap(),
            winding
        );
        assert_eq!(
            Algorithm::BreadthFirst.search(&winding).unwrap().path.len(),
            115
        );
        for (a, outcome) in search_all(&winding) {
            assert!(outcome.found(), "{a}");
            assert!(winding.valid_solution(&outcome.path), "{a}");
        }

        let bordered = Maze2DProblem::load(&dir.join("bordered_41x41.json")).unwrap();
        assert_eq!(bordered, Maze2DProblem::bordered(41, 41).unwrap());
        assert_eq!(
            Algorithm::BreadthFirst.search(&bordered).unwrap().path.len(),
            77
        );
    }

    #[test]
    fn parse_names() {
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::BreadthFirst));
        assert_eq!("DFS".parse::<Algorithm>(), Ok(Algorithm::DepthFirst));
        assert_eq!("bds".parse::<Algorithm>(), Ok(Algorithm::Bidirectional));
        assert!("astar".parse::<Algorithm>().is_err());
    }
}

//! Search results as reported to people.
//!
//! Searches never read clocks nor print, callers time them with [`measure`]
//! and turn the outcome into a [`SearchResult`].
use std::time::Duration;

use hrsw::Stopwatch;
use human_duration::human_duration;
use thousands::Separable;

use crate::algorithms::Algorithm;
use crate::algorithms::SearchError;
use crate::algorithms::SearchOutcome;
use crate::problem::Problem;
use crate::space::Path;
use crate::space::Space;
use crate::space::State;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_expanded: usize,
    pub backtracks: usize,
    pub elapsed: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult<St>
where
    St: State,
{
    pub path: Path<St>,
    pub stats: SearchStats,
    pub meeting: Option<St>,
}

impl<St> SearchResult<St>
where
    St: State,
{
    pub fn new(outcome: SearchOutcome<St>, elapsed: Duration) -> Self {
        Self {
            path: outcome.path,
            stats: SearchStats {
                nodes_expanded: outcome.nodes_expanded,
                backtracks: outcome.backtracks,
                elapsed,
            },
            meeting: outcome.meeting,
        }
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Human readable summary, one stat per line.
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use maze_search::algorithms::SearchOutcome;
    /// use maze_search::problems::maze_2d::Maze2DState;
    /// use maze_search::report::SearchResult;
    /// use maze_search::space::Path;
    ///
    /// let outcome = SearchOutcome {
    ///     path: Path::<Maze2DState>::empty(),
    ///     nodes_expanded: 12345,
    ///     backtracks: 7,
    ///     meeting: None,
    /// };
    /// let result = SearchResult::new(outcome, Duration::from_millis(1500));
    ///
    /// assert_eq!(
    ///     result.summary(false).to_string(),
    ///     "Path length: 0\nNodes expanded: 12,345\nTime: 1.500000s\n"
    /// );
    /// ```
    pub fn summary(&self, show_backtracks: bool) -> Summary<'_, St> {
        Summary {
            result: self,
            show_backtracks,
        }
    }
}

pub struct Summary<'r, St>
where
    St: State,
{
    result: &'r SearchResult<St>,
    show_backtracks: bool,
}

impl<St> std::fmt::Display for Summary<'_, St>
where
    St: State,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let stats = &self.result.stats;
        writeln!(
            f,
            "Path length: {}",
            self.result.path.len().separate_with_commas()
        )?;
        writeln!(
            f,
            "Nodes expanded: {}",
            stats.nodes_expanded.separate_with_commas()
        )?;
        if self.show_backtracks {
            writeln!(f, "Backtracks: {}", stats.backtracks.separate_with_commas())?;
        }
        writeln!(f, "Time: {:.6}s", stats.elapsed.as_secs_f64())
    }
}

/// Runs `f`, timing it.
pub fn measure<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let mut stopwatch = Stopwatch::new_started();
    let value = f();
    stopwatch.stop();
    (value, stopwatch.elapsed())
}

/// Runs and times `algorithm` on a problem.
pub fn solve<P, Sp, St>(
    algorithm: Algorithm,
    problem: &P,
) -> Result<SearchResult<St>, SearchError<St>>
where
    P: Problem<Sp, St>,
    Sp: Space<St>,
    St: State,
{
    let (outcome, elapsed) = measure(|| algorithm.search(problem));
    let outcome = outcome?;
    log::info!(
        "{algorithm} expanded {} nodes in {}",
        outcome.nodes_expanded,
        human_duration(&elapsed)
    );
    Ok(SearchResult::new(outcome, elapsed))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::problems::maze_2d::Maze2DProblem;
    use crate::problems::maze_2d::Maze2DState;

    fn s(x: u32, y: u32) -> Maze2DState {
        Maze2DState::new(x, y).unwrap()
    }

    #[test]
    fn summary_with_backtracks() {
        let outcome = SearchOutcome {
            path: Path::from(vec![s(0, 0), s(1, 0)]),
            nodes_expanded: 2,
            backtracks: 1_000,
            meeting: None,
        };
        let result = SearchResult::new(outcome, Duration::from_micros(42));

        assert!(result.found());
        assert_eq!(
            result.summary(true).to_string(),
            indoc! {"
                Path length: 2
                Nodes expanded: 2
                Backtracks: 1,000
                Time: 0.000042s
            "}
        );
    }

    #[test]
    fn keeps_the_outcome() {
        let outcome = SearchOutcome {
            path: Path::from(vec![s(0, 0), s(1, 0), s(2, 0)]),
            nodes_expanded: 2,
            backtracks: 0,
            meeting: Some(s(1, 0)),
        };
        let result = SearchResult::new(outcome.clone(), Duration::ZERO);

        assert_eq!(result.path, outcome.path);
        assert_eq!(result.meeting, Some(s(1, 0)));
        assert_eq!(result.stats.nodes_expanded, 2);
        assert_eq!(result.stats.elapsed, Duration::ZERO);
    }

    #[test]
    fn measure_times_the_call() {
        let (value, elapsed) = measure(|| {
            std::thread::sleep(Duration::from_millis(5));
            7
        });
        assert_eq!(value, 7);
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn solve_every_algorithm() {
        let maze = Maze2DProblem::try_from(indoc! {"
            S...
            .##.
            ...G
        "})
        .unwrap();

        for algorithm in Algorithm::ALL {
            let result = solve(algorithm, &maze).unwrap();
            assert!(result.found(), "{algorithm}");
            assert_eq!(result.path.len(), 6, "{algorithm}");
        }
    }

    #[test]
    fn solve_refuses_invalid_mazes() {
        let maze = Maze2DProblem::try_from("S..").unwrap();
        assert!(solve(Algorithm::BreadthFirst, &maze).is_err());
    }
}

//! Breadth-first and depth-first search.
//!
//! Both are the same search from the start state until the goal gets popped,
//! run over a different frontier.

use std::marker::PhantomData;

use crate::algorithms::SearchError;
use crate::algorithms::SearchOutcome;
use crate::algorithms::traversal::Goal;
use crate::algorithms::traversal::SearchStatus;
use crate::algorithms::traversal::Traversal;
use crate::data_structures::frontier::Fifo;
use crate::data_structures::frontier::Frontier;
use crate::data_structures::frontier::Lifo;
use crate::problem::Problem;
use crate::space::Path;
use crate::space::Space;
use crate::space::State;

/// Search from a single source, parameterized by its frontier.
#[derive(Debug)]
pub struct SingleSourceSearch<'p, P, Sp, St, F>
where
    P: Problem<Sp, St>,
    Sp: Space<St>,
    St: State,
    F: Frontier<St>,
{
    problem: &'p P,
    goal: Goal<St>,
    traversal: Traversal<St, F>,
    status: SearchStatus<St>,

    _phantom_space: PhantomData<Sp>,
}

pub type BreadthFirstSearch<'p, P, Sp, St> = SingleSourceSearch<'p, P, Sp, St, Fifo<St>>;
pub type DepthFirstSearch<'p, P, Sp, St> = SingleSourceSearch<'p, P, Sp, St, Lifo<St>>;

impl<'p, P, Sp, St, F> SingleSourceSearch<'p, P, Sp, St, F>
where
    P: Problem<Sp, St>,
    Sp: Space<St>,
    St: State,
    F: Frontier<St>,
{
    /// Initialises the Search
    ///
    /// Problems without a valid start and goal are refused.
    pub fn new(problem: &'p P) -> Result<Self, SearchError<St>> {
        let (start, goal) = problem.endpoints()?;
        log::debug!("Seeding search from {start} towards {goal}");

        Ok(Self {
            problem,
            goal: Goal(goal),
            traversal: Traversal::new(start),
            status: SearchStatus::Running,

            _phantom_space: PhantomData,
        })
    }

    pub fn status(&self) -> SearchStatus<St> {
        self.status
    }

    /// Expands one more state, unless the search is over.
    pub fn step(&mut self) -> SearchStatus<St> {
        if self.status.is_running() {
            self.status = self.traversal.step(self.problem.space(), &self.goal);
        }
        self.status
    }

    /// Runs the search to completion.
    pub fn run(mut self) -> Result<SearchOutcome<St>, SearchError<St>> {
        while self.step().is_running() {}

        let counters = self.traversal.counters();
        let path = match self.status {
            SearchStatus::Found(goal) => {
                let path = self.traversal.tree().path_from_root(goal).inspect_err(|e| {
                    log::warn!("Path reconstruction failed: {e}");
                })?;
                #[cfg(feature = "verify")]
                debug_assert!(self.problem.valid_solution(&path));
                log::debug!(
                    "Found {goal} after {} expansions ({} states long)",
                    counters.nodes_expanded,
                    path.len()
                );
                path
            }
            _ => {
                log::debug!(
                    "No path after {} expansions",
                    counters.nodes_expanded
                );
                Path::empty()
            }
        };

        Ok(SearchOutcome {
            path,
            nodes_expanded: counters.nodes_expanded,
            backtracks: counters.backtracks,
            meeting: None,
        })
    }
}

//! Bidirectional breadth-first search.
//!
//! A forward traversal from the start and a backward one from the goal take
//! turns expanding a single state each, forward first. The search stops as
//! soon as either of them touches a state the other one already visited, and
//! the path is stitched together through that meeting state.
//!
//! Spaces are assumed to be undirected, so walking the backward parents leads
//! from the meeting state to the goal.

use std::marker::PhantomData;

use crate::algorithms::SearchError;
use crate::algorithms::SearchOutcome;
use crate::algorithms::traversal::SearchStatus;
use crate::algorithms::traversal::Traversal;
use crate::data_structures::frontier::Fifo;
use crate::problem::Problem;
use crate::search::ReconstructionError;
use crate::space::Path;
use crate::space::Space;
use crate::space::State;

#[derive(Debug)]
pub struct BidirectionalSearch<'p, P, Sp, St>
where
    P: Problem<Sp, St>,
    Sp: Space<St>,
    St: State,
{
    problem: &'p P,
    forward: Traversal<St, Fifo<St>>,
    backward: Traversal<St, Fifo<St>>,
    status: SearchStatus<St>,

    _phantom_space: PhantomData<Sp>,
}

impl<'p, P, Sp, St> BidirectionalSearch<'p, P, Sp, St>
where
    P: Problem<Sp, St>,
    Sp: Space<St>,
    St: State,
{
    /// Initialises the Search
    ///
    /// Problems without a valid start and goal are refused.
    pub fn new(problem: &'p P) -> Result<Self, SearchError<St>> {
        let (start, goal) = problem.endpoints()?;
        log::debug!("Seeding bidirectional search between {start} and {goal}");

        Ok(Self {
            problem,
            forward: Traversal::new(start),
            backward: Traversal::new(goal),
            status: SearchStatus::Running,

            _phantom_space: PhantomData,
        })
    }

    /// `Found` carries the meeting state.
    pub fn status(&self) -> SearchStatus<St> {
        self.status
    }

    /// Runs a round, a forward step followed by a backward one.
    ///
    /// The backward step is skipped if the forward one ends the search.
    pub fn step(&mut self) -> SearchStatus<St> {
        if !self.status.is_running() {
            return self.status;
        }

        let space = self.problem.space();
        self.status = self.forward.step(space, self.backward.tree());
        if self.status.is_running() {
            self.status = self.backward.step(space, self.forward.tree());
        }
        if let SearchStatus::Found(meeting) = self.status {
            log::trace!("Both directions met at {meeting}");
        }
        self.status
    }

    /// Runs the search to completion.
    pub fn run(mut self) -> Result<SearchOutcome<St>, SearchError<St>> {
        while self.step().is_running() {}

        let counters = self.forward.counters() + self.backward.counters();
        let (path, meeting) = match self.status {
            SearchStatus::Found(meeting) => {
                let path = self.stitch(meeting).inspect_err(|e| {
                    log::warn!("Path reconstruction through {meeting} failed: {e}");
                })?;
                #[cfg(feature = "verify")]
                debug_assert!(self.problem.valid_solution(&path));
                log::debug!(
                    "Met at {meeting} after {} expansions ({} states long)",
                    counters.nodes_expanded,
                    path.len()
                );
                (path, Some(meeting))
            }
            _ => {
                log::debug!(
                    "No path after {} expansions",
                    counters.nodes_expanded
                );
                (Path::empty(), None)
            }
        };

        Ok(SearchOutcome {
            path,
            nodes_expanded: counters.nodes_expanded,
            backtracks: counters.backtracks,
            meeting,
        })
    }

    /// Joins `start..=meeting` with `meeting..=goal`, keeping a single copy of
    /// the meeting state.
    fn stitch(&self, meeting: St) -> Result<Path<St>, ReconstructionError<St>> {
        let backward = self.backward.tree();
        let mut path = self.forward.tree().path_from_root(meeting)?;

        match backward.parent(&meeting) {
            None => return Err(ReconstructionError::Untracked(meeting)),
            // The meeting state is the goal itself
            Some(None) => {}
            Some(Some(next)) => path.extend(backward.chain_to_root(next)?),
        }
        Ok(path)
    }
}

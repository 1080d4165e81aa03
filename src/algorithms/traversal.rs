//! One direction of an uninformed search.
//!
//! A `Traversal` pops a state from its frontier, checks it against a `Target`
//! and then reaches its unvisited neighbours. The frontier discipline is the
//! only thing telling breadth-first and depth-first traversals apart.

use crate::data_structures::frontier::Frontier;
use crate::search::SearchTree;
use crate::space::Space;
use crate::space::State;

/// What a traversal is looking for.
pub trait Target<St: State> {
    /// Checked on every popped state, before expanding it.
    fn reached_on_pop(&self, s: &St) -> bool;
    /// Checked on every newly visited state, right after reaching it.
    fn reached_on_discovery(&self, s: &St) -> bool;
}

/// A single goal state, found once it gets popped.
#[derive(Copy, Clone, Debug)]
pub struct Goal<St>(pub St);

impl<St: State> Target<St> for Goal<St> {
    #[inline(always)]
    fn reached_on_pop(&self, s: &St) -> bool {
        *s == self.0
    }
    #[inline(always)]
    fn reached_on_discovery(&self, _s: &St) -> bool {
        false
    }
}

/// The states visited by another traversal, met as soon as they are touched.
impl<St: State> Target<St> for SearchTree<St> {
    #[inline(always)]
    fn reached_on_pop(&self, s: &St) -> bool {
        self.contains(s)
    }
    #[inline(always)]
    fn reached_on_discovery(&self, s: &St) -> bool {
        self.contains(s)
    }
}

/// Where a traversal is at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchStatus<St> {
    Running,
    /// The target was reached at this state.
    Found(St),
    /// The frontier ran out before reaching the target.
    Exhausted,
}

impl<St> SearchStatus<St> {
    pub fn is_running(&self) -> bool {
        matches!(self, SearchStatus::Running)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionCounters {
    pub nodes_expanded: usize,
    /// Expansions that reached no new state.
    pub backtracks: usize,
}

impl std::ops::Add for ExpansionCounters {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            nodes_expanded: self.nodes_expanded + other.nodes_expanded,
            backtracks: self.backtracks + other.backtracks,
        }
    }
}

#[derive(Debug)]
pub struct Traversal<St, F>
where
    St: State,
    F: Frontier<St>,
{
    frontier: F,
    tree: SearchTree<St>,
    counters: ExpansionCounters,
}

impl<St, F> Traversal<St, F>
where
    St: State,
    F: Frontier<St>,
{
    /// Seeds a traversal at `root`.
    #[must_use]
    pub fn new(root: St) -> Self {
        let mut frontier = F::default();
        frontier.push_back(root);
        Self {
            frontier,
            tree: SearchTree::new(root),
            counters: ExpansionCounters::default(),
        }
    }

    pub fn tree(&self) -> &SearchTree<St> {
        &self.tree
    }

    pub fn counters(&self) -> ExpansionCounters {
        self.counters
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Expands the next state on the frontier.
    ///
    /// Stops as soon as the target is reached, leaving the rest of the
    /// neighbours unvisited. Reports `Exhausted` once the frontier is left
    /// empty.
    pub fn step<Sp, T>(&mut self, space: &Sp, target: &T) -> SearchStatus<St>
    where
        Sp: Space<St>,
        T: Target<St> + ?Sized,
    {
        #[cfg(feature = "coz_profile")]
        coz::scope!("NodeExpansion");

        let Some(current) = self.frontier.pop() else {
            return SearchStatus::Exhausted;
        };
        self.counters.nodes_expanded += 1;

        if target.reached_on_pop(&current) {
            return SearchStatus::Found(current);
        }

        let mut reached = 0usize;
        for s in space.neighbours(&current) {
            if !self.tree.reach(s, current) {
                continue;
            }
            reached += 1;
            self.frontier.push_back(s);

            if target.reached_on_discovery(&s) {
                return SearchStatus::Found(s);
            }
        }
        if reached == 0 {
            self.counters.backtracks += 1;
        }

        if self.frontier.is_empty() {
            SearchStatus::Exhausted
        } else {
            SearchStatus::Running
        }
    }
}

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::space::Path;
use crate::space::State;

/// Failures rebuilding a path out of parent pointers.
///
/// These are bugs, never a sign of an unsolvable problem.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconstructionError<St>
where
    St: State,
{
    #[error("{0} was never reached")]
    Untracked(St),
    #[error("Parent chain from {from} ended at {reached} instead of {root}")]
    BrokenChain { from: St, reached: St, root: St },
    #[error("Parent chain from {from} loops")]
    CyclicChain { from: St },
}

/// The tree of parent pointers grown by one search direction.
///
/// Every reached state has an entry, so the key set is also the set of visited
/// states. Entries are never removed nor re-parented.
pub struct SearchTree<St>
where
    St: State,
{
    root: St,
    parents: FxHashMap<St, Option<St>>,
}

impl<St> SearchTree<St>
where
    St: State,
{
    #[must_use]
    pub fn new(root: St) -> Self {
        let mut parents = FxHashMap::default();
        parents.insert(root, None);
        Self { root, parents }
    }

    pub fn root(&self) -> St {
        self.root
    }

    #[inline(always)]
    #[must_use]
    pub fn contains(&self, s: &St) -> bool {
        self.parents.contains_key(s)
    }

    /// Gets the parent of a reached state.
    ///
    /// `Some(None)` is the root.
    #[inline(always)]
    pub fn parent(&self, s: &St) -> Option<Option<St>> {
        self.parents.get(s).copied()
    }

    /// Reaches a new state through `parent`.
    ///
    /// Returns whether `s` was new. Already reached states keep their parent.
    #[inline(always)]
    pub fn reach(&mut self, s: St, parent: St) -> bool {
        debug_assert!(self.contains(&parent));
        match self.parents.entry(s) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(e) => {
                e.insert(Some(parent));
                true
            }
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Follows parents from `from` up to the root, in that order.
    pub fn chain_to_root(&self, from: St) -> Result<Path<St>, ReconstructionError<St>> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("PathReconstruction");

        let mut path = Path::<St>::new_from_start(from);
        let mut s = from;
        loop {
            match self.parent(&s) {
                None => return Err(ReconstructionError::Untracked(s)),
                Some(None) => break,
                Some(Some(p)) => {
                    // A tree of n nodes has chains of at most n states
                    if path.len() >= self.len() {
                        return Err(ReconstructionError::CyclicChain { from });
                    }
                    path.append(p);
                    s = p;
                }
            }
        }

        if s != self.root {
            return Err(ReconstructionError::BrokenChain {
                from,
                reached: s,
                root: self.root,
            });
        }
        Ok(path)
    }

    /// Builds the path from the root down to `to`.
    pub fn path_from_root(&self, to: St) -> Result<Path<St>, ReconstructionError<St>> {
        let mut path = self.chain_to_root(to)?;
        path.reverse();
        Ok(path)
    }

    #[cfg(test)]
    pub(crate) fn force_parent(&mut self, s: St, parent: Option<St>) {
        self.parents.insert(s, parent);
    }
}

impl<St> std::fmt::Debug for SearchTree<St>
where
    St: State,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SearchTree{{root: {}, ({} nodes)}}", self.root, self.len())
    }
}

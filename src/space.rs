use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Neighbours of a state.
///
/// Grid spaces have at most 4 orthogonal neighbours, larger fan-outs spill
/// onto the heap.
pub type Neighbours<St> = SmallVec<[St; 4]>;

pub trait State: Copy + Clone + Debug + Display + PartialEq + Eq + Hash + 'static {}

/// A sequence of states, from the first to the last one inclusive.
///
/// An empty Path means no path exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<St>
where
    St: State,
{
    states: Vec<St>,
}

impl<St> Path<St>
where
    St: State,
{
    #[inline(always)]
    pub fn new_from_start(start: St) -> Self {
        Self {
            states: vec![start],
        }
    }

    #[inline(always)]
    pub fn empty() -> Self {
        Self { states: vec![] }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of states, including both ends.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn start(&self) -> Option<&St> {
        self.states.first()
    }
    pub fn end(&self) -> Option<&St> {
        self.states.last()
    }

    pub fn states(&self) -> &[St] {
        &self.states
    }
    pub fn iter(&self) -> std::slice::Iter<'_, St> {
        self.states.iter()
    }
    pub fn contains(&self, s: &St) -> bool {
        self.states.contains(s)
    }

    #[inline(always)]
    pub fn append(&mut self, s: St) {
        self.states.push(s);
    }

    /// Appends all the states of another Path.
    pub fn extend(&mut self, tail: Path<St>) {
        self.states.extend(tail.states);
    }

    /// Reverses the Path.
    ///
    /// Useful when naturally reconstructing paths in reverse.
    pub fn reverse(&mut self) {
        self.states.reverse();
    }
}

impl<St> From<Vec<St>> for Path<St>
where
    St: State,
{
    fn from(states: Vec<St>) -> Self {
        Self { states }
    }
}

impl<'a, St> IntoIterator for &'a Path<St>
where
    St: State,
{
    type Item = &'a St;
    type IntoIter = std::slice::Iter<'a, St>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

const MAX_ELEMENTS_DISPLAYED: usize = 20;

impl<St> std::fmt::Display for Path<St>
where
    St: State,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => {
                write!(f, "Path({}, {start}:", self.len())?;
                for s in self.states.iter().take(MAX_ELEMENTS_DISPLAYED) {
                    write!(f, "{s}")?;
                }
                if self.len() > MAX_ELEMENTS_DISPLAYED {
                    write!(f, "…")?;
                }
                write!(f, ":{end})")
            }
            _ => write!(f, "Path()"),
        }
    }
}

pub trait Space<St>: std::fmt::Debug
where
    St: State,
{
    /// Checks whether a State lies within the Space.
    fn contains(&self, s: &St) -> bool;
    /// Checks whether a State lies within the Space and can be traversed.
    fn valid(&self, s: &St) -> bool;
    /// Expands a State
    ///
    /// Only valid neighbours are returned, always in the same order.
    fn neighbours(&self, s: &St) -> Neighbours<St>;

    fn adjacent(&self, a: &St, b: &St) -> bool {
        self.neighbours(a).contains(b)
    }

    /// Checks that a Path only steps between adjacent valid states and never
    /// revisits a state.
    fn valid_path(&self, p: &Path<St>) -> bool {
        let mut seen = FxHashSet::<St>::default();
        for s in p {
            if !self.valid(s) || !seen.insert(*s) {
                return false;
            }
        }
        p.states().windows(2).all(|w| self.adjacent(&w[0], &w[1]))
    }

    fn size(&self) -> Option<usize> {
        None
    }
}

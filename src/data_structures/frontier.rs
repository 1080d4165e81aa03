use std::collections::VecDeque;
use std::fmt::Debug;

/// Frontier
///
/// The sequence of states waiting to be expanded. Its discipline decides which
/// one goes next, and that alone is what tells a breadth-first search apart
/// from a depth-first one.
pub trait Frontier<St>: Debug + Default {
    fn push_back(&mut self, s: St);
    fn pop(&mut self) -> Option<St>;
    fn is_empty(&self) -> bool;
    fn len(&self) -> usize;
}

/// First-in, first-out Frontier.
///
/// Pops from the opposite end it pushes to, expanding states level by level.
///
/// ```
/// use maze_search::data_structures::frontier::Fifo;
/// use maze_search::data_structures::frontier::Frontier;
///
/// let mut f = Fifo::<u8>::default();
/// f.push_back(1);
/// f.push_back(2);
/// assert_eq!(f.pop(), Some(1));
/// assert_eq!(f.pop(), Some(2));
/// assert_eq!(f.pop(), None);
/// ```
#[derive(Debug)]
pub struct Fifo<St> {
    queue: VecDeque<St>,
}

impl<St> Default for Fifo<St> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<St: Debug> Frontier<St> for Fifo<St> {
    #[inline(always)]
    fn push_back(&mut self, s: St) {
        self.queue.push_back(s);
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<St> {
        self.queue.pop_front()
    }
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last-in, first-out Frontier.
///
/// Pops from the same end it pushes to, so the last pushed neighbour is the
/// next one explored.
///
/// ```
/// use maze_search::data_structures::frontier::Frontier;
/// use maze_search::data_structures::frontier::Lifo;
///
/// let mut f = Lifo::<u8>::default();
/// f.push_back(1);
/// f.push_back(2);
/// assert_eq!(f.pop(), Some(2));
/// assert_eq!(f.pop(), Some(1));
/// assert!(f.is_empty());
/// ```
#[derive(Debug)]
pub struct Lifo<St> {
    stack: Vec<St>,
}

impl<St> Default for Lifo<St> {
    fn default() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<St: Debug> Frontier<St> for Lifo<St> {
    #[inline(always)]
    fn push_back(&mut self, s: St) {
        self.stack.push(s);
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<St> {
        self.stack.pop()
    }
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.stack.len()
    }
}

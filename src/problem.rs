use derive_more::Display;
use thiserror::Error;

use crate::space::Path;
use crate::space::Space;
use crate::space::State;

/// One of the two ends of a search.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum Endpoint {
    #[display("start")]
    Start,
    #[display("goal")]
    Goal,
}

/// Reasons to refuse searching a Problem.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidProblemError<St>
where
    St: State,
{
    #[error("The problem has no {0}")]
    MissingEndpoint(Endpoint),
    #[error("The {endpoint} {state} is out of bounds")]
    OutOfBounds { endpoint: Endpoint, state: St },
    #[error("The {endpoint} {state} is blocked")]
    Blocked { endpoint: Endpoint, state: St },
}

pub trait Problem<Sp, St>: std::fmt::Debug
where
    Sp: Space<St>,
    St: State,
{
    fn space(&self) -> &Sp;
    fn start(&self) -> Option<St>;
    fn goal(&self) -> Option<St>;

    fn is_goal(&self, s: &St) -> bool {
        self.goal().as_ref() == Some(s)
    }

    /// Gets the `(start, goal)` pair, as long as both can be searched from.
    fn endpoints(&self) -> Result<(St, St), InvalidProblemError<St>> {
        let check = |endpoint: Endpoint,
                     state: Option<St>|
         -> Result<St, InvalidProblemError<St>> {
            let state = state.ok_or(InvalidProblemError::MissingEndpoint(endpoint))?;
            if !self.space().contains(&state) {
                return Err(InvalidProblemError::OutOfBounds { endpoint, state });
            }
            if !self.space().valid(&state) {
                return Err(InvalidProblemError::Blocked { endpoint, state });
            }
            Ok(state)
        };

        Ok((
            check(Endpoint::Start, self.start())?,
            check(Endpoint::Goal, self.goal())?,
        ))
    }

    /// Checks that a Path solves this Problem.
    ///
    /// Empty paths are fine, they claim no solution exists.
    fn valid_solution(&self, p: &Path<St>) -> bool {
        if p.is_empty() {
            return true;
        }
        p.start().copied() == self.start()
            && p.end().copied() == self.goal()
            && self.space().valid_path(p)
    }
}

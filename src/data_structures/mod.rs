//! Data structures backing the searches.

pub mod frontier;

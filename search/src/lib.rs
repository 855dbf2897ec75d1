//! Pancake Search: deterministic A* over pancake flips.
//!
//! # Crate dependency graph
//!
//! ```text
//! pancake_kernel  ←  pancake_search  ←  pancake_harness
//! (stack, flips)     (open set, A*)     (input, CLI, timing)
//! ```
//!
//! # Key types
//!
//! - [`search::Search`]: search handle (`new`, then `run`, then `result`)
//! - [`open_set::OpenSet`]: indexed min-heap with keyed lookup and decrease-key
//! - [`node::SearchNode`]: one state plus path bookkeeping
//! - [`path::PathOutcome`]: flip sequence recovered from the goal
//! - [`report::SearchReport`]: serializable run summary with content digest

#![forbid(unsafe_code)]

pub mod error;
pub mod node;
pub mod open_set;
pub mod path;
pub mod policy;
pub mod report;
pub mod search;

pub use error::{OpenSetError, SearchError};
pub use policy::SearchPolicy;
pub use search::{solve, Search, SearchResult, SearchStatus};

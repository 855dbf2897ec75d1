//! Typed search errors.
//!
//! `SearchError` covers pre-flight failures (bad input stack, bad policy) and
//! open-set invariant violations. Running out of states is not an error: it
//! is reported as [`crate::search::SearchResult::NoSolution`].

use pancake_kernel::StackError;
use thiserror::Error;

/// Misuse of the [`crate::open_set::OpenSet`] API.
///
/// The search driver never triggers these; seeing one means a bug in the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OpenSetError {
    /// `extract_best` on an empty set.
    #[error("extract from an empty open set")]
    Empty,
    /// `insert` of a state that is already resident.
    #[error("state is already resident in the open set")]
    DuplicateState,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The initial stack failed validation.
    #[error("invalid stack: {0}")]
    InvalidStack(#[from] StackError),
    /// A policy option has an unusable value.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// Internal invariant violation in the open set.
    #[error("open set invariant violated: {0}")]
    OpenSet(#[from] OpenSetError),
}

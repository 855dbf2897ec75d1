//! Search policy: optional budgets checked between iterations.

use std::time::Duration;

use crate::error::SearchError;

/// Budget configuration for a search run.
///
/// The defaults impose no limits; the search then runs until it finds the
/// goal or exhausts the reachable states. A run stopped by a budget reports
/// [`crate::search::SearchResult::Stopped`], which is distinct from
/// `NoSolution`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions.
    pub max_expansions: Option<u64>,
    /// Wall-clock limit measured from the first call to `run`.
    pub time_limit: Option<Duration>,
}

impl SearchPolicy {
    /// Unlimited search.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// Reject budgets that could never allow a single expansion.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a zero expansion cap or a
    /// zero time limit.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.time_limit == Some(Duration::ZERO) {
            return Err(SearchError::InvalidPolicy {
                detail: "time_limit must be non-zero".into(),
            });
        }
        Ok(())
    }
}

//! `SearchReport`: a serializable summary of one search run.
//!
//! The report carries no timing, so identical inputs produce identical bytes
//! and an identical [`SearchReport::digest`] in any process.

use pancake_kernel::hash::{canonical_hash, stack_fingerprint, ContentHash};
use serde::Serialize;

use crate::search::{Search, SearchResult, SearchStats, StopReason};

/// Domain prefix for search report content hashing.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"PANCAKE::SEARCH_REPORT::V1\0";

/// How the run ended, in report form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TerminationV1 {
    Solved {
        already_sorted: bool,
        flips: Vec<usize>,
        total_cost: u64,
    },
    NoSolution,
    Stopped {
        reason: StopReason,
    },
    /// `run` was never called.
    NotRun,
}

/// Serializable run summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub root: Vec<u32>,
    pub root_fingerprint: String,
    pub termination: TerminationV1,
    pub stats: SearchStats,
    pub max_expansions: Option<u64>,
}

impl SearchReport {
    #[must_use]
    pub fn from_search(search: &Search) -> Self {
        let termination = match search.result() {
            Some(SearchResult::Solved {
                outcome,
                total_cost,
            }) => TerminationV1::Solved {
                already_sorted: outcome.flips().is_empty(),
                flips: outcome.flips().to_vec(),
                total_cost,
            },
            Some(SearchResult::NoSolution) => TerminationV1::NoSolution,
            Some(SearchResult::Stopped { reason }) => TerminationV1::Stopped { reason },
            None => TerminationV1::NotRun,
        };

        Self {
            root: search.root().plates().to_vec(),
            root_fingerprint: stack_fingerprint(search.root()).as_str().to_string(),
            termination,
            stats: search.stats(),
            max_expansions: search.policy().max_expansions,
        }
    }

    /// Compact JSON bytes (field order as declared).
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Content hash of [`to_json_bytes`](Self::to_json_bytes).
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        Ok(canonical_hash(DOMAIN_SEARCH_REPORT, &self.to_json_bytes()?))
    }
}

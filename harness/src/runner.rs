//! Harness runner: build a search, time it, and package the outcome.
//!
//! # Pipeline
//!
//! ```text
//! PlateStack + SearchPolicy → Search::from_stack → run (timed)
//!   → result + SearchReport → optional report file
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use pancake_kernel::PlateStack;
use pancake_search::report::SearchReport;
use pancake_search::search::{Search, SearchResult};
use pancake_search::{SearchError, SearchPolicy};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("search ended without a result")]
    Unfinished,
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write report to {path}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Inputs for one harness run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub stack: PlateStack,
    pub policy: SearchPolicy,
    /// Where to write the JSON report, if anywhere.
    pub report_path: Option<PathBuf>,
}

impl RunConfig {
    #[must_use]
    pub fn new(stack: PlateStack) -> Self {
        Self {
            stack,
            policy: SearchPolicy::default(),
            report_path: None,
        }
    }
}

/// Everything a caller needs to present a finished run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub root: PlateStack,
    pub result: SearchResult,
    pub report: SearchReport,
    /// Wall-clock time spent in `Search::run` only.
    pub elapsed: Duration,
}

/// Run one search to completion.
///
/// # Errors
///
/// - [`RunError::Search`] for an invalid policy or an internal search fault.
/// - [`RunError::Serialize`] / [`RunError::WriteReport`] if the report could
///   not be written to `config.report_path`.
pub fn run(config: RunConfig) -> Result<RunOutput, RunError> {
    let mut search = Search::from_stack(config.stack, config.policy)?;

    let started = Instant::now();
    search.run()?;
    let elapsed = started.elapsed();

    let result = search.result().ok_or(RunError::Unfinished)?;
    let report = SearchReport::from_search(&search);
    tracing::info!(
        solved = result.is_solved(),
        elapsed_ms = elapsed.as_millis() as u64,
        "run complete"
    );

    if let Some(path) = &config.report_path {
        write_report(path, &report)?;
    }

    Ok(RunOutput {
        root: search.root().clone(),
        result,
        report,
        elapsed,
    })
}

/// Write `report` as pretty JSON.
///
/// # Errors
///
/// [`RunError::Serialize`] or [`RunError::WriteReport`].
pub fn write_report(path: &Path, report: &SearchReport) -> Result<(), RunError> {
    let bytes = serde_json::to_vec_pretty(report)?;
    fs::write(path, bytes).map_err(|source| RunError::WriteReport {
        path: path.to_path_buf(),
        source,
    })
}

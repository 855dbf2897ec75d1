//! Human-readable output.

use std::fmt::Write;

use pancake_kernel::PlateStack;
use pancake_search::path::PathOutcome;
use pancake_search::search::{SearchResult, StopReason};

/// `"F3, F2"`.
#[must_use]
pub fn render_flips(flips: &[usize]) -> String {
    flips
        .iter()
        .map(|depth| format!("F{depth}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Multi-line description of a search result for `root`.
#[must_use]
pub fn render_outcome(root: &PlateStack, result: &SearchResult) -> String {
    match result {
        SearchResult::Solved {
            outcome: PathOutcome::AlreadySorted,
            ..
        } => "Pancake stack is already sorted!".to_string(),
        SearchResult::Solved {
            outcome: PathOutcome::Flips(flips),
            total_cost,
        } => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "The pancake stack {root} is solved by the following flip sequence:"
            );
            let _ = write!(out, "{}", render_flips(flips));
            let _ = write!(out, "\nTotal flip cost: {total_cost}");
            out
        }
        SearchResult::NoSolution => "Problem has no solution".to_string(),
        SearchResult::Stopped { reason } => match reason {
            StopReason::ExpansionBudget => {
                "Search stopped: expansion budget exhausted before a solution was found".to_string()
            }
            StopReason::TimeLimit => {
                "Search stopped: time limit reached before a solution was found".to_string()
            }
        },
    }
}

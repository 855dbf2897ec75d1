//! Flip-sequence replay: the round-trip check for search results.
//!
//! Replaying a solution's flips against the root stack must land on the
//! sorted stack. This is independent of the search and uses only
//! [`PlateStack::flip_in_place`].

use crate::error::FlipError;
use crate::stack::PlateStack;

/// Outcome of replaying a flip sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayVerdict {
    /// The replayed stack is sorted.
    Sorted,
    /// The replayed stack still has `gaps` gaps.
    Unsorted { gaps: u32 },
}

/// Apply `flips` to a copy of `root`, in order.
///
/// # Errors
///
/// Returns [`FlipError::DepthOutOfRange`] for the first illegal depth.
pub fn replay_flips(root: &PlateStack, flips: &[usize]) -> Result<PlateStack, FlipError> {
    let mut stack = root.clone();
    for &depth in flips {
        stack.flip_in_place(depth)?;
    }
    Ok(stack)
}

/// Replay `flips` and report whether they sort `root`.
///
/// # Errors
///
/// Returns [`FlipError::DepthOutOfRange`] for the first illegal depth.
pub fn verify_solution(root: &PlateStack, flips: &[usize]) -> Result<ReplayVerdict, FlipError> {
    let end = replay_flips(root, flips)?;
    let gaps = end.gap_heuristic();
    if gaps == 0 {
        Ok(ReplayVerdict::Sorted)
    } else {
        Ok(ReplayVerdict::Unsorted { gaps })
    }
}

/// Total cost of a flip sequence: the sum of its depths.
#[must_use]
pub fn flip_cost(flips: &[usize]) -> u64 {
    flips.iter().map(|&d| d as u64).sum()
}

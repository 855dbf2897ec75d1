//! Typed kernel errors.
//!
//! `StackError` is raised at construction time only. Once a [`crate::stack::PlateStack`]
//! exists, the only fallible operation on it is a flip with an illegal depth.

use thiserror::Error;

/// The input is not a valid pancake stack.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    /// No plates at all.
    #[error("pancake stack is empty")]
    Empty,
    /// The bottom position does not hold the largest plate.
    #[error("largest plate needs to be on the bottom (bottom is {bottom}, largest is {largest})")]
    BottomNotLargest { bottom: u32, largest: u32 },
    /// Plate sizes are not a permutation of `min..=max`.
    #[error("pancake stack should consist only of consecutive numbers ({len} plates spanning {min}..={max})")]
    NotContiguous { min: u32, max: u32, len: usize },
}

/// A flip was requested with a depth outside `2..=N-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipError {
    #[error("flip depth {depth} is out of range for a stack of {len} plates")]
    DepthOutOfRange { depth: usize, len: usize },
}

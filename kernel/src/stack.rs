//! `PlateStack`: a validated pancake stack with prefix-reversal moves.
//!
//! A stack is a permutation of a contiguous range `[lo, hi]` whose last
//! element (the bottom plate) is `hi`. Flips never touch the bottom plate,
//! so the invariant holds for every stack reachable from a valid one.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{FlipError, StackError};

/// Smallest legal flip depth. Depths 0 and 1 are no-ops.
pub const MIN_FLIP_DEPTH: usize = 2;

/// An ordered stack of distinct plate sizes, top first.
///
/// Construct via [`PlateStack::new`], which enforces the contiguous-range and
/// largest-at-bottom invariants. Cloning is a deep copy; successors are always
/// produced from a copy so that a stack already held elsewhere is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlateStack {
    plates: Vec<u32>,
}

impl PlateStack {
    /// Validate `plates` and wrap them.
    ///
    /// # Errors
    ///
    /// - [`StackError::Empty`] for an empty input.
    /// - [`StackError::BottomNotLargest`] if the last plate is not the maximum.
    /// - [`StackError::NotContiguous`] if the plates are not a permutation of
    ///   `min..=max` (gaps or duplicates).
    pub fn new(plates: Vec<u32>) -> Result<Self, StackError> {
        let (Some(&bottom), Some(&min), Some(&max)) =
            (plates.last(), plates.iter().min(), plates.iter().max())
        else {
            return Err(StackError::Empty);
        };

        if bottom != max {
            return Err(StackError::BottomNotLargest { bottom, largest: max });
        }

        let span = u64::from(max - min) + 1;
        if span != plates.len() as u64 {
            return Err(StackError::NotContiguous { min, max, len: plates.len() });
        }

        // span == len, so the range is covered exactly once iff no value repeats.
        let mut seen = vec![false; plates.len()];
        for &plate in &plates {
            let slot = (plate - min) as usize;
            if seen[slot] {
                return Err(StackError::NotContiguous { min, max, len: plates.len() });
            }
            seen[slot] = true;
        }

        Ok(Self { plates })
    }

    /// Number of plates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plates.len()
    }

    /// Always `false`: construction rejects empty stacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    /// Plate sizes, top of the stack first.
    #[must_use]
    pub fn plates(&self) -> &[u32] {
        &self.plates
    }

    /// The fixed bottom plate (the largest).
    #[must_use]
    pub fn bottom(&self) -> u32 {
        self.plates[self.plates.len() - 1]
    }

    /// Legal flip depths for this stack: `2..=N-1`.
    ///
    /// Empty for stacks of fewer than three plates.
    #[must_use]
    pub fn flip_depths(&self) -> RangeInclusive<usize> {
        // For N < 3 this yields 2..=1 (or 2..=0), which is empty.
        MIN_FLIP_DEPTH..=self.plates.len().saturating_sub(1)
    }

    /// Reverse the top `depth` plates in place.
    ///
    /// # Errors
    ///
    /// Returns [`FlipError::DepthOutOfRange`] if `depth` is not in
    /// [`flip_depths`](Self::flip_depths).
    pub fn flip_in_place(&mut self, depth: usize) -> Result<(), FlipError> {
        if !self.flip_depths().contains(&depth) {
            return Err(FlipError::DepthOutOfRange {
                depth,
                len: self.plates.len(),
            });
        }
        self.plates[..depth].reverse();
        Ok(())
    }

    /// Copy this stack and flip the copy.
    ///
    /// # Errors
    ///
    /// Same as [`flip_in_place`](Self::flip_in_place).
    pub fn flipped(&self, depth: usize) -> Result<Self, FlipError> {
        let mut next = self.clone();
        next.flip_in_place(depth)?;
        Ok(next)
    }

    /// Gap heuristic: adjacent positions whose sizes differ by more than one.
    #[must_use]
    pub fn gap_heuristic(&self) -> u32 {
        let gaps = self
            .plates
            .windows(2)
            .filter(|pair| pair[0].abs_diff(pair[1]) != 1)
            .count();
        // At most N - 1 gaps, and N fits comfortably in u32 for any searchable stack.
        u32::try_from(gaps).unwrap_or(u32::MAX)
    }

    /// True when the stack is in ascending order.
    ///
    /// With the largest plate fixed at the bottom, zero gaps implies ascending.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.gap_heuristic() == 0
    }

    /// The goal arrangement of the same plates.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut plates = self.plates.clone();
        plates.sort_unstable();
        Self { plates }
    }

    /// Consume the stack, returning the plate sizes.
    #[must_use]
    pub fn into_plates(self) -> Vec<u32> {
        self.plates
    }
}

impl fmt::Display for PlateStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, plate) in self.plates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{plate}")?;
        }
        f.write_str("]")
    }
}

impl TryFrom<Vec<u32>> for PlateStack {
    type Error = StackError;

    fn try_from(plates: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(plates)
    }
}

impl AsRef<[u32]> for PlateStack {
    fn as_ref(&self) -> &[u32] {
        &self.plates
    }
}

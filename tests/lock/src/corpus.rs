//! Stack corpora for exhaustive and fixture-driven tests.

use pancake_harness::random::random_stack;
use pancake_kernel::PlateStack;

/// Every valid stack of `1..=n` with `n` at the bottom, in lexicographic order.
///
/// # Panics
///
/// Panics if `n == 0`.
#[must_use]
pub fn all_stacks(n: u32) -> Vec<PlateStack> {
    assert!(n > 0, "stacks need at least one plate");
    let mut top: Vec<u32> = (1..n).collect();
    let mut out = Vec::new();
    loop {
        let mut plates = top.clone();
        plates.push(n);
        out.push(PlateStack::new(plates).expect("permutation of 1..=n"));
        if !next_permutation(&mut top) {
            return out;
        }
    }
}

/// Advance `v` to its next lexicographic permutation; `false` after the last.
fn next_permutation(v: &mut [u32]) -> bool {
    let Some(pivot) = (1..v.len()).rev().find(|&i| v[i - 1] < v[i]) else {
        return false;
    };
    let pivot = pivot - 1;
    let Some(swap) = (pivot + 1..v.len()).rev().find(|&j| v[j] > v[pivot]) else {
        return false;
    };
    v.swap(pivot, swap);
    v[pivot + 1..].reverse();
    true
}

/// The fixed corpus replayed by `search_fixture`: hand-picked stacks
/// followed by seeded random stacks of size 6 through 9.
///
/// # Panics
///
/// Panics if a hand-picked stack is invalid, which would be a corpus bug.
#[must_use]
pub fn fixture_corpus() -> Vec<PlateStack> {
    let fixed: [&[u32]; 4] = [&[1, 2, 3, 4], &[3, 1, 2, 4], &[2, 4, 1, 3, 5], &[6, 5, 7]];
    let mut corpus: Vec<PlateStack> = fixed
        .iter()
        .map(|p| PlateStack::new(p.to_vec()).expect("hand-picked stack is valid"))
        .collect();
    for (seed, size) in (6u32..=9).enumerate() {
        corpus.push(random_stack(size, Some(seed as u64)).expect("size > 0"));
    }
    corpus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stacks_counts_factorial() {
        assert_eq!(all_stacks(1).len(), 1);
        assert_eq!(all_stacks(3).len(), 2);
        assert_eq!(all_stacks(5).len(), 24);
        assert_eq!(all_stacks(6).len(), 120);
    }

    #[test]
    fn all_stacks_starts_sorted_and_is_distinct() {
        let stacks = all_stacks(5);
        assert!(stacks[0].is_sorted());
        let mut dedup = stacks.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), stacks.len());
    }

    #[test]
    fn fixture_corpus_is_stable() {
        assert_eq!(fixture_corpus(), fixture_corpus());
        assert_eq!(fixture_corpus().len(), 8);
    }
}

//! Shared helpers for pancake benchmark suites.

use pancake_harness::random::random_stack;
use pancake_kernel::PlateStack;
use pancake_search::node::SearchNode;

/// Seeded random stacks of `size` plates, one per seed in `0..count`.
///
/// # Panics
///
/// Panics if `size == 0`. Benchmark setup failures are fatal.
#[must_use]
pub fn seeded_stacks(size: u32, count: u64) -> Vec<PlateStack> {
    (0..count)
        .map(|seed| random_stack(size, Some(seed)).expect("size > 0"))
        .collect()
}

/// Open-set nodes over distinct states, with `f_cost` spread so that
/// inserts land at varied heap depths.
///
/// # Panics
///
/// Panics if `size == 0`. Benchmark setup failures are fatal.
#[must_use]
pub fn frontier_nodes(size: u32, count: u64) -> Vec<SearchNode> {
    let mut stacks = seeded_stacks(size, count);
    stacks.sort();
    stacks.dedup();
    stacks
        .into_iter()
        .enumerate()
        .map(|(i, stack)| {
            let mut node = SearchNode::root(stack, i as u64);
            node.g_cost = (i as u64 * 7919) % 97;
            node
        })
        .collect()
}

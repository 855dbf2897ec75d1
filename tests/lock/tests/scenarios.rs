//! End-to-end scenarios through the public search handle and the harness.

use pancake_harness::input::parse_stack;
use pancake_harness::random::random_stack;
use pancake_harness::render::{render_flips, render_outcome};
use pancake_harness::runner::{run, RunConfig};
use pancake_kernel::replay::{verify_solution, ReplayVerdict};
use pancake_kernel::StackError;
use pancake_search::path::PathOutcome;
use pancake_search::search::{Search, SearchResult, SearchStatus};
use pancake_search::{SearchError, SearchPolicy};

#[test]
fn stack_3124_is_solved_with_depths_two_and_three() {
    let mut search = Search::new(vec![3, 1, 2, 4], SearchPolicy::default()).unwrap();
    assert!(matches!(search.run().unwrap(), SearchStatus::Succeeded(_)));

    let result = search.result().unwrap();
    let flips = result.flips().unwrap();
    assert!(!flips.is_empty());
    assert!(flips.iter().all(|d| *d == 2 || *d == 3));
    assert_eq!(
        verify_solution(search.root(), flips),
        Ok(ReplayVerdict::Sorted)
    );
}

#[test]
fn stack_1234_reports_already_sorted() {
    let mut search = Search::new(vec![1, 2, 3, 4], SearchPolicy::default()).unwrap();
    search.run().unwrap();
    let result = search.result().unwrap();
    assert_eq!(
        result,
        SearchResult::Solved {
            outcome: PathOutcome::AlreadySorted,
            total_cost: 0
        }
    );
    assert_eq!(search.expanded().len(), 1, "only the root is popped");
    assert_eq!(
        render_outcome(search.root(), &result),
        "Pancake stack is already sorted!"
    );
}

#[test]
fn invalid_stacks_never_start_a_search() {
    assert!(matches!(
        Search::new(vec![], SearchPolicy::default()),
        Err(SearchError::InvalidStack(StackError::Empty))
    ));
    assert!(matches!(
        Search::new(vec![2, 3, 1], SearchPolicy::default()),
        Err(SearchError::InvalidStack(StackError::BottomNotLargest { .. }))
    ));
    assert!(matches!(
        Search::new(vec![1, 2, 4], SearchPolicy::default()),
        Err(SearchError::InvalidStack(StackError::NotContiguous { .. }))
    ));
}

#[test]
fn offset_ranges_are_supported() {
    let result = pancake_search::solve(vec![12, 10, 11, 13]).unwrap();
    let stack = parse_stack("12 10 11 13").unwrap();
    assert_eq!(
        verify_solution(&stack, result.flips().unwrap()),
        Ok(ReplayVerdict::Sorted)
    );
}

#[test]
fn random_ten_plate_stack_is_solved_through_the_harness() {
    let stack = random_stack(10, Some(2024)).unwrap();
    let output = run(RunConfig::new(stack.clone())).unwrap();
    let flips = output.result.flips().unwrap();
    assert_eq!(verify_solution(&stack, flips), Ok(ReplayVerdict::Sorted));
    assert!(render_flips(flips).starts_with('F') || flips.is_empty());
}

#[test]
fn expansion_budget_reports_stopped_not_no_solution() {
    // Eight gaps: no sequence of fewer than eight flips can sort it.
    let stack = parse_stack("9, 2, 7, 4, 1, 8, 3, 6, 5, 10").unwrap();
    assert_eq!(stack.gap_heuristic(), 8);
    let config = RunConfig {
        policy: SearchPolicy::default().with_max_expansions(3),
        ..RunConfig::new(stack)
    };
    let output = run(config).unwrap();
    assert!(matches!(output.result, SearchResult::Stopped { .. }));
    assert!(output.result.flips().is_none());
}

//! Replaying a returned flip sequence sorts the original stack.

use pancake_kernel::replay::{replay_flips, verify_solution, ReplayVerdict};
use pancake_kernel::PlateStack;
use pancake_search::solve;
use proptest::prelude::*;

fn arbitrary_stack() -> impl Strategy<Value = PlateStack> {
    (1u32..=9)
        .prop_flat_map(|n| {
            Just((1..n).collect::<Vec<_>>())
                .prop_shuffle()
                .prop_map(move |mut top| {
                    top.push(n);
                    top
                })
        })
        .prop_map(|plates| PlateStack::new(plates).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn returned_flips_replay_to_sorted(stack in arbitrary_stack()) {
        let result = solve(stack.plates().to_vec()).unwrap();
        prop_assert!(result.is_solved());
        let flips = result.flips().unwrap();

        let n = stack.len();
        for &depth in flips {
            prop_assert!((2..n).contains(&depth), "depth {} outside 2..={}", depth, n - 1);
        }

        prop_assert_eq!(verify_solution(&stack, flips), Ok(ReplayVerdict::Sorted));
        prop_assert_eq!(replay_flips(&stack, flips).unwrap(), stack.sorted());
    }

    #[test]
    fn solving_is_deterministic(stack in arbitrary_stack()) {
        let a = solve(stack.plates().to_vec()).unwrap();
        let b = solve(stack.plates().to_vec()).unwrap();
        prop_assert_eq!(a, b);
    }
}

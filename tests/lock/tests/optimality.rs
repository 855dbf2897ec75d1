//! A* agrees with the brute-force oracle on total flip cost.
//!
//! Exhaustive over every stack of up to six plates; sampled for seven and
//! eight plates.

use lock_tests::corpus::all_stacks;
use lock_tests::oracle::min_flip_cost;
use pancake_kernel::replay::flip_cost;
use pancake_search::search::{Search, SearchResult};
use pancake_search::SearchPolicy;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn astar_cost(stack: &pancake_kernel::PlateStack) -> u64 {
    let mut search = Search::from_stack(stack.clone(), SearchPolicy::default()).unwrap();
    search.run().unwrap();
    match search.result().unwrap() {
        SearchResult::Solved {
            outcome,
            total_cost,
        } => {
            assert_eq!(
                flip_cost(outcome.flips()),
                total_cost,
                "reported cost must equal the sum of returned depths for {stack}"
            );
            total_cost
        }
        other => panic!("expected {stack} to be solved, got {other:?}"),
    }
}

#[test]
fn matches_oracle_for_every_stack_up_to_six_plates() {
    for n in 1..=6 {
        for stack in all_stacks(n) {
            let expected = min_flip_cost(&stack).expect("every arrangement is reachable");
            assert_eq!(astar_cost(&stack), expected, "suboptimal result for {stack}");
        }
    }
}

#[test]
fn already_sorted_costs_nothing() {
    for n in 1..=8 {
        let stack = all_stacks(n).remove(0);
        assert!(stack.is_sorted());
        assert_eq!(astar_cost(&stack), 0);
    }
}

fn shuffled_stack(n: u32) -> impl Strategy<Value = pancake_kernel::PlateStack> {
    any::<u64>().prop_map(move |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut plates: Vec<u32> = (1..n).collect();
        plates.shuffle(&mut rng);
        plates.push(n);
        pancake_kernel::PlateStack::new(plates).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn matches_oracle_on_sampled_seven_and_eight_plate_stacks(
        stack in prop_oneof![shuffled_stack(7), shuffled_stack(8)]
    ) {
        prop_assert_eq!(Some(astar_cost(&stack)), min_flip_cost(&stack));
    }
}

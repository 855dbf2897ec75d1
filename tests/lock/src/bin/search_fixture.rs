//! Binary that solves the fixture corpus and prints deterministic output
//! lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: one `stack[i]=<plates> cost=<c> flips=<F..> digest=<sha256:..>`
//! line per corpus entry, then `corpus_size=<n>`.

use lock_tests::corpus::fixture_corpus;
use pancake_harness::render::render_flips;
use pancake_search::report::SearchReport;
use pancake_search::search::{Search, SearchResult};
use pancake_search::SearchPolicy;

fn main() {
    let corpus = fixture_corpus();
    for (i, stack) in corpus.iter().enumerate() {
        let mut search =
            Search::from_stack(stack.clone(), SearchPolicy::default()).expect("valid policy");
        search.run().expect("search run failed");
        let report = SearchReport::from_search(&search);
        let digest = report.digest().expect("report serializes");

        let Some(SearchResult::Solved {
            outcome,
            total_cost,
        }) = search.result()
        else {
            panic!("fixture stack {stack} was not solved");
        };

        println!(
            "stack[{i}]={stack} cost={total_cost} flips={} digest={digest}",
            render_flips(outcome.flips())
        );
    }
    println!("corpus_size={}", corpus.len());
}

//! Binary that runs every fixture query through UCS, A* and a seeded random
//! walk and prints deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: one `family.algorithm start->goal key=value ...` line per query.

use lock_tests::fixtures;
use pathfinder_harness::runner::{make_algorithm, AlgorithmKind};
use pathfinder_search::contract::Graph;
use pathfinder_search::policy::SearchPolicy;

fn run_family<G: Graph>(family: &str, graph: &G, queries: &[(&str, &str)]) {
    for kind in [AlgorithmKind::Ucs, AlgorithmKind::Astar, AlgorithmKind::Random] {
        let algorithm =
            make_algorithm(kind, graph, SearchPolicy::seeded(42)).expect("seeded policy is valid");
        for (start, goal) in queries {
            let s = graph.parse_vertex(start).expect("fixture vertex parses");
            let g = graph.parse_vertex(goal).expect("fixture vertex parses");
            let result = algorithm.search(&s, &g);
            let digest = result.digest().expect("report serializes");
            println!(
                "{family}.{} {start}->{goal} success={} cost={:.6} iterations={} digest={digest}",
                algorithm.name(),
                result.success,
                result.cost,
                result.iterations,
            );
        }
    }
}

fn main() {
    run_family("roads", &fixtures::roads(), fixtures::ROAD_QUERIES);
    run_family("maze", &fixtures::maze(), fixtures::MAZE_QUERIES);
    run_family("puzzle", &fixtures::puzzle(), fixtures::PUZZLE_QUERIES);
    run_family("words", &fixtures::words(), fixtures::WORD_QUERIES);
}

//! Lock tests: UCS and A* agree on optimal costs across every graph family,
//! every successful path is valid, and A* never pops more entries than UCS
//! under a consistent heuristic.

use lock_tests::fixtures;
use pathfinder_search::astar::AstarSearch;
use pathfinder_search::contract::Graph;
use pathfinder_search::result::SearchResult;
use pathfinder_search::search::SearchAlgorithm;
use pathfinder_search::ucs::UniformCostSearch;
use test_log::test;

const TOLERANCE: f64 = 1e-9;

/// Chained endpoints, summed weight equal to cost.
fn assert_valid_path<G: Graph>(result: &SearchResult<'_, G>) {
    result.validate().unwrap();
    let path = result.path.as_deref().expect("successful result has a path");
    if let Some(first) = path.first() {
        assert_eq!(first.start(), &result.start);
    }
    if let Some(last) = path.last() {
        assert_eq!(last.end(), &result.goal);
    }
    for pair in path.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start());
    }
    let total: f64 = path.iter().map(|e| e.weight()).sum();
    assert!((total - result.cost).abs() < TOLERANCE);
}

fn check_family<G: Graph>(graph: &G, queries: &[(&str, &str)]) {
    let ucs = UniformCostSearch::new(graph);
    let astar = AstarSearch::new(graph);
    for (start, goal) in queries {
        let s = graph.parse_vertex(start).unwrap();
        let g = graph.parse_vertex(goal).unwrap();
        let by_ucs = ucs.search(&s, &g);
        let by_astar = astar.search(&s, &g);

        assert!(by_ucs.success, "ucs {start} -> {goal} should succeed");
        assert!(by_astar.success, "astar {start} -> {goal} should succeed");
        assert!(
            (by_ucs.cost - by_astar.cost).abs() < TOLERANCE,
            "{start} -> {goal}: ucs {} vs astar {}",
            by_ucs.cost,
            by_astar.cost
        );
        assert!(
            by_astar.iterations <= by_ucs.iterations,
            "{start} -> {goal}: astar popped {} > ucs {}",
            by_astar.iterations,
            by_ucs.iterations
        );
        assert_valid_path(&by_ucs);
        assert_valid_path(&by_astar);
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: optimal cost agreement per family
// ---------------------------------------------------------------------------

#[test]
fn roads_ucs_matches_astar() {
    check_family(&fixtures::roads(), fixtures::ROAD_QUERIES);
}

#[test]
fn roads_known_cost() {
    let graph = fixtures::roads();
    let a = graph.parse_vertex("a").unwrap();
    let f = graph.parse_vertex("f").unwrap();
    let result = UniformCostSearch::new(&graph).search(&a, &f);
    assert!((result.cost - 13.0).abs() < TOLERANCE);
    assert_eq!(result.path.as_ref().map(Vec::len), Some(5));
}

#[test]
fn maze_ucs_matches_astar() {
    check_family(&fixtures::maze(), fixtures::MAZE_QUERIES);
}

#[test]
fn puzzle_ucs_matches_astar() {
    check_family(&fixtures::puzzle(), fixtures::PUZZLE_QUERIES);
}

#[test]
fn puzzle_known_move_counts() {
    let puzzle = fixtures::puzzle();
    let goal = puzzle.goal_state();
    for (start, moves) in [("/ABC/DEF/_GH/", 2.0), ("/_BC/ADE/GHF/", 4.0), ("/BC_/AEF/DGH/", 6.0)] {
        let s = puzzle.parse_vertex(start).unwrap();
        let result = AstarSearch::new(&puzzle).search(&s, &goal);
        assert!((result.cost - moves).abs() < TOLERANCE, "{start}");
    }
}

#[test]
fn words_ucs_matches_astar() {
    check_family(&fixtures::words(), fixtures::WORD_QUERIES);
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: unreachable goals
// ---------------------------------------------------------------------------

#[test]
fn unreachable_goals_fail_cleanly() {
    let graph = fixtures::roads();
    let a = graph.parse_vertex("a").unwrap();
    let g = graph.parse_vertex("g").unwrap();
    let ucs = UniformCostSearch::new(&graph).search(&a, &g);
    let astar = AstarSearch::new(&graph).search(&a, &g);
    for result in [&ucs, &astar] {
        assert!(!result.success);
        assert!(result.path.is_none());
        result.validate().unwrap();
    }
    // The roads heuristic is zero, so both explore a..f exactly once.
    assert_eq!(ucs.iterations, astar.iterations);

    let words = fixtures::words();
    let from = words.parse_vertex("from").unwrap();
    let cold = words.parse_vertex("cold").unwrap();
    let result = AstarSearch::new(&words).search(&cold, &from);
    assert!(!result.success);
    assert!(result.iterations >= 1);
}

//! Lock tests: the query runner over real graph families, in text and JSON
//! output modes.

use lock_tests::fixtures;
use pathfinder_harness::runner::{make_algorithm, run_queries, AlgorithmKind, RunOptions, RunnerError};
use pathfinder_search::policy::SearchPolicy;
use pathfinder_search::result::RenderOptions;

fn queries(pairs: &[(&str, &str)]) -> Vec<String> {
    pairs
        .iter()
        .flat_map(|(s, g)| [(*s).to_owned(), (*g).to_owned()])
        .collect()
}

#[test]
fn grid_query_draws_the_path() {
    let maze = fixtures::maze();
    let algorithm = make_algorithm(AlgorithmKind::Astar, &maze, SearchPolicy::default()).unwrap();
    let (mut out, mut err): (Vec<u8>, Vec<u8>) = (Vec::new(), Vec::new());
    let ran = run_queries(
        algorithm.as_ref(),
        &queries(&[("0:0", "2:2")]),
        &RunOptions::default(),
        &mut out,
        &mut err,
    )
    .unwrap();
    assert_eq!(ran, 1);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Searching: 0:0 --> 2:2"));
    assert!(text.contains("\nS........."), "start marked on the first row:\n{text}");
    assert!(text.contains('G'));
    assert!(text.contains('*'));
    assert!(err.is_empty());
}

#[test]
fn no_draw_option_omits_the_map() {
    let maze = fixtures::maze();
    let algorithm = make_algorithm(AlgorithmKind::Ucs, &maze, SearchPolicy::default()).unwrap();
    let options = RunOptions {
        render: RenderOptions {
            draw_graph: false,
            ..RenderOptions::default()
        },
        json: false,
    };
    let mut out: Vec<u8> = Vec::new();
    run_queries(
        algorithm.as_ref(),
        &queries(&[("0:0", "2:2")]),
        &options,
        &mut out,
        &mut std::io::sink(),
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains(".@@@@@@@@."));
}

#[test]
fn json_mode_emits_one_report_per_query() {
    let words = fixtures::words();
    let algorithm = make_algorithm(AlgorithmKind::Ucs, &words, SearchPolicy::default()).unwrap();
    let options = RunOptions {
        json: true,
        ..RunOptions::default()
    };
    let mut out: Vec<u8> = Vec::new();
    let ran = run_queries(
        algorithm.as_ref(),
        &queries(fixtures::WORD_QUERIES),
        &options,
        &mut out,
        &mut std::io::sink(),
    )
    .unwrap();
    assert_eq!(ran, fixtures::WORD_QUERIES.len());

    let text = String::from_utf8(out).unwrap();
    let reports: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(reports.len(), fixtures::WORD_QUERIES.len());
    assert_eq!(reports[0]["result"]["start"], "cold");
    assert_eq!(reports[0]["result"]["cost"], 4.0);
    assert!(reports.iter().all(|r| r["algorithm"] == "ucs"));
}

#[test]
fn parse_failures_do_not_stop_the_run() {
    let puzzle = fixtures::puzzle();
    let algorithm = make_algorithm(AlgorithmKind::Astar, &puzzle, SearchPolicy::default()).unwrap();
    let mut err: Vec<u8> = Vec::new();
    let ran = run_queries(
        algorithm.as_ref(),
        &queries(&[("/AB/C_/", "/ABC/DEF/GH_/"), ("/ABC/DEF/_GH/", "/ABC/DEF/GH_/")]),
        &RunOptions::default(),
        &mut std::io::sink(),
        &mut err,
    )
    .unwrap();
    assert_eq!(ran, 1);
    assert!(String::from_utf8(err).unwrap().contains("Parse error!"));
}

#[test]
fn odd_query_lists_are_rejected() {
    let roads = fixtures::roads();
    let algorithm = make_algorithm(AlgorithmKind::Ucs, &roads, SearchPolicy::default()).unwrap();
    let err = run_queries(
        algorithm.as_ref(),
        &queries(&[("a", "f")])[..1],
        &RunOptions::default(),
        &mut std::io::sink(),
        &mut std::io::sink(),
    )
    .unwrap_err();
    assert!(matches!(err, RunnerError::InvalidArgument { .. }));
}

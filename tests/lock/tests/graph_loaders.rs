//! Lock tests: graph families load from files on disk and reject bad input
//! with typed errors.

use std::io::Write;

use lock_tests::fixtures;
use pathfinder_harness::contract::{GraphSummary, LoadError};
use pathfinder_harness::worlds::adjacency::AdjacencyGraph;
use pathfinder_harness::worlds::grid::GridGraph;
use pathfinder_harness::worlds::npuzzle::NPuzzle;
use pathfinder_harness::worlds::word_ladder::WordLadder;
use pathfinder_search::contract::Graph;
use pathfinder_search::error::SearchError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::NamedTempFile;

fn write_fixture(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: loading from disk matches loading from text
// ---------------------------------------------------------------------------

#[test]
fn adjacency_graph_loads_from_file() {
    let file = write_fixture(fixtures::ROADS);
    let graph = AdjacencyGraph::load(file.path()).unwrap();
    assert!(graph.is_weighted());
    assert_eq!(graph.num_vertices().unwrap(), 8);
    assert_eq!(graph.num_edges().unwrap(), 10);
}

#[test]
fn grid_loads_from_file() {
    let file = write_fixture(fixtures::MAZE);
    let grid = GridGraph::load(file.path()).unwrap();
    assert_eq!((grid.width(), grid.height()), (10, 6));
}

#[test]
fn word_ladder_loads_from_file() {
    let file = write_fixture(fixtures::WORDS);
    let ladder = WordLadder::load(file.path()).unwrap();
    assert_eq!(ladder.num_vertices().unwrap(), 14);
}

#[test]
fn missing_files_are_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.txt");
    assert!(matches!(AdjacencyGraph::load(&missing), Err(LoadError::Io { .. })));
    assert!(matches!(GridGraph::load(&missing), Err(LoadError::Io { .. })));
    assert!(matches!(WordLadder::load(&missing), Err(LoadError::Io { .. })));
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: malformed input
// ---------------------------------------------------------------------------

#[test]
fn malformed_adjacency_line_is_located() {
    let file = write_fixture("a\tb\t1\n\n# ok\nb\tc\tslow\n");
    let err = AdjacencyGraph::load(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { line: 4, .. }), "{err}");
    assert!(err.to_string().starts_with("line 4: "));
}

#[test]
fn ragged_grid_is_malformed() {
    let file = write_fixture("map\n....\n...\n");
    let err = GridGraph::load(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { line: 3, .. }), "{err}");
}

#[test]
fn puzzle_size_argument() {
    assert!(matches!(NPuzzle::from_arg("9"), Err(LoadError::InvalidArgument { .. })));
    assert!(matches!(NPuzzle::from_arg("x"), Err(LoadError::InvalidArgument { .. })));
    assert_eq!(NPuzzle::from_arg("4").unwrap().goal_state().to_string(), "/ABCD/EFGH/IJKL/MNO_/");
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: vertex parsing and summaries
// ---------------------------------------------------------------------------

#[test]
fn vertex_parse_errors_are_typed() {
    assert!(matches!(fixtures::roads().parse_vertex("zz"), Err(SearchError::Parse { .. })));
    assert!(matches!(fixtures::maze().parse_vertex("1;1"), Err(SearchError::Parse { .. })));
    assert!(matches!(fixtures::puzzle().parse_vertex("/AB/C_/"), Err(SearchError::Parse { .. })));
    assert!(matches!(fixtures::words().parse_vertex("zzzz"), Err(SearchError::Parse { .. })));
}

#[test]
fn summaries_describe_each_family() {
    let mut rng = StdRng::seed_from_u64(11);
    assert!(fixtures::roads()
        .summary(&mut rng)
        .starts_with("Weighted adjacency graph with 8 vertices and 10 edges."));
    let maze = fixtures::maze().summary(&mut rng);
    assert!(maze.starts_with("Bitmap graph of dimensions 10 x 6 pixels.\n..........\n"));
    assert!(fixtures::puzzle().summary(&mut rng).contains("/ABC/DEF/GH_/"));
    assert!(fixtures::words().summary(&mut rng).starts_with("Word ladder graph with 14 words."));
}

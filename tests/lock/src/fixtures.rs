//! Small fixed graphs, one per family.

use pathfinder_harness::worlds::adjacency::AdjacencyGraph;
use pathfinder_harness::worlds::grid::GridGraph;
use pathfinder_harness::worlds::npuzzle::NPuzzle;
use pathfinder_harness::worlds::word_ladder::WordLadder;

/// Weighted road network; cheapest a → f is a c b d e f at 13.
pub const ROADS: &str = "\
# small road network
a\tb\t4
a\tc\t2
c\tb\t1
b\td\t5
c\td\t8
c\te\t10
d\te\t2
e\tf\t3
d\tf\t6
g\th
";

/// 10 x 6 maze with a Moving AI header.
pub const MAZE: &str = "\
type octile
height 6
width 10
map
..........
.@@@@@@@@.
.@......@.
.@.@@@@.@.
...@......
@@@@@@@@@.
";

pub const WORDS: &str = "\
# four-letter words
cold
cord
card
ward
warm
word
worm
wore
core
care
dare
date
gate
from
";

/// Start/goal pairs per family, all reachable.
pub const ROAD_QUERIES: &[(&str, &str)] = &[("a", "f"), ("a", "e"), ("c", "f"), ("b", "b")];
pub const MAZE_QUERIES: &[(&str, &str)] = &[("0:0", "2:2"), ("9:5", "4:2"), ("0:4", "9:0")];
pub const PUZZLE_QUERIES: &[(&str, &str)] = &[
    ("/_BC/ADE/GHF/", "/ABC/DEF/GH_/"),
    ("/ABC/DEF/_GH/", "/ABC/DEF/GH_/"),
    ("/BC_/AEF/DGH/", "/ABC/DEF/GH_/"),
];
pub const WORD_QUERIES: &[(&str, &str)] = &[("cold", "warm"), ("gate", "cord"), ("word", "care")];

/// # Panics
///
/// Never: the fixture text is well formed.
#[must_use]
pub fn roads() -> AdjacencyGraph {
    AdjacencyGraph::from_text(ROADS).expect("ROADS fixture parses")
}

/// # Panics
///
/// Never: the fixture text is well formed.
#[must_use]
pub fn maze() -> GridGraph {
    GridGraph::from_text(MAZE).expect("MAZE fixture parses")
}

/// # Panics
///
/// Never: 3 is a valid puzzle size.
#[must_use]
pub fn puzzle() -> NPuzzle {
    NPuzzle::new(3).expect("3 is a valid puzzle size")
}

#[must_use]
pub fn words() -> WordLadder {
    WordLadder::from_text(WORDS)
}

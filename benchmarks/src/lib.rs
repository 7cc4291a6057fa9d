//! Shared helpers for pathfinder benchmark suites.

use pathfinder_harness::point::Point;
use pathfinder_harness::worlds::grid::GridGraph;
use pathfinder_harness::worlds::npuzzle::NPuzzle;

/// A named start/goal workload over one graph.
pub struct Regime<G> {
    pub graph: G,
    pub start: String,
    pub goal: String,
}

/// `side` x `side` grid with no obstacles.
///
/// # Panics
///
/// Panics if `side` is zero. Benchmark setup failures are fatal.
#[must_use]
pub fn open_grid(side: usize) -> GridGraph {
    let row = ".".repeat(side);
    let text: String = (0..side).map(|_| format!("{row}\n")).collect();
    GridGraph::from_text(&text).expect("open grid is well formed")
}

/// `side` x `side` maze of horizontal walls with alternating gaps, so the
/// only route snakes back and forth across the whole map. With an odd
/// `side` the bottom-right corner is open.
///
/// # Panics
///
/// Panics if `side` is zero. Benchmark setup failures are fatal.
#[must_use]
pub fn serpentine_maze(side: usize) -> GridGraph {
    let mut text = String::new();
    for y in 0..side {
        let line: String = if y % 2 == 0 {
            ".".repeat(side)
        } else if y % 4 == 1 {
            format!("{}.", "@".repeat(side.saturating_sub(1)))
        } else {
            format!(".{}", "@".repeat(side.saturating_sub(1)))
        };
        text.push_str(&line);
        text.push('\n');
    }
    GridGraph::from_text(&text).expect("serpentine maze is well formed")
}

/// Corner-to-corner query on a square grid.
#[must_use]
pub fn corner_to_corner(graph: GridGraph) -> Regime<GridGraph> {
    let far = i64::try_from(graph.width()).unwrap_or(1) - 1;
    Regime {
        graph,
        start: Point::new(0, 0).to_string(),
        goal: Point::new(far, far).to_string(),
    }
}

/// 8-puzzle scramble ten blank moves away from the goal.
///
/// # Panics
///
/// Never: 3 is a valid puzzle size.
#[must_use]
pub fn puzzle_regime() -> Regime<NPuzzle> {
    let graph = NPuzzle::new(3).expect("3 is a valid puzzle size");
    let goal = graph.goal_state().to_string();
    Regime {
        graph,
        start: "/BDC/H_E/AGF/".to_owned(),
        goal,
    }
}

//! A* search.

use crate::contract::Graph;
use crate::node::AstarEntry;
use crate::result::SearchResult;
use crate::search::{best_first, SearchAlgorithm};

/// Uniform-cost search ordered by `cost_to_here + guess_cost(state, goal)`.
///
/// Returns optimal paths as long as the graph's `guess_cost` is admissible.
/// With an inconsistent (but admissible) estimate a state may be expanded
/// again at a lower cost; the lazy-deletion check in the shared loop handles
/// that. With a zero estimate this is exactly [`crate::ucs::UniformCostSearch`].
#[derive(Debug)]
pub struct AstarSearch<'g, G: Graph + ?Sized> {
    graph: &'g G,
}

impl<'g, G: Graph + ?Sized> AstarSearch<'g, G> {
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }
}

impl<'g, G: Graph + ?Sized> SearchAlgorithm<'g, G> for AstarSearch<'g, G> {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn graph(&self) -> &'g G {
        self.graph
    }

    fn search(&self, start: &G::Vertex, goal: &G::Vertex) -> SearchResult<'g, G> {
        let graph = self.graph;
        best_first(self.name(), graph, start, goal, |base| AstarEntry {
            heuristic: graph.guess_cost(&base.state, goal),
            base,
        })
    }
}

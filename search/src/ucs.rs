//! Uniform-cost search.

use crate::contract::Graph;
use crate::result::SearchResult;
use crate::search::{best_first, SearchAlgorithm};

/// Dijkstra-style best-first search ordered by accumulated cost.
///
/// Finds a cheapest path whenever edge weights are non-negative.
#[derive(Debug)]
pub struct UniformCostSearch<'g, G: Graph + ?Sized> {
    graph: &'g G,
}

impl<'g, G: Graph + ?Sized> UniformCostSearch<'g, G> {
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }
}

impl<'g, G: Graph + ?Sized> SearchAlgorithm<'g, G> for UniformCostSearch<'g, G> {
    fn name(&self) -> &'static str {
        "ucs"
    }

    fn graph(&self) -> &'g G {
        self.graph
    }

    fn search(&self, start: &G::Vertex, goal: &G::Vertex) -> SearchResult<'g, G> {
        best_first(self.name(), self.graph, start, goal, |entry| entry)
    }
}

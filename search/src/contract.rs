//! Graph capability contract.

use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use rand::seq::IteratorRandom;
use rand::RngCore;

use crate::edge::{format_weight, Edge};
use crate::error::SearchError;

/// Trait for vertex spaces that support search.
///
/// The search algorithms depend only on this trait. Implementations may be
/// explicit edge lists, implicit state spaces computed on demand, or anything
/// in between.
///
/// # Contract
///
/// - `outgoing_edges` must be finite for every vertex and must not mutate
///   shared state: search may run concurrently against one graph.
/// - Edge weights are non-negative. When `is_weighted` is `false` every edge
///   has weight 1.
/// - `guess_cost(v, w)` must be non-negative and **admissible** (never
///   larger than the true cheapest cost from `v` to `w`) for A* to return
///   optimal paths. This is not checked at runtime. A consistent estimate
///   (triangle inequality along edges) additionally avoids re-expansions.
pub trait Graph {
    /// The vertex type. Opaque to the search core apart from equality,
    /// hashing and display.
    type Vertex: Clone + Eq + Hash + Debug + Display;

    /// The full vertex set.
    ///
    /// # Errors
    ///
    /// The default returns [`SearchError::UnsupportedOperation`]; graphs
    /// that can enumerate their vertices override it.
    fn vertices(&self) -> Result<HashSet<Self::Vertex>, SearchError> {
        Err(SearchError::unsupported(
            "vertices",
            "this graph cannot enumerate its vertex set",
        ))
    }

    /// The edges leaving `v`, computed on demand.
    fn outgoing_edges(&self, v: &Self::Vertex) -> Vec<Edge<Self::Vertex>>;

    /// Whether edge weights are meaningful.
    fn is_weighted(&self) -> bool;

    /// A lower-bound estimate of the cost from `v` to `w`. Defaults to 0,
    /// which is always admissible but gives A* nothing to prune with.
    fn guess_cost(&self, _v: &Self::Vertex, _w: &Self::Vertex) -> f64 {
        0.0
    }

    /// Parse a vertex from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Parse`] when `s` does not denote a vertex of
    /// this graph.
    fn parse_vertex(&self, s: &str) -> Result<Self::Vertex, SearchError>;

    /// ASCII drawing of (part of) the graph with `start`, `goal` and the
    /// solution path marked. `None` when the graph has no drawing.
    fn draw_graph(
        &self,
        _max_width: usize,
        _max_height: usize,
        _start: Option<&Self::Vertex>,
        _goal: Option<&Self::Vertex>,
        _path: Option<&[Edge<Self::Vertex>]>,
    ) -> Option<String> {
        None
    }

    /// Number of vertices.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchError::UnsupportedOperation`] from [`Graph::vertices`].
    fn num_vertices(&self) -> Result<usize, SearchError> {
        Ok(self.vertices()?.len())
    }

    /// Number of edges. Walks every vertex, so it is linear in the graph size.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchError::UnsupportedOperation`] from [`Graph::vertices`].
    fn num_edges(&self) -> Result<usize, SearchError> {
        Ok(self
            .vertices()?
            .iter()
            .map(|v| self.outgoing_edges(v).len())
            .sum())
    }

    /// A uniformly random vertex, or `None` for an empty graph.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchError::UnsupportedOperation`] from [`Graph::vertices`];
    /// graphs with implicit vertex sets override this.
    fn random_vertex(&self, rng: &mut dyn RngCore) -> Result<Option<Self::Vertex>, SearchError> {
        Ok(self.vertices()?.into_iter().choose(rng))
    }

    /// A few random vertices with their outgoing edges, one per line.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Graph::random_vertex`].
    fn example_outgoing_edges(
        &self,
        limit: usize,
        rng: &mut dyn RngCore,
    ) -> Result<String, SearchError> {
        let mut lines = Vec::with_capacity(limit);
        for _ in 0..limit {
            let Some(start) = self.random_vertex(rng)? else {
                break;
            };
            let outgoing = self.outgoing_edges(&start);
            if outgoing.is_empty() {
                lines.push(format!(" * {start} with no outgoing edges"));
                continue;
            }
            let ends: Vec<String> = outgoing
                .iter()
                .map(|e| {
                    if self.is_weighted() {
                        format!("{} [{}]", e.end(), format_weight(e.weight()))
                    } else {
                        e.end().to_string()
                    }
                })
                .collect();
            lines.push(format!(" * {start} --> {}", ends.join(", ")));
        }
        Ok(lines.join("\n"))
    }
}

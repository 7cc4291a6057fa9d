//! `AdjacencyGraph`: explicit finite graph with string vertices.
//!
//! Stored as an adjacency list. Any road map, link graph or hand-written
//! example fits. The text format is one edge per line:
//!
//! ```text
//! # comment
//! from<TAB>to
//! from<TAB>to<TAB>weight
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::debug;
use pathfinder_search::contract::Graph;
use pathfinder_search::edge::Edge;
use pathfinder_search::error::SearchError;
use rand::RngCore;

use crate::contract::{content_lines, read_text, GraphSummary, LoadError};

#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    adjacency: HashMap<String, Vec<Edge<String>>>,
    weighted: bool,
}

impl AdjacencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a graph from an edge-list file.
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if the file is unreadable, [`LoadError::Malformed`]
    /// for a bad line.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let graph = Self::from_text(&read_text(path)?)?;
        debug!(
            "loaded adjacency graph from {}: {} vertices",
            path.display(),
            graph.adjacency.len()
        );
        Ok(graph)
    }

    /// Parse an edge list.
    ///
    /// # Errors
    ///
    /// [`LoadError::Malformed`] when a line has fewer than two fields or a
    /// weight that is not a non-negative number.
    pub fn from_text(text: &str) -> Result<Self, LoadError> {
        let mut graph = Self::new();
        for (line_no, line) in content_lines(text) {
            let mut fields = line.split('\t');
            let (Some(start), Some(end)) = (fields.next(), fields.next()) else {
                return Err(LoadError::malformed(
                    line_no,
                    format!("expected `from<TAB>to[<TAB>weight]`, got {line:?}"),
                ));
            };
            let edge = match fields.next() {
                None => Edge::new(start.to_owned(), end.to_owned()),
                Some(raw) => {
                    let weight: f64 = raw.trim().parse().map_err(|_| {
                        LoadError::malformed(line_no, format!("weight {raw:?} is not a number"))
                    })?;
                    if !(weight >= 0.0 && weight.is_finite()) {
                        return Err(LoadError::malformed(
                            line_no,
                            format!("weight {raw:?} must be finite and non-negative"),
                        ));
                    }
                    Edge::weighted(start.to_owned(), end.to_owned(), weight)
                }
            };
            graph.add_edge(edge);
        }
        Ok(graph)
    }

    /// Add a vertex with no edges. No-op if it already exists.
    pub fn add_vertex(&mut self, v: impl Into<String>) {
        self.adjacency.entry(v.into()).or_default();
    }

    /// Add a directed edge together with both endpoints. Duplicate edges are
    /// not detected.
    #[allow(clippy::float_cmp)]
    pub fn add_edge(&mut self, edge: Edge<String>) {
        self.add_vertex(edge.end().clone());
        if edge.weight() != 1.0 {
            self.weighted = true;
        }
        self.adjacency
            .entry(edge.start().clone())
            .or_default()
            .push(edge);
    }
}

impl Graph for AdjacencyGraph {
    type Vertex = String;

    fn vertices(&self) -> Result<HashSet<String>, SearchError> {
        Ok(self.adjacency.keys().cloned().collect())
    }

    fn outgoing_edges(&self, v: &String) -> Vec<Edge<String>> {
        self.adjacency.get(v).cloned().unwrap_or_default()
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn parse_vertex(&self, s: &str) -> Result<String, SearchError> {
        if self.adjacency.contains_key(s) {
            Ok(s.to_owned())
        } else {
            Err(SearchError::parse(s, "unknown vertex"))
        }
    }

    fn num_vertices(&self) -> Result<usize, SearchError> {
        Ok(self.adjacency.len())
    }

    fn num_edges(&self) -> Result<usize, SearchError> {
        Ok(self.adjacency.values().map(Vec::len).sum())
    }
}

impl GraphSummary for AdjacencyGraph {
    fn summary(&self, rng: &mut dyn RngCore) -> String {
        let edges: usize = self.adjacency.values().map(Vec::len).sum();
        let mut out = format!(
            "{} adjacency graph with {} vertices and {edges} edges.\n",
            if self.weighted { "Weighted" } else { "Unweighted" },
            self.adjacency.len(),
        );
        out.push_str("\nRandom vertices with outgoing edges:\n");
        if let Ok(examples) = self.example_outgoing_edges(8, rng) {
            out.push_str(&examples);
        }
        out
    }
}

//! Search outcomes: validation and human-readable rendering.

use std::fmt;

use crate::contract::Graph;
use crate::edge::Edge;
use crate::error::SearchError;

/// Cost reported by every unsuccessful search.
pub const NO_PATH_COST: f64 = -1.0;

/// Paths up to this many edges are printed in full.
const FULL_PATH_LIMIT: usize = 10;

/// Edges shown at each end of an abbreviated path.
const PATH_ELLIPSIS_SIDE: usize = 5;

/// Outcome of one `search(start, goal)` call.
///
/// `path` is `Some` exactly when `success` is true. On failure `cost` is
/// [`NO_PATH_COST`]. `iterations` counts every frontier pop (or walk step),
/// including the start state, so it is at least 1.
pub struct SearchResult<'g, G: Graph + ?Sized> {
    pub graph: &'g G,
    pub success: bool,
    pub start: G::Vertex,
    pub goal: G::Vertex,
    pub cost: f64,
    pub path: Option<Vec<Edge<G::Vertex>>>,
    pub iterations: u64,
}

impl<'g, G: Graph + ?Sized> SearchResult<'g, G> {
    /// A successful search.
    #[must_use]
    pub fn found(
        graph: &'g G,
        start: G::Vertex,
        goal: G::Vertex,
        cost: f64,
        path: Vec<Edge<G::Vertex>>,
        iterations: u64,
    ) -> Self {
        Self {
            graph,
            success: true,
            start,
            goal,
            cost,
            path: Some(path),
            iterations,
        }
    }

    /// A search that gave up or exhausted the frontier.
    #[must_use]
    pub fn not_found(graph: &'g G, start: G::Vertex, goal: G::Vertex, iterations: u64) -> Self {
        Self {
            graph,
            success: false,
            start,
            goal,
            cost: NO_PATH_COST,
            path: None,
            iterations,
        }
    }

    /// Sum of the path's edge weights, accumulated from the start.
    #[must_use]
    pub fn path_cost(&self) -> Option<f64> {
        self.path
            .as_ref()
            .map(|p| p.iter().fold(0.0, |acc, e| acc + e.weight()))
    }

    /// Check the result invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Validation`] naming the first violated
    /// invariant.
    #[allow(clippy::float_cmp)]
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.iterations == 0 {
            return Err(SearchError::validation(
                "iterations must be > 0 (the start state counts)",
            ));
        }
        let Some(path) = &self.path else {
            if self.success {
                return Err(SearchError::validation("successful result has no path"));
            }
            if self.cost != NO_PATH_COST {
                return Err(SearchError::validation(format!(
                    "unsuccessful result must report cost {NO_PATH_COST}, got {}",
                    self.cost
                )));
            }
            return Ok(());
        };
        if !self.success {
            return Err(SearchError::validation("unsuccessful result carries a path"));
        }

        match (path.first(), path.last()) {
            (None, None) => {
                if self.start != self.goal {
                    return Err(SearchError::validation(format!(
                        "empty path but start {} differs from goal {}",
                        self.start, self.goal
                    )));
                }
            }
            (Some(first), Some(last)) => {
                if *first.start() != self.start {
                    return Err(SearchError::validation(format!(
                        "path starts at {} instead of {}",
                        first.start(),
                        self.start
                    )));
                }
                if *last.end() != self.goal {
                    return Err(SearchError::validation(format!(
                        "path ends at {} instead of {}",
                        last.end(),
                        self.goal
                    )));
                }
            }
            _ => unreachable!("first and last agree on emptiness"),
        }

        if let Some(i) = path.windows(2).position(|w| w[0].end() != w[1].start()) {
            return Err(SearchError::validation(format!(
                "edges {i} and {} do not chain: {} != {}",
                i + 1,
                path[i].end(),
                path[i + 1].start()
            )));
        }

        let actual = self.path_cost().unwrap_or_default();
        if self.cost != actual {
            return Err(SearchError::validation(format!(
                "reported path cost ({}) differs from the calculated cost ({actual})",
                self.cost
            )));
        }
        Ok(())
    }

    fn format_path_part(&self, path: &[Edge<G::Vertex>], suffix: bool, with_weight: bool) -> String {
        let with_weight = with_weight && self.graph.is_weighted();
        path.iter()
            .map(|e| e.format(!suffix, suffix, Some(with_weight)))
            .collect()
    }

    /// Human-readable summary: iteration count, optional drawing, and the
    /// path (abbreviated when it is longer than ten edges).
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut lines = Vec::new();
        if self.iterations == 0 {
            lines.push("ERROR: You have to iterate over at least the starting state!".to_string());
        }
        lines.push(format!("Loop iterations: {}", self.iterations));
        if options.draw_graph {
            if let Some(drawing) = self.graph.draw_graph(
                options.max_width,
                options.max_height,
                Some(&self.start),
                Some(&self.goal),
                self.path.as_deref(),
            ) {
                lines.push(format!("{drawing}\n"));
            }
        }

        let Some(path) = self.path.as_deref().filter(|_| self.success) else {
            lines.push(format!("No path found from {} to {}", self.start, self.goal));
            return lines.join("\n");
        };

        lines.push(format!(
            "Cost of path from {} to {}: {:.2}",
            self.start, self.goal, self.cost
        ));
        let n = path.len();
        lines.push(format!("Number of edges: {n}"));
        if n <= FULL_PATH_LIMIT {
            lines.push(format!(
                "{}{}",
                self.start,
                self.format_path_part(path, true, options.with_weight)
            ));
        } else {
            lines.push(format!(
                "{}...{}",
                self.format_path_part(&path[..PATH_ELLIPSIS_SIDE], false, options.with_weight),
                self.format_path_part(&path[n - PATH_ELLIPSIS_SIDE..], true, options.with_weight)
            ));
        }
        let actual = self.path_cost().unwrap_or_default();
        if self.cost != actual {
            lines.push(format!(
                "WARNING: the actual path cost ({actual}) differs from the reported cost ({})!",
                self.cost
            ));
        }
        lines.join("\n")
    }
}

impl<G: Graph + ?Sized> fmt::Debug for SearchResult<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchResult")
            .field("success", &self.success)
            .field("start", &self.start)
            .field("goal", &self.goal)
            .field("cost", &self.cost)
            .field("path", &self.path)
            .field("iterations", &self.iterations)
            .finish_non_exhaustive()
    }
}

/// Options for [`SearchResult::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include the graph's ASCII drawing when it has one.
    pub draw_graph: bool,
    pub max_width: usize,
    pub max_height: usize,
    /// Show edge weights (only for weighted graphs).
    pub with_weight: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            draw_graph: true,
            max_width: 100,
            max_height: 25,
            with_weight: true,
        }
    }
}

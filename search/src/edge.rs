//! Directed weighted edges.

use std::fmt;

/// An immutable directed, weighted edge between two vertices.
///
/// Weights are never negative; uniform-cost and A* optimality depend on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V> {
    start: V,
    end: V,
    weight: f64,
}

impl<V> Edge<V> {
    /// An edge with the default weight of 1.
    #[must_use]
    pub fn new(start: V, end: V) -> Self {
        Self::weighted(start, end, 1.0)
    }

    /// An edge with an explicit weight.
    ///
    /// # Panics
    ///
    /// Panics if `weight` is negative or NaN. Producing such an edge is a bug
    /// in the graph implementation.
    #[must_use]
    pub fn weighted(start: V, end: V, weight: f64) -> Self {
        assert!(
            weight >= 0.0,
            "edge weight must be non-negative, got {weight}"
        );
        Self { start, end, weight }
    }

    #[must_use]
    pub fn start(&self) -> &V {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &V {
        &self.end
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl<V: Clone> Edge<V> {
    /// A new edge with the endpoints swapped and the same weight.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            start: self.end.clone(),
            end: self.start.clone(),
            weight: self.weight,
        }
    }
}

impl<V: fmt::Display> Edge<V> {
    /// Render the edge, optionally omitting either endpoint.
    ///
    /// `with_weight = None` shows the weight only when it differs from 1.
    #[must_use]
    pub fn format(&self, include_start: bool, include_end: bool, with_weight: Option<bool>) -> String {
        let with_weight = with_weight.unwrap_or(self.weight != 1.0);
        let start = if include_start {
            self.start.to_string()
        } else {
            String::new()
        };
        let end = if include_end {
            self.end.to_string()
        } else {
            String::new()
        };
        if with_weight {
            format!("{start} --[{}]--> {end}", format_weight(self.weight))
        } else {
            format!("{start} --> {end}")
        }
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(true, true, None))
    }
}

/// Format a weight with 0, 1 or 2 decimals, whichever is the shortest exact
/// rendering up to two decimals.
#[must_use]
pub fn format_weight(w: f64) -> String {
    if w == w.round() {
        format!("{w:.0}")
    } else if w == (w * 10.0).round() / 10.0 {
        format!("{w:.1}")
    } else {
        format!("{w:.2}")
    }
}

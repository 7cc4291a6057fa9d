//! `GridGraph`: 2D bitmap map, one vertex per passable cell.
//!
//! Uses the ASCII map format of the Moving AI Lab benchmarks and of
//! generated mazes. Characters:
//!
//! - `.` `G` and space: passable terrain
//! - `@` `O`: out of bounds
//! - `T`: trees, `S`: swamp, `W`: water (all blocked here)
//! - `|` `-` `+`: maze walls
//!
//! Movement goes to all eight neighbours; straight steps cost 1, diagonal
//! steps cost √2.

use std::collections::HashSet;
use std::path::Path;

use log::debug;
use pathfinder_search::contract::Graph;
use pathfinder_search::edge::Edge;
use pathfinder_search::error::SearchError;
use rand::RngCore;

use crate::contract::{read_text, GraphSummary, LoadError};
use crate::point::Point;

pub const ALLOWED_CHARS: &str = ".G@OTSW +|-";
pub const PASSABLE_CHARS: &str = ".G ";

const DIRECTIONS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];

#[derive(Debug, Clone)]
pub struct GridGraph {
    rows: Vec<Vec<char>>,
}

impl GridGraph {
    /// Load a map file.
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if the file is unreadable, otherwise as
    /// [`GridGraph::from_text`].
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let graph = Self::from_text(&read_text(path)?)?;
        debug!(
            "loaded grid from {}: {} x {}",
            path.display(),
            graph.width(),
            graph.height()
        );
        Ok(graph)
    }

    /// Build a grid from map text. Lines containing anything other than map
    /// characters (headers such as `type octile`) are ignored.
    ///
    /// # Errors
    ///
    /// [`LoadError::Malformed`] if no map rows are found or the rows differ
    /// in width.
    pub fn from_text(text: &str) -> Result<Self, LoadError> {
        let mut rows: Vec<Vec<char>> = Vec::new();
        for (i, line) in text.lines().enumerate() {
            if line.is_empty() || !line.chars().all(|c| ALLOWED_CHARS.contains(c)) {
                continue;
            }
            let row: Vec<char> = line.chars().collect();
            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(LoadError::malformed(
                        i + 1,
                        format!(
                            "row width {} does not match grid width {}",
                            row.len(),
                            first.len()
                        ),
                    ));
                }
            }
            rows.push(row);
        }
        if rows.is_empty() {
            return Err(LoadError::malformed(1, "no grid rows found"));
        }
        Ok(Self { rows })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, p: Point) -> Option<char> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    /// Whether `p` lies inside the grid on passable terrain.
    #[must_use]
    pub fn passable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| PASSABLE_CHARS.contains(c))
    }

    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            (0..row.len()).filter_map(move |x| {
                Some(Point::new(i64::try_from(x).ok()?, i64::try_from(y).ok()?))
            })
        })
    }
}

impl Graph for GridGraph {
    type Vertex = Point;

    fn vertices(&self) -> Result<HashSet<Point>, SearchError> {
        Ok(self.points().filter(|p| self.passable(*p)).collect())
    }

    fn outgoing_edges(&self, v: &Point) -> Vec<Edge<Point>> {
        DIRECTIONS
            .iter()
            .filter_map(|dir| Some((v.checked_add(*dir)?, dir.euclidean_norm())))
            .filter(|(end, _)| self.passable(*end))
            .map(|(end, weight)| Edge::weighted(*v, end, weight))
            .collect()
    }

    fn is_weighted(&self) -> bool {
        true
    }

    /// Straight-line distance: never more than the 8-connected path cost.
    fn guess_cost(&self, v: &Point, w: &Point) -> f64 {
        w.subtract(*v).euclidean_norm()
    }

    /// Points must lie inside the grid; walls are accepted.
    fn parse_vertex(&self, s: &str) -> Result<Point, SearchError> {
        let p: Point = s.trim().parse()?;
        if self.cell(p).is_none() {
            return Err(SearchError::parse(
                s,
                format!("outside the {} x {} grid", self.width(), self.height()),
            ));
        }
        Ok(p)
    }

    fn draw_graph(
        &self,
        max_width: usize,
        max_height: usize,
        start: Option<&Point>,
        goal: Option<&Point>,
        path: Option<&[Edge<Point>]>,
    ) -> Option<String> {
        let on_path: HashSet<Point> = path
            .unwrap_or_default()
            .iter()
            .flat_map(|e| [*e.start(), *e.end()])
            .collect();

        let mut lines = Vec::with_capacity(self.height().min(max_height) + 1);
        for (y, row) in self.rows.iter().enumerate() {
            if y >= max_height {
                lines.push("(truncated)".to_owned());
                break;
            }
            let mut line = String::with_capacity(row.len().min(max_width));
            for (x, c) in row.iter().enumerate() {
                if y == 0 && x >= max_width.saturating_sub(10) {
                    line.push_str(" (truncated)");
                    break;
                }
                if x >= max_width {
                    break;
                }
                let p = Point::new(i64::try_from(x).ok()?, i64::try_from(y).ok()?);
                line.push(if Some(&p) == start {
                    'S'
                } else if Some(&p) == goal {
                    'G'
                } else if on_path.contains(&p) {
                    '*'
                } else {
                    *c
                });
            }
            lines.push(line);
        }
        Some(lines.join("\n"))
    }
}

impl GraphSummary for GridGraph {
    fn summary(&self, rng: &mut dyn RngCore) -> String {
        let mut out = format!(
            "Bitmap graph of dimensions {} x {} pixels.\n",
            self.width(),
            self.height()
        );
        if let Some(drawing) = self.draw_graph(100, 25, None, None, None) {
            out.push_str(&drawing);
        }
        out.push_str("\n\nRandom example points with outgoing edges:\n");
        if let Ok(examples) = self.example_outgoing_edges(8, rng) {
            out.push_str(&examples);
        }
        out
    }
}

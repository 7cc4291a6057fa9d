//! `NPuzzle`: the sliding-tile puzzle as an implicit graph.
//!
//! A vertex is an N×N arrangement of tiles. Tiles are named by the prefix of
//! [`ALL_TILE_NAMES`] of length N², with `_` for the empty cell, and a state
//! is written row by row between `/` separators: `/ABC/DEF/GH_/`.
//!
//! The state space grows as (N²)!/2, so vertices are never enumerated.

use std::fmt;

use pathfinder_search::contract::Graph;
use pathfinder_search::edge::Edge;
use pathfinder_search::error::SearchError;
use rand::seq::SliceRandom;
use rand::RngCore;

use crate::contract::{GraphSummary, LoadError};
use crate::point::Point;

pub const SEPARATOR: char = '/';

/// `_`, then `A..Z`, `0..9`, `a..z`. A puzzle of size N uses the first N².
pub const ALL_TILE_NAMES: &str =
    "_ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789abcdefghijklmnopqrstuvwxyz";

pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 6;

/// Offsets from the empty cell to the tile that slides into it.
const MOVES: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

fn tile_name(i: usize) -> char {
    ALL_TILE_NAMES.as_bytes().get(i).map_or('?', |b| char::from(*b))
}

/// One arrangement of the puzzle.
///
/// `positions[i]` is where tile `i` sits; tile 0 is the empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NPuzzleState {
    n: usize,
    positions: Vec<Point>,
}

impl NPuzzleState {
    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// The state with tiles `i` and `j` exchanged.
    #[must_use]
    fn swap(&self, i: usize, j: usize) -> Self {
        let mut positions = self.positions.clone();
        positions.swap(i, j);
        Self {
            n: self.n,
            positions,
        }
    }

    /// The board as an N×N matrix of tile indices.
    #[must_use]
    pub fn tiles(&self) -> Vec<Vec<usize>> {
        let mut tiles = vec![vec![0; self.n]; self.n];
        for (i, p) in self.positions.iter().enumerate() {
            if let (Ok(x), Ok(y)) = (usize::try_from(p.x), usize::try_from(p.y)) {
                tiles[y][x] = i;
            }
        }
        tiles
    }
}

impl fmt::Display for NPuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SEPARATOR}")?;
        for row in self.tiles() {
            for i in row {
                write!(f, "{}", tile_name(i))?;
            }
            write!(f, "{SEPARATOR}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for NPuzzleState {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().trim_matches(SEPARATOR).split(SEPARATOR).collect();
        let n = rows.len();
        if n > MAX_SIZE {
            return Err(SearchError::parse(
                s,
                format!("{n} rows, at most {MAX_SIZE} are supported"),
            ));
        }
        let mut positions: Vec<Option<Point>> = vec![None; n * n];
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != n {
                return Err(SearchError::parse(s, format!("row {row:?} does not have {n} columns")));
            }
            for (x, name) in row.chars().enumerate() {
                let i = ALL_TILE_NAMES
                    .find(name)
                    .filter(|i| *i < n * n)
                    .ok_or_else(|| SearchError::parse(s, format!("unknown tile {name:?}")))?;
                if positions[i].is_some() {
                    return Err(SearchError::parse(s, format!("duplicate tile {name:?}")));
                }
                let x = i64::try_from(x).map_err(|e| SearchError::parse(s, e.to_string()))?;
                let y = i64::try_from(y).map_err(|e| SearchError::parse(s, e.to_string()))?;
                positions[i] = Some(Point::new(x, y));
            }
        }
        // n² distinct tiles below n² fill every slot.
        let positions = positions
            .into_iter()
            .collect::<Option<Vec<Point>>>()
            .ok_or_else(|| SearchError::parse(s, "missing tiles"))?;
        Ok(Self { n, positions })
    }
}

/// The N-puzzle of a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NPuzzle {
    n: usize,
}

impl NPuzzle {
    /// # Errors
    ///
    /// [`LoadError::InvalidArgument`] unless `2 <= n <= 6`.
    pub fn new(n: usize) -> Result<Self, LoadError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&n) {
            return Err(LoadError::InvalidArgument {
                detail: format!("puzzle size must be between {MIN_SIZE} and {MAX_SIZE}, got {n}"),
            });
        }
        Ok(Self { n })
    }

    /// Build from a textual size, as given on the command line.
    ///
    /// # Errors
    ///
    /// [`LoadError::InvalidArgument`] if `arg` is not a size in range.
    pub fn from_arg(arg: &str) -> Result<Self, LoadError> {
        let n = arg.trim().parse().map_err(|_| LoadError::InvalidArgument {
            detail: format!("puzzle size {arg:?} is not a number"),
        })?;
        Self::new(n)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }

    fn contains(&self, p: Point) -> bool {
        let n = i64::try_from(self.n).unwrap_or(i64::MAX);
        (0..n).contains(&p.x) && (0..n).contains(&p.y)
    }

    /// Tiles in reading order with the empty cell bottom-right.
    #[must_use]
    pub fn goal_state(&self) -> NPuzzleState {
        let n = i64::try_from(self.n).unwrap_or(i64::MAX);
        let cells = n * n;
        let positions = std::iter::once(Point::new(n - 1, n - 1))
            .chain((0..cells - 1).map(|i| Point::new(i % n, i / n)))
            .collect();
        NPuzzleState {
            n: self.n,
            positions,
        }
    }
}

impl Graph for NPuzzle {
    type Vertex = NPuzzleState;

    fn vertices(&self) -> Result<std::collections::HashSet<NPuzzleState>, SearchError> {
        Err(SearchError::UnsupportedOperation {
            operation: "vertices".to_owned(),
            detail: format!("the {0}x{0} puzzle state space is too large to enumerate", self.n),
        })
    }

    fn outgoing_edges(&self, v: &NPuzzleState) -> Vec<Edge<NPuzzleState>> {
        let Some(empty) = v.positions.first().copied() else {
            return Vec::new();
        };
        MOVES
            .iter()
            .map(|m| empty.subtract(*m))
            .filter(|p| self.contains(*p))
            .filter_map(|p| v.positions.iter().position(|q| *q == p))
            .map(|i| Edge::new(v.clone(), v.swap(0, i)))
            .collect()
    }

    fn is_weighted(&self) -> bool {
        false
    }

    /// Sum of Manhattan displacements of every non-empty tile. Each move
    /// shifts one tile by one cell, so this never overestimates.
    #[allow(clippy::cast_precision_loss)]
    fn guess_cost(&self, v: &NPuzzleState, w: &NPuzzleState) -> f64 {
        let total: i64 = v
            .positions
            .iter()
            .zip(&w.positions)
            .skip(1)
            .map(|(p, q)| p.subtract(*q).manhattan_norm())
            .sum();
        total as f64
    }

    fn parse_vertex(&self, s: &str) -> Result<NPuzzleState, SearchError> {
        let state: NPuzzleState = s.parse()?;
        if state.n != self.n {
            return Err(SearchError::parse(
                s,
                format!("state is {0}x{0}, puzzle is {1}x{1}", state.n, self.n),
            ));
        }
        Ok(state)
    }

    /// A shuffled goal state. Half of all shuffles cannot reach the goal.
    fn random_vertex(&self, rng: &mut dyn RngCore) -> Result<Option<NPuzzleState>, SearchError> {
        let mut state = self.goal_state();
        state.positions.shuffle(rng);
        Ok(Some(state))
    }
}

impl GraphSummary for NPuzzle {
    fn summary(&self, rng: &mut dyn RngCore) -> String {
        let n = self.n;
        let mut out = format!(
            "NPuzzle graph of size {n} x {n}.\n\n\
             States are {n} x {n} matrices of unique characters in '{}'...'{}',\n\
             and '{}' (for the empty tile); rows are interspersed with '{SEPARATOR}'.\n\
             The traditional goal state is: {}.\n\
             \nRandom example states with outgoing edges:\n",
            tile_name(1),
            tile_name(n * n - 1),
            tile_name(0),
            self.goal_state(),
        );
        if let Ok(examples) = self.example_outgoing_edges(8, rng) {
            out.push_str(&examples);
        }
        out
    }
}

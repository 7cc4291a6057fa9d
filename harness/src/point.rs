//! Two-dimensional integer points, used by grids and puzzles.

use std::fmt;
use std::str::FromStr;

use pathfinder_search::error::SearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// The point `(0, 0)`.
pub const ORIGIN: Point = Point::new(0, 0);

impl Point {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// `None` if either coordinate overflows.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(other.x)?,
            self.y.checked_add(other.y)?,
        ))
    }

    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    #[must_use]
    pub fn manhattan_norm(self) -> i64 {
        self.x.abs() + self.y.abs()
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn euclidean_norm(self) -> f64 {
        let (x, y) = (self.x as f64, self.y as f64);
        (x * x + y * y).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = SearchError;

    /// Parse `"x:y"`, e.g. `"39:18"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let illegal = || SearchError::parse(s, "not a legal representation of a point (expected x:y)");
        let (x, y) = s.split_once(':').ok_or_else(illegal)?;
        let x = x.trim().parse().map_err(|_| illegal())?;
        let y = y.trim().parse().map_err(|_| illegal())?;
        Ok(Self::new(x, y))
    }
}

use crate::error::SolveError;

/// A point in the decision plane
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a point, rejecting NaN and infinite coordinates
    pub fn try_new(x: f64, y: f64) -> Result<Self, SolveError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(SolveError::InvalidInput(format!(
                "point ({}, {}) has a non-finite coordinate",
                x, y
            )));
        }
        Ok(Self { x, y })
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// True when the two points are closer than `tolerance`
    pub fn coincides(&self, other: &Point, tolerance: f64) -> bool {
        self.distance(other) < tolerance
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A line in general form `a·x + b·y = c`
///
/// Axis bounds and oblique constraint boundaries share this representation so
/// intersections are computed the same way for every pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// The vertical line `x = value`
    pub const fn vertical(value: f64) -> Self {
        Self::new(1.0, 0.0, value)
    }

    /// The horizontal line `y = value`
    pub const fn horizontal(value: f64) -> Self {
        Self::new(0.0, 1.0, value)
    }

    /// Intersection of two lines by Cramer's rule.
    ///
    /// Returns `None` when `|det| < parallel_tolerance`; nearly parallel pairs
    /// are dropped along with truly parallel ones.
    pub fn intersect(&self, other: &Line, parallel_tolerance: f64) -> Option<Point> {
        let det = self.a * other.b - other.a * self.b;
        if det.abs() < parallel_tolerance {
            return None;
        }
        let x = (self.c * other.b - other.c * self.b) / det;
        let y = (self.a * other.c - other.a * self.c) / det;
        Some(Point::new(x, y))
    }
}

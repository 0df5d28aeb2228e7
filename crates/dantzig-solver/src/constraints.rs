use crate::geometry::{Line, Point};
use crate::problem::{Bounds, Constraint};

/// Lattice a candidate point is snapped to before a feasibility test
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantization {
    /// Test the point as given
    #[default]
    None,
    /// Round each coordinate to the nearest integer
    Integer,
    /// Round each coordinate and clamp it to {0, 1}
    Binary,
}

impl Quantization {
    pub fn apply(self, p: Point) -> Point {
        match self {
            Quantization::None => p,
            Quantization::Integer => Point::new(p.x.round(), p.y.round()),
            Quantization::Binary => Point::new(
                p.x.round().clamp(0.0, 1.0),
                p.y.round().clamp(0.0, 1.0),
            ),
        }
    }
}

/// The half-planes bounding the feasible region: the bounds rectangle plus
/// every oblique constraint.
///
/// The region itself is never built as a polygon, only queried point by point.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintSet<'a> {
    bounds: Bounds,
    constraints: &'a [Constraint],
    tolerance: f64,
}

impl<'a> ConstraintSet<'a> {
    pub fn new(bounds: Bounds, constraints: &'a [Constraint], tolerance: f64) -> Self {
        Self {
            bounds,
            constraints,
            tolerance,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn constraints(&self) -> &'a [Constraint] {
        self.constraints
    }

    /// True iff `p` lies in the rectangle and satisfies every oblique
    /// constraint up to the tolerance. The rectangle test is exact.
    pub fn feasible(&self, p: &Point) -> bool {
        self.bounds.contains(p)
            && self
                .constraints
                .iter()
                .all(|c| c.excess(p) <= self.tolerance)
    }

    /// Snap `p` with `quantization`, then test feasibility
    pub fn feasible_quantized(&self, p: &Point, quantization: Quantization) -> bool {
        self.feasible(&quantization.apply(*p))
    }

    /// The four bounds lines followed by one boundary line per constraint
    pub fn lines(&self) -> Vec<Line> {
        let mut lines = Vec::with_capacity(4 + self.constraints.len());
        lines.extend(self.bounds.lines());
        lines.extend(self.constraints.iter().map(Constraint::boundary));
        lines
    }
}

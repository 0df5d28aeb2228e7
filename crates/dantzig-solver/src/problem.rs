use crate::error::SolveError;
use crate::geometry::{Line, Point};

/// The rectangle `0 <= x <= x_max, 0 <= y <= y_max`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_max: f64,
    pub y_max: f64,
}

impl Bounds {
    pub const fn new(x_max: f64, y_max: f64) -> Self {
        Self { x_max, y_max }
    }

    /// Corners in the order (0,0), (x_max,0), (0,y_max), (x_max,y_max)
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(self.x_max, 0.0),
            Point::new(0.0, self.y_max),
            Point::new(self.x_max, self.y_max),
        ]
    }

    /// Boundary lines x=0, y=0, x=x_max, y=y_max
    pub fn lines(&self) -> [Line; 4] {
        [
            Line::vertical(0.0),
            Line::horizontal(0.0),
            Line::vertical(self.x_max),
            Line::horizontal(self.y_max),
        ]
    }

    pub fn contains(&self, p: &Point) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.x_max && p.y <= self.y_max
    }

    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.x_max), p.y.clamp(0.0, self.y_max))
    }
}

/// Linear objective `c1·x + c2·y`, always maximized
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Objective {
    pub c1: f64,
    pub c2: f64,
}

impl Objective {
    pub const fn new(c1: f64, c2: f64) -> Self {
        Self { c1, c2 }
    }

    pub fn value(&self, p: &Point) -> f64 {
        self.c1 * p.x + self.c2 * p.y
    }
}

/// Oblique half-plane `a·x + b·y <= d`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub a: f64,
    pub b: f64,
    pub d: f64,
}

impl Constraint {
    pub const fn new(a: f64, b: f64, d: f64) -> Self {
        Self { a, b, d }
    }

    /// How far `p` sits outside the half-plane (negative when strictly inside)
    pub fn excess(&self, p: &Point) -> f64 {
        self.a * p.x + self.b * p.y - self.d
    }

    pub fn boundary(&self) -> Line {
        Line::new(self.a, self.b, self.d)
    }
}

/// A complete puzzle instance: bounds, objective and oblique constraints.
///
/// Instances are never edited in place; a new puzzle means a new value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemInstance {
    pub bounds: Bounds,
    pub objective: Objective,
    pub constraints: Vec<Constraint>,
}

impl ProblemInstance {
    pub fn new(
        bounds: Bounds,
        objective: Objective,
        constraints: Vec<Constraint>,
    ) -> Result<Self, SolveError> {
        let problem = Self {
            bounds,
            objective,
            constraints,
        };
        problem.validate()?;
        Ok(problem)
    }

    /// Check that bounds are positive and every coefficient is finite
    pub fn validate(&self) -> Result<(), SolveError> {
        let Bounds { x_max, y_max } = self.bounds;
        if !(x_max.is_finite() && y_max.is_finite()) || x_max <= 0.0 || y_max <= 0.0 {
            return Err(SolveError::InvalidInput(format!(
                "bounds must be positive and finite, got x_max={} y_max={}",
                x_max, y_max
            )));
        }
        if !(self.objective.c1.is_finite() && self.objective.c2.is_finite()) {
            return Err(SolveError::InvalidInput(
                "objective coefficients must be finite".to_string(),
            ));
        }
        for (i, c) in self.constraints.iter().enumerate() {
            if !(c.a.is_finite() && c.b.is_finite() && c.d.is_finite()) {
                return Err(SolveError::InvalidInput(format!(
                    "constraint {} has a non-finite coefficient",
                    i + 1
                )));
            }
        }
        Ok(())
    }

    pub fn objective_value(&self, p: &Point) -> f64 {
        self.objective.value(p)
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_bad_bounds() {
        let objective = Objective::new(3.0, 2.0);
        assert!(ProblemInstance::new(Bounds::new(10.0, 10.0), objective, vec![]).is_ok());
        assert!(ProblemInstance::new(Bounds::new(0.0, 10.0), objective, vec![]).is_err());
        assert!(ProblemInstance::new(Bounds::new(10.0, -1.0), objective, vec![]).is_err());
        assert!(ProblemInstance::new(Bounds::new(f64::INFINITY, 10.0), objective, vec![]).is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_coefficients() {
        let bounds = Bounds::new(10.0, 10.0);
        let result = ProblemInstance::new(
            bounds,
            Objective::new(1.0, 1.0),
            vec![Constraint::new(1.0, 1.0, 8.0), Constraint::new(f64::NAN, 1.0, 3.0)],
        );
        match result {
            Err(SolveError::InvalidInput(msg)) => assert!(msg.contains("constraint 2"), "{}", msg),
            other => panic!("expected InvalidInput, got {:?}", other),
        }

        let result = ProblemInstance::new(bounds, Objective::new(f64::NAN, 1.0), vec![]);
        assert!(matches!(result, Err(SolveError::InvalidInput(_))));
    }

    #[test]
    fn test_objective_value() {
        let objective = Objective::new(3.0, 2.0);
        assert_eq!(objective.value(&Point::new(8.0, 0.0)), 24.0);
        assert_eq!(objective.value(&Point::new(0.0, 8.0)), 16.0);
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = Bounds::new(10.0, 12.0);
        assert_eq!(bounds.clamp(Point::new(-3.0, 20.0)), Point::new(0.0, 12.0));
        assert_eq!(bounds.clamp(Point::new(4.5, 6.0)), Point::new(4.5, 6.0));
    }
}

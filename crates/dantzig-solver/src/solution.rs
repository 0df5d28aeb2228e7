use crate::error::SolveError;
use crate::geometry::Point;

/// The result of solving a puzzle instance
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Solution status
    pub status: SolutionStatus,
    /// The maximizing vertex and its objective value
    pub optimum: Option<Optimum>,
    /// Every feasible vertex, kept for path construction
    pub vertices: Vec<Point>,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// An optimal vertex was found
    Optimal,
    /// The feasible region has no vertex
    Infeasible,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Optimum {
    pub point: Point,
    pub value: f64,
}

impl Solution {
    pub fn optimal(optimum: Optimum, vertices: Vec<Point>) -> Self {
        Self {
            status: SolutionStatus::Optimal,
            optimum: Some(optimum),
            vertices,
        }
    }

    pub fn infeasible() -> Self {
        Self {
            status: SolutionStatus::Infeasible,
            optimum: None,
            vertices: Vec::new(),
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    /// The optimum, or `InfeasibleProblem` when there is none
    pub fn optimum(&self) -> Result<&Optimum, SolveError> {
        self.optimum.as_ref().ok_or(SolveError::InfeasibleProblem)
    }
}

use tracing::{debug, warn};

use crate::constraints::{ConstraintSet, Quantization};
use crate::geometry::Point;
use crate::optimizer::best_vertex;
use crate::path::{ImprovementPath, PathBuilder};
use crate::problem::ProblemInstance;
use crate::solution::Solution;
use crate::tolerance::Tolerances;
use crate::vertices::VertexEnumerator;

/// Vertex-enumeration solver for two-variable puzzles.
///
/// Every method is a pure function of the problem it is given; a solver holds
/// nothing but its tolerances.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    tolerances: Tolerances,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    pub fn with_feasibility_tolerance(mut self, tol: f64) -> Self {
        self.tolerances = self.tolerances.with_feasibility(tol);
        self
    }

    pub fn with_parallel_tolerance(mut self, tol: f64) -> Self {
        self.tolerances = self.tolerances.with_parallel(tol);
        self
    }

    pub fn with_dedup_tolerance(mut self, tol: f64) -> Self {
        self.tolerances = self.tolerances.with_dedup(tol);
        self
    }

    pub fn with_path_tolerance(mut self, tol: f64) -> Self {
        self.tolerances = self.tolerances.with_path(tol);
        self
    }

    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    pub fn constraint_set<'a>(&self, problem: &'a ProblemInstance) -> ConstraintSet<'a> {
        ConstraintSet::new(problem.bounds, &problem.constraints, self.tolerances.feasibility)
    }

    pub fn is_feasible(&self, problem: &ProblemInstance, point: &Point, quantization: Quantization) -> bool {
        self.constraint_set(problem).feasible_quantized(point, quantization)
    }

    pub fn objective_value(&self, problem: &ProblemInstance, point: &Point) -> f64 {
        problem.objective_value(point)
    }

    pub fn enumerate_vertices(&self, problem: &ProblemInstance) -> Vec<Point> {
        VertexEnumerator::new(&self.tolerances).enumerate(&self.constraint_set(problem))
    }

    /// Enumerate the vertices and pick the one maximizing the objective
    pub fn solve(&self, problem: &ProblemInstance) -> Solution {
        let vertices = self.enumerate_vertices(problem);
        match best_vertex(&vertices, &problem.objective) {
            Some(optimum) => {
                debug!(
                    x = optimum.point.x,
                    y = optimum.point.y,
                    value = optimum.value,
                    "found optimum"
                );
                Solution::optimal(optimum, vertices)
            }
            None => {
                warn!(constraints = problem.num_constraints(), "no feasible vertex");
                Solution::infeasible()
            }
        }
    }

    /// Improvement path for a solution of `problem`; empty when infeasible
    pub fn improvement_path(&self, problem: &ProblemInstance, solution: &Solution) -> ImprovementPath {
        match &solution.optimum {
            Some(goal) => PathBuilder::new(self.tolerances.path).build(&solution.vertices, &problem.objective, goal),
            None => ImprovementPath::empty(),
        }
    }

    /// Solve and build the path in one go
    pub fn build_improvement_path(&self, problem: &ProblemInstance) -> ImprovementPath {
        let solution = self.solve(problem);
        self.improvement_path(problem, &solution)
    }
}

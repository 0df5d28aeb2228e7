mod constraints;
mod error;
mod geometry;
mod optimizer;
mod path;
mod problem;
mod solution;
mod solver;
mod tolerance;
mod vertices;

pub use constraints::{ConstraintSet, Quantization};
pub use error::SolveError;
pub use geometry::{Line, Point};
pub use optimizer::best_vertex;
pub use path::{ImprovementPath, PathBuilder, PathStep, Playback};
pub use problem::{Bounds, Constraint, Objective, ProblemInstance};
pub use solution::{Optimum, Solution, SolutionStatus};
pub use solver::Solver;
pub use tolerance::{DEDUP_TOLERANCE, FEASIBILITY_TOLERANCE, PARALLEL_TOLERANCE, PATH_TOLERANCE, Tolerances};
pub use vertices::{VertexEnumerator, dedup, pairwise_intersections};

use dantzig_solver::{ImprovementPath, Playback, Point, ProblemInstance, Solution, SolveError, Solver};
use rand::Rng;

use crate::generator::ProblemGenerator;
use crate::level::Level;
use crate::scoring::{DecisionMode, Score, ScoreKey, score_point};

/// A generated puzzle together with everything derived from it.
///
/// Built in one synchronous step; starting a new game builds a new `Puzzle`
/// rather than editing this one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    pub level: Level,
    pub problem: ProblemInstance,
    pub solution: Solution,
    pub path: ImprovementPath,
}

impl Puzzle {
    pub fn new(level: Level, problem: ProblemInstance, solver: &Solver) -> Self {
        let solution = solver.solve(&problem);
        let path = solver.improvement_path(&problem, &solution);
        Self {
            level,
            problem,
            solution,
            path,
        }
    }

    pub fn generate<R: Rng>(generator: &mut ProblemGenerator<R>, level: Level, solver: &Solver) -> Self {
        let problem = generator.generate(level);
        Self::new(level, problem, solver)
    }

    /// Where the candidate point sits when the puzzle opens
    pub fn start_point(&self) -> Point {
        let bounds = self.problem.bounds;
        Point::new((bounds.x_max / 2.0).min(2.0), (bounds.y_max / 2.0).min(2.0))
    }

    pub fn playback(&self) -> Playback {
        Playback::new(self.path.clone())
    }

    pub fn score(&self, solver: &Solver, point: Point, mode: DecisionMode) -> Result<Score, SolveError> {
        score_point(solver, &self.problem, &self.solution, point, mode)
    }

    pub fn score_key(&self, mode: DecisionMode) -> ScoreKey {
        ScoreKey::new(self.level, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dantzig_solver::{Bounds, Constraint, Objective, Quantization};

    const EPS: f64 = 1e-6;

    #[test]
    fn test_generated_puzzles_hold_their_guarantees() {
        let solver = Solver::new();
        for level in Level::ALL {
            let mut generator = ProblemGenerator::from_seed(1000 + level.constraint_count() as u64);
            for _ in 0..50 {
                let puzzle = Puzzle::generate(&mut generator, level, &solver);
                let problem = &puzzle.problem;
                let set = solver.constraint_set(problem);
                let vertices = &puzzle.solution.vertices;
                let optimum = puzzle.solution.optimum().unwrap();

                // every vertex is feasible and inside the box
                for v in vertices {
                    assert!(set.feasible(v), "{:?} infeasible in {:?}", v, problem);
                    assert!(problem.bounds.contains(v));
                }

                // corners are present iff feasible
                for corner in problem.bounds.corners() {
                    let present = vertices.iter().any(|v| v.coincides(&corner, EPS));
                    assert_eq!(present, set.feasible(&corner), "corner {:?} in {:?}", corner, problem);
                }

                // optimum is a vertex and dominates all of them
                assert!(vertices.contains(&optimum.point));
                for v in vertices {
                    assert!(optimum.value >= problem.objective_value(v));
                }

                // path climbs from the worst vertex to the optimum
                let steps = &puzzle.path.steps;
                assert!(!steps.is_empty());
                let min_value = vertices
                    .iter()
                    .map(|v| problem.objective_value(v))
                    .fold(f64::INFINITY, f64::min);
                assert_eq!(steps[0].value, min_value);
                for pair in steps.windows(2) {
                    assert!(pair[0].value <= pair[1].value, "path not monotone: {:?}", steps);
                }
                let last = steps[steps.len() - 1];
                assert!(last.point.coincides(&optimum.point, EPS));
                for step in steps {
                    assert!(solver.is_feasible(problem, &step.point, Quantization::None));
                }
            }
        }
    }

    #[test]
    fn test_regenerating_from_seed_is_deterministic() {
        let solver = Solver::new();
        let a = Puzzle::generate(&mut ProblemGenerator::from_seed(9), Level::Medium, &solver);
        let b = Puzzle::generate(&mut ProblemGenerator::from_seed(9), Level::Medium, &solver);
        assert_eq!(a, b);
    }

    #[test]
    fn test_start_point() {
        let solver = Solver::new();
        let problem = ProblemInstance::new(Bounds::new(3.0, 10.0), Objective::new(1.0, 1.0), vec![]).unwrap();
        let puzzle = Puzzle::new(Level::Easy, problem, &solver);
        assert_eq!(puzzle.start_point(), Point::new(1.5, 2.0));
    }

    #[test]
    fn test_infeasible_puzzle_disables_playback() {
        let solver = Solver::new();
        let problem = ProblemInstance::new(
            Bounds::new(10.0, 10.0),
            Objective::new(3.0, 2.0),
            vec![Constraint::new(1.0, 1.0, -1.0)],
        )
        .unwrap();
        let puzzle = Puzzle::new(Level::Easy, problem, &solver);

        assert!(!puzzle.solution.is_optimal());
        assert!(puzzle.path.is_empty());
        assert!(!puzzle.playback().is_enabled());
        assert_eq!(
            puzzle.score(&solver, Point::new(0.0, 0.0), DecisionMode::Continuous),
            Err(SolveError::InfeasibleProblem)
        );
    }

    #[test]
    fn test_score_and_key() {
        let solver = Solver::new();
        let problem = ProblemInstance::new(
            Bounds::new(10.0, 10.0),
            Objective::new(3.0, 2.0),
            vec![Constraint::new(1.0, 1.0, 8.0)],
        )
        .unwrap();
        let puzzle = Puzzle::new(Level::Medium, problem, &solver);

        let score = puzzle.score(&solver, Point::new(8.0, 0.0), DecisionMode::Integer).unwrap();
        assert!(score.is_perfect());
        assert_eq!(puzzle.score_key(DecisionMode::Integer).to_string(), "dantzig.best.medium.int");

        let mut playback = puzzle.playback();
        assert_eq!(playback.label(), "Step 1/2");
        assert_eq!(playback.next().unwrap().point, Point::new(8.0, 0.0));
    }
}

use std::fmt;
use std::str::FromStr;

use dantzig_solver::{Bounds, Point, ProblemInstance, Quantization, Solution, SolveError, Solver};

use crate::error::GameError;
use crate::level::Level;

/// Points for hitting the optimum exactly
pub const MAX_POINTS: u32 = 100;
/// Extra points for a feasible answer in a discrete mode
pub const DISCRETE_BONUS: u32 = 10;

/// Which values the decision variables may take
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecisionMode {
    #[default]
    Continuous,
    Integer,
    Binary,
}

impl DecisionMode {
    pub const ALL: [DecisionMode; 3] = [DecisionMode::Continuous, DecisionMode::Integer, DecisionMode::Binary];

    /// Short key used in best-score keys
    pub fn as_str(self) -> &'static str {
        match self {
            DecisionMode::Continuous => "cont",
            DecisionMode::Integer => "int",
            DecisionMode::Binary => "bool",
        }
    }

    pub fn is_discrete(self) -> bool {
        self != DecisionMode::Continuous
    }

    /// Lattice applied before the feasibility check
    pub fn quantization(self) -> Quantization {
        match self {
            DecisionMode::Continuous => Quantization::None,
            DecisionMode::Integer => Quantization::Integer,
            DecisionMode::Binary => Quantization::Binary,
        }
    }

    /// Snap a raw candidate (a drag or typed input) to the mode's lattice,
    /// then clamp it into the bounds rectangle
    pub fn snap(self, point: Point, bounds: &Bounds) -> Point {
        bounds.clamp(self.quantization().apply(point))
    }
}

impl fmt::Display for DecisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecisionMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cont" | "continuous" => Ok(DecisionMode::Continuous),
            "int" | "integer" => Ok(DecisionMode::Integer),
            "bool" | "binary" => Ok(DecisionMode::Binary),
            _ => Err(GameError::UnknownMode(s.to_string())),
        }
    }
}

/// Outcome of checking a candidate point against the optimum
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Whether the point satisfies every constraint under the mode's quantization
    pub feasible: bool,
    /// Objective value at the candidate
    pub value: f64,
    /// Objective value at the optimum
    pub optimum_value: f64,
    /// Total points out of 100, bonus included; zero when infeasible
    pub points: u32,
    /// Discrete-mode bonus that went into `points`
    pub bonus: u32,
}

impl Score {
    pub fn is_perfect(&self) -> bool {
        self.feasible && self.points >= MAX_POINTS
    }

    /// Whether this score should replace the stored best for its key
    pub fn is_new_best(&self, previous: Option<u32>) -> bool {
        self.feasible && self.points > previous.unwrap_or(0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.feasible {
            return write!(f, "infeasible point (z={:.2})", self.value);
        }
        write!(
            f,
            "z={:.2} | z*={:.2} -> score {}/{}",
            self.value, self.optimum_value, self.points, MAX_POINTS
        )?;
        if self.bonus > 0 {
            write!(f, " (+{} bonus)", self.bonus)?;
        }
        Ok(())
    }
}

/// Score `point` against the optimum of `problem`.
///
/// The candidate is first snapped with `mode`, so it is judged only on
/// coordinates the mode allows.
/// The ratio `z / z*` is clamped to [0, 1] and scaled to 100 points; a zero
/// optimum divides by one instead. Discrete modes earn a bonus for feasible
/// answers, capped at 100.
pub fn score_point(
    solver: &Solver,
    problem: &ProblemInstance,
    solution: &Solution,
    point: Point,
    mode: DecisionMode,
) -> Result<Score, SolveError> {
    let optimum = solution.optimum()?;
    let point = mode.snap(Point::try_new(point.x, point.y)?, &problem.bounds);

    let feasible = solver.is_feasible(problem, &point, mode.quantization());
    let value = solver.objective_value(problem, &point);
    if !feasible {
        return Ok(Score {
            feasible,
            value,
            optimum_value: optimum.value,
            points: 0,
            bonus: 0,
        });
    }

    let denominator = if optimum.value == 0.0 { 1.0 } else { optimum.value };
    let ratio = (value / denominator).clamp(0.0, 1.0);
    let base = (ratio * f64::from(MAX_POINTS)).round() as u32;
    let bonus = if mode.is_discrete() { DISCRETE_BONUS } else { 0 };

    Ok(Score {
        feasible,
        value,
        optimum_value: optimum.value,
        points: (base + bonus).min(MAX_POINTS),
        bonus,
    })
}

/// Storage key for the best score of a (level, mode) pair
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreKey {
    pub level: Level,
    pub mode: DecisionMode,
}

impl ScoreKey {
    pub fn new(level: Level, mode: DecisionMode) -> Self {
        Self { level, mode }
    }
}

impl fmt::Display for ScoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dantzig.best.{}.{}", self.level, self.mode)
    }
}

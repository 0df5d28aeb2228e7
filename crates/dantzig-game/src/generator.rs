//! Random puzzle generation.
//!
//! Every oblique constraint is drawn so that its boundary passes through a
//! witness point inside the bounds rectangle. With positive coefficients the
//! origin always satisfies every constraint, so generated puzzles are never
//! empty.

use dantzig_solver::{Bounds, Constraint, Objective, ProblemInstance};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::GameError;
use crate::level::Level;

/// Sampling ranges for generated puzzles; all integer ranges are inclusive
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Range for `x_max` and `y_max`
    pub bounds: (u32, u32),
    /// Range for the objective coefficients `c1`, `c2`
    pub objective: (u32, u32),
    /// Range for the constraint coefficients `a`, `b`
    pub coefficients: (u32, u32),
    /// Witness coordinates are drawn from `[floor(lo·max), floor(hi·max)]`
    pub witness: (f64, f64),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            bounds: (8, 16),
            objective: (1, 8),
            coefficients: (1, 7),
            witness: (0.35, 0.9),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        for (name, (lo, hi)) in [
            ("bounds", self.bounds),
            ("objective", self.objective),
            ("coefficients", self.coefficients),
        ] {
            if lo == 0 || lo > hi {
                return Err(GameError::InvalidConfig(format!(
                    "{} range must satisfy 1 <= lo <= hi, got ({}, {})",
                    name, lo, hi
                )));
            }
        }
        let (lo, hi) = self.witness;
        if !(0.0..=1.0).contains(&lo) || !(0.0..=1.0).contains(&hi) || lo > hi {
            return Err(GameError::InvalidConfig(format!(
                "witness fractions must satisfy 0 <= lo <= hi <= 1, got ({}, {})",
                lo, hi
            )));
        }
        Ok(())
    }
}

/// Draws puzzle instances from an injectable random source
pub struct ProblemGenerator<R = StdRng> {
    rng: R,
    config: GeneratorConfig,
}

impl ProblemGenerator<StdRng> {
    /// Reproducible generator: the same seed yields the same puzzles
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the platform's entropy source
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ProblemGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Result<Self, GameError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draw a fresh puzzle with `level.constraint_count()` oblique constraints
    pub fn generate(&mut self, level: Level) -> ProblemInstance {
        let x_max = self.draw(self.config.bounds);
        let y_max = self.draw(self.config.bounds);
        let c1 = self.draw(self.config.objective);
        let c2 = self.draw(self.config.objective);

        let constraints: Vec<Constraint> = (0..level.constraint_count())
            .map(|_| {
                let a = self.draw(self.config.coefficients);
                let b = self.draw(self.config.coefficients);
                let px = self.witness(x_max);
                let py = self.witness(y_max);
                let d = a * px + b * py;
                debug!(a, b, d, px, py, "drew constraint");
                Constraint::new(a, b, d)
            })
            .collect();

        info!(%level, x_max, y_max, c1, c2, constraints = constraints.len(), "generated problem");
        ProblemInstance {
            bounds: Bounds::new(x_max, y_max),
            objective: Objective::new(c1, c2),
            constraints,
        }
    }

    fn draw(&mut self, (lo, hi): (u32, u32)) -> f64 {
        f64::from(self.rng.gen_range(lo..=hi))
    }

    fn witness(&mut self, max: f64) -> f64 {
        let (lo, hi) = self.config.witness;
        let lo = (max * lo).floor() as u32;
        let hi = (max * hi).floor() as u32;
        f64::from(self.rng.gen_range(lo..=hi))
    }
}

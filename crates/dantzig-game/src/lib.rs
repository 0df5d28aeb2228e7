pub mod error;
pub mod generator;
pub mod level;
pub mod puzzle;
pub mod scoring;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::GameError;
pub use generator::{GeneratorConfig, ProblemGenerator};
pub use level::Level;
pub use puzzle::Puzzle;
pub use scoring::{DISCRETE_BONUS, DecisionMode, MAX_POINTS, Score, ScoreKey, score_point};

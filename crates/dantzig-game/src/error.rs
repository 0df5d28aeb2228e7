use dantzig_solver::SolveError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("Unknown level: {0} (expected easy, medium, hard or expert)")]
    UnknownLevel(String),
    #[error("Unknown decision mode: {0} (expected cont, int or bool)")]
    UnknownMode(String),
    #[error("Invalid generator config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

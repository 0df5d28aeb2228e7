use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("No feasible solution: the constraints leave an empty region")]
    InfeasibleProblem,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

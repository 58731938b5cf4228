use thiserror::Error;

use crate::solver::SolverError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PuzzleError {
    #[error("A puzzle needs at least two numbers, got {0}")]
    InvalidCount(usize),
    #[error("Minimum number {min} cannot be greater than maximum number {max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("No solvable number set found within {attempts} attempts")]
    ExhaustedRetries { attempts: usize },
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}

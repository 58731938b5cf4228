use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("An equation needs at least two numbers, got {0}")]
    TooFewNumbers(usize),
}

use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Input cannot be empty")]
    EmptyInput,
    #[error("Disallowed character '{character}' at index {index}")]
    DisallowedCharacter { character: char, index: usize },
}

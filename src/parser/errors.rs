use thiserror::Error;

use crate::utils::UtilsError;

/// Malformed arithmetic grammar: the one error class the parser surfaces.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Invalid expression text: {0}")]
    InvalidText(#[from] UtilsError),
    #[error("Unexpected end of expression")]
    UnexpectedEndOfInput,
    #[error("Unexpected token '{0}'")]
    UnexpectedToken(String),
    #[error("Unmatched parenthesis")]
    UnmatchedParenthesis,
    #[error("Invalid number literal '{0}'")]
    InvalidNumber(String),
}

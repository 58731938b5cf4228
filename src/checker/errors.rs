use thiserror::Error;

use crate::expression::ExpressionError;
use crate::parser::ParseError;
use crate::utils::UtilsError;

/// Everything that can go wrong while checking one raw equation string.
///
/// Parse and evaluation failures propagate unchanged; "malformed" and
/// "false but well-formed" are distinguishable outcomes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EquationError {
    #[error("Equation must contain exactly one '==' marker, found {0}")]
    MalformedEquation(usize),
    #[error("Syntax error: {0}")]
    Syntax(#[from] ParseError),
    #[error("Evaluation error: {0}")]
    Eval(#[from] ExpressionError),
}

impl From<UtilsError> for EquationError {
    fn from(err: UtilsError) -> Self {
        EquationError::Syntax(ParseError::InvalidText(err))
    }
}

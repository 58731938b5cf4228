use log::{debug, info};

use crate::checker::errors::EquationError;
use crate::expression::Equation;
use crate::parser::parse;
use crate::utils::validate_equation_text;

const EQUALITY_MARKER: &str = "==";

/// Verify a raw equation string: character-set validation, exactly one
/// `==` marker, parse both sides, compare the evaluated results.
///
/// # Errors
///
/// Returns an error when the marker count is wrong, when either side fails
/// to parse, or when evaluation divides by zero. These are never masked as
/// a `false` verdict.
///
/// # Examples
///
/// ```
/// use equata::check_equation;
///
/// assert_eq!(check_equation("8 * (5 - 2) == 24"), Ok(true));
/// assert_eq!(check_equation("8 * 5 - 2 == 24"), Ok(false));
/// assert!(check_equation("3 + 3 == print('x')").is_err());
/// ```
pub fn check_equation(text: &str) -> Result<bool, EquationError> {
    debug!("Checking equation: '{}'", text);

    validate_equation_text(text)?;

    let markers = text.matches(EQUALITY_MARKER).count();
    if markers != 1 {
        debug!("Expected exactly one equality marker, found {}", markers);
        return Err(EquationError::MalformedEquation(markers));
    }

    let (left_text, right_text) = text
        .split_once(EQUALITY_MARKER)
        .ok_or(EquationError::MalformedEquation(0))?;

    let equation = Equation::new(parse(left_text)?, parse(right_text)?);
    let verdict = equation.holds()?;

    info!("Equation '{}' verdict: {}", text, verdict);
    Ok(verdict)
}

use std::fmt;

use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

/// A pair of expression trees joined by the equality marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    pub left: Expression,
    pub right: Expression,
}

impl Equation {
    pub fn new(left: Expression, right: Expression) -> Self {
        Self { left, right }
    }

    /// Evaluate both sides and compare for exact floating-point equality.
    ///
    /// # Errors
    ///
    /// Propagates evaluation failures from either side unchanged; a
    /// malformed side is not the same thing as a false equation.
    pub fn holds(&self) -> Result<bool, ExpressionError> {
        let left = self.left.evaluate()?;
        let right = self.right.evaluate()?;
        debug!("Equation sides evaluated to {} and {}", left, right);

        #[allow(clippy::float_cmp)]
        let equal = left == right;
        Ok(equal)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} == {}", self.left, self.right)
    }
}

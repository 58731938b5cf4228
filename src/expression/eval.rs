use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

impl Operator {
    /// Apply the operator to two already-evaluated operands.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` when dividing by exactly zero. Division is
    /// real (non-truncating) division, so intermediate results may be
    /// fractional even for integer inputs.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, ExpressionError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div => {
                if right == 0.0 {
                    debug!("Division by zero attempted: {} / {}", left, right);
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl Expression {
    /// Reduce the tree to a numeric value by recursive reduction.
    ///
    /// # Errors
    ///
    /// Returns an error when the right operand of a division evaluates to
    /// exactly zero.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        match self {
            Expression::Number(n) => Ok(*n),
            Expression::BinaryOp(op, left, right) => {
                op.apply(left.evaluate()?, right.evaluate()?)
            }
        }
    }
}

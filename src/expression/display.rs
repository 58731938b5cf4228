use std::fmt;

use crate::expression::ast::{Expression, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Renders the tree with single spaces around every number and operator
/// token, inserting the minimal parentheses needed so that re-parsing the
/// rendered text reproduces the identical tree.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                // Atoms never need parentheses around them.
                Expression::Number(_) => u8::MAX,
                Expression::BinaryOp(op, _, _) => op.precedence(),
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::BinaryOp(op, left, right) => {
                    // Chains are left-associative, so a right child at the
                    // same precedence level must be parenthesized too.
                    write_with_parens(f, left, precedence(left) < op.precedence())?;
                    write!(f, " {} ", op)?;
                    write_with_parens(f, right, precedence(right) <= op.precedence())
                }
            }
        }

        fmt_expression(f, self)
    }
}

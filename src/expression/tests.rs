use crate::expression::ast::{Expression, Operator};
use crate::expression::equation::Equation;
use crate::expression::errors::ExpressionError;

fn num(n: f64) -> Expression {
    Expression::Number(n)
}

#[test]
fn test_evaluate_leaf() {
    let result = num(7.0).evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert_eq!(value, 7.0);
    }
}

#[test]
fn test_evaluate_four_operators() {
    let cases = [
        (Operator::Add, 6.0, 2.0, 8.0),
        (Operator::Sub, 6.0, 2.0, 4.0),
        (Operator::Mul, 6.0, 2.0, 12.0),
        (Operator::Div, 6.0, 2.0, 3.0),
    ];
    for (op, left, right, expected) in cases {
        let expr = Expression::binary(op, num(left), num(right));
        let result = expr.evaluate();
        assert!(result.is_ok());
        if let Ok(value) = result {
            assert_eq!(value, expected);
        }
    }
}

#[test]
fn test_division_is_real_division() {
    let expr = Expression::binary(Operator::Div, num(3.0), num(2.0));
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert_eq!(value, 1.5);
    }
}

#[test]
fn test_division_by_zero() {
    let expr = Expression::binary(Operator::Div, num(1.0), num(0.0));
    let result = expr.evaluate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e, ExpressionError::DivisionByZero);
    }
}

#[test]
fn test_division_by_computed_zero() {
    // The divisor only becomes zero after evaluation.
    let divisor = Expression::binary(Operator::Sub, num(2.0), num(2.0));
    let expr = Expression::binary(Operator::Div, num(1.0), divisor);
    let result = expr.evaluate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e, ExpressionError::DivisionByZero);
    }
}

#[test]
fn test_nested_evaluation() {
    // 8 * (5 - 2)
    let inner = Expression::binary(Operator::Sub, num(5.0), num(2.0));
    let expr = Expression::binary(Operator::Mul, num(8.0), inner);
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert_eq!(value, 24.0);
    }
}

#[test]
fn test_operator_precedence_levels() {
    assert_eq!(Operator::Add.precedence(), 1);
    assert_eq!(Operator::Sub.precedence(), 1);
    assert_eq!(Operator::Mul.precedence(), 2);
    assert_eq!(Operator::Div.precedence(), 2);
}

#[test]
fn test_display_flat_chain() {
    // (1 - 2) + 3 is the left-associative reading; no parentheses needed.
    let expr = Expression::binary(
        Operator::Add,
        Expression::binary(Operator::Sub, num(1.0), num(2.0)),
        num(3.0),
    );
    assert_eq!(expr.to_string(), "1 - 2 + 3");
}

#[test]
fn test_display_precedence_needs_no_parens() {
    let expr = Expression::binary(
        Operator::Add,
        num(2.0),
        Expression::binary(Operator::Mul, num(3.0), num(4.0)),
    );
    assert_eq!(expr.to_string(), "2 + 3 * 4");
}

#[test]
fn test_display_parenthesizes_lower_precedence_child() {
    let expr = Expression::binary(
        Operator::Mul,
        num(8.0),
        Expression::binary(Operator::Sub, num(5.0), num(2.0)),
    );
    assert_eq!(expr.to_string(), "8 * (5 - 2)");
}

#[test]
fn test_display_parenthesizes_right_child_at_same_level() {
    // 1 - (2 + 3) must not render as 1 - 2 + 3.
    let expr = Expression::binary(
        Operator::Sub,
        num(1.0),
        Expression::binary(Operator::Add, num(2.0), num(3.0)),
    );
    assert_eq!(expr.to_string(), "1 - (2 + 3)");
}

#[test]
fn test_display_negative_leaf() {
    let expr = Expression::binary(Operator::Sub, num(3.0), num(-5.0));
    assert_eq!(expr.to_string(), "3 - -5");
    assert_eq!(num(-5.0).to_string(), "-5");
}

#[test]
fn test_display_fractional_number() {
    let expr = Expression::binary(Operator::Add, num(0.5), num(2.0));
    assert_eq!(expr.to_string(), "0.5 + 2");
}

#[test]
fn test_equation_holds() {
    let equation = Equation::new(
        Expression::binary(Operator::Add, num(3.0), num(1.0)),
        Expression::binary(Operator::Add, num(2.0), num(2.0)),
    );
    assert_eq!(equation.holds(), Ok(true));
    assert_eq!(equation.to_string(), "3 + 1 == 2 + 2");
}

#[test]
fn test_equation_false_but_well_formed() {
    let equation = Equation::new(num(3.0), num(4.0));
    assert_eq!(equation.holds(), Ok(false));
}

#[test]
fn test_equation_propagates_division_by_zero() {
    let bad = Expression::binary(Operator::Div, num(1.0), num(0.0));
    let equation = Equation::new(bad.clone(), bad);
    assert_eq!(equation.holds(), Err(ExpressionError::DivisionByZero));
}

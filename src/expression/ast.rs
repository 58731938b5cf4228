/// The four operators an equation may use.
///
/// The symbol/precedence/function mapping lives entirely in these methods;
/// there is no mutable operator table anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Binding strength: `*`/`/` bind tighter than `+`/`-`.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

/// An arithmetic expression tree built from numbers and binary operators.
///
/// Each node owns its children exclusively; the tree shape encodes operator
/// precedence and explicit parenthesization, so evaluation never needs to
/// know about either.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    BinaryOp(Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::BinaryOp(op, Box::new(left), Box::new(right))
    }
}

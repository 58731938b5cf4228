//! Expression module split into submodules for clarity

mod ast;
mod display;
mod equation;
mod errors;
mod eval;

pub use ast::{Expression, Operator};
pub use equation::Equation;
pub use errors::ExpressionError;

#[cfg(test)]
mod tests;

//! Checker module split into submodules

mod core;
mod errors;

pub use core::check_equation;
pub use errors::EquationError;

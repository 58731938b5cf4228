//! Solver module split into submodules

mod candidates;
mod config;
mod core;
mod errors;

pub use config::SearchMode;
pub use core::EquationSolver;
pub use errors::SolverError;

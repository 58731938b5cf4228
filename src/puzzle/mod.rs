//! Puzzle module split into submodules

mod errors;
mod generator;

pub use errors::PuzzleError;
pub use generator::{
    DEFAULT_SEARCH_BUDGET, MAX_GENERATION_RETRIES, Puzzle, generate_numbers, generate_solvable,
};

#[cfg(test)]
mod tests;

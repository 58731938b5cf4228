//! Equata - arithmetic equation puzzles over a fixed number multiset
//!
//! This library provides a safe arithmetic expression parser/evaluator, a
//! checker for player-supplied equation strings, and a bounded combinatorial
//! solver that searches operator assignments, number orderings, and split
//! positions for valid equations.

pub mod checker;
pub mod expression;
pub mod parser;
pub mod puzzle;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use checker::{EquationError, check_equation};
pub use expression::{Equation, Expression, ExpressionError, Operator};
pub use parser::{ParseError, parse};
pub use puzzle::{Puzzle, PuzzleError, generate_solvable};
pub use solver::{EquationSolver, SearchMode, SolverError};

/// Find valid equations buildable from exactly the given numbers.
///
/// This is a convenience function that runs a permutation-mode solver; use
/// [`EquationSolver`] directly to fix the number order instead. The search
/// attempts at most `budget` candidates and is sound but not complete: every
/// returned equation holds, but an empty result only means nothing was found
/// within budget.
///
/// # Errors
///
/// This function will return an error if fewer than two numbers are given.
///
/// # Examples
///
/// ```
/// use equata::{check_equation, find_solutions};
///
/// let solutions = find_solutions(&[3.0, 1.0, 2.0, 2.0], 1000)?;
/// assert!(!solutions.is_empty());
/// for equation in &solutions {
///     assert_eq!(check_equation(equation), Ok(true));
/// }
/// # Ok::<(), equata::SolverError>(())
/// ```
pub fn find_solutions(numbers: &[f64], budget: u64) -> Result<Vec<String>, SolverError> {
    let solver = EquationSolver::new(SearchMode::Permutations);
    solver.find_solutions(numbers, budget)
}

//! Utils module split into submodules

mod errors;
mod numbers;
mod permutations;
mod validation;

pub use errors::UtilsError;
pub use numbers::{extract_numbers, uses_exact_multiset};
pub use permutations::{DistinctPermutations, distinct_permutations};
pub use validation::{validate_equation_text, validate_expression_text};

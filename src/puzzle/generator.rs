use log::{debug, info, warn};
use rand::Rng;

use crate::puzzle::errors::PuzzleError;
use crate::solver::{EquationSolver, SearchMode};

/// How many fresh number sets to try before giving up on the round.
pub const MAX_GENERATION_RETRIES: usize = 100;

/// Default candidate budget handed to the solver per generated set.
pub const DEFAULT_SEARCH_BUDGET: u64 = 200_000;

/// One puzzle round: the generated numbers and the solutions the solver
/// found for them, kept around as hint material. The numbers are immutable
/// once generated.
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    pub numbers: Vec<f64>,
    pub solutions: Vec<String>,
}

/// Draw `count` uniform integers from `min..=max` as puzzle numbers.
pub fn generate_numbers<R: Rng>(rng: &mut R, count: usize, min: i64, max: i64) -> Vec<f64> {
    (0..count)
        .map(|_| rng.random_range(min..=max) as f64)
        .collect()
}

/// Generate a number set guaranteed to admit at least one valid equation,
/// regenerating on unsolvable draws up to [`MAX_GENERATION_RETRIES`].
///
/// # Errors
///
/// Returns an error for an invalid count or range, or when no solvable set
/// turns up within the retry cap. The latter is fatal to the round, not to
/// the process.
pub fn generate_solvable<R: Rng>(
    rng: &mut R,
    count: usize,
    min: i64,
    max: i64,
    budget: u64,
) -> Result<Puzzle, PuzzleError> {
    if count < 2 {
        return Err(PuzzleError::InvalidCount(count));
    }
    if min > max {
        return Err(PuzzleError::InvalidRange { min, max });
    }

    let solver = EquationSolver::new(SearchMode::Permutations);

    for attempt in 1..=MAX_GENERATION_RETRIES {
        let numbers = generate_numbers(rng, count, min, max);
        debug!("Attempt {}: generated numbers {:?}", attempt, numbers);

        let solutions = solver.find_solutions(&numbers, budget)?;
        if !solutions.is_empty() {
            info!(
                "Solvable puzzle found on attempt {}: {:?} with {} solutions",
                attempt,
                numbers,
                solutions.len()
            );
            return Ok(Puzzle { numbers, solutions });
        }
    }

    warn!(
        "No solvable number set within {} attempts",
        MAX_GENERATION_RETRIES
    );
    Err(PuzzleError::ExhaustedRetries {
        attempts: MAX_GENERATION_RETRIES,
    })
}

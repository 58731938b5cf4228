use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::checker::check_equation;
use crate::puzzle::errors::PuzzleError;
use crate::puzzle::generator::{MAX_GENERATION_RETRIES, generate_numbers, generate_solvable};
use crate::utils::uses_exact_multiset;

#[test]
fn test_generate_numbers_within_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let numbers = generate_numbers(&mut rng, 4, 1, 10);
    assert_eq!(numbers.len(), 4);
    for number in &numbers {
        assert!((1.0..=10.0).contains(number));
        assert_eq!(number.fract(), 0.0);
    }
}

#[test]
fn test_generate_solvable_puzzle() {
    let mut rng = StdRng::seed_from_u64(42);
    let result = generate_solvable(&mut rng, 4, 1, 10, 10_000);
    assert!(result.is_ok());
    if let Ok(puzzle) = result {
        assert_eq!(puzzle.numbers.len(), 4);
        assert!(!puzzle.solutions.is_empty());
        for solution in &puzzle.solutions {
            assert_eq!(check_equation(solution), Ok(true), "{}", solution);
            assert!(uses_exact_multiset(solution, &puzzle.numbers));
        }
    }
}

#[test]
fn test_generate_solvable_with_negative_range() {
    // Negative numbers are valid puzzle material; hints must still parse.
    let mut rng = StdRng::seed_from_u64(11);
    let result = generate_solvable(&mut rng, 4, -5, 5, 10_000);
    assert!(result.is_ok());
    if let Ok(puzzle) = result {
        for solution in &puzzle.solutions {
            assert_eq!(check_equation(solution), Ok(true), "{}", solution);
            assert!(uses_exact_multiset(solution, &puzzle.numbers), "{}", solution);
        }
    }
}

#[test]
fn test_generate_solvable_rejects_invalid_count() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        generate_solvable(&mut rng, 1, 1, 10, 1000),
        Err(PuzzleError::InvalidCount(1))
    );
}

#[test]
fn test_generate_solvable_rejects_inverted_range() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        generate_solvable(&mut rng, 4, 10, 1, 1000),
        Err(PuzzleError::InvalidRange { min: 10, max: 1 })
    );
}

#[test]
fn test_exhausted_retries() {
    // A zero budget means the solver can never confirm a set, so every
    // retry comes back empty and the cap is reached.
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(
        generate_solvable(&mut rng, 4, 1, 10, 0),
        Err(PuzzleError::ExhaustedRetries {
            attempts: MAX_GENERATION_RETRIES,
        })
    );
}

use std::collections::HashSet;

use log::{debug, info};

use crate::solver::candidates::{OperatorCombinations, Orderings, build_candidate};
use crate::solver::config::SearchMode;
use crate::solver::errors::SolverError;

/// Combinatorial search for valid equations over a fixed number multiset.
///
/// The search is sound but not complete: every returned equation holds, but
/// once the candidate budget is exhausted the remaining space is left
/// unexplored.
#[derive(Debug, Clone, Default)]
pub struct EquationSolver {
    mode: SearchMode,
}

impl EquationSolver {
    pub fn new(mode: SearchMode) -> Self {
        Self { mode }
    }

    /// Enumerate candidate equations and collect the renderings of those
    /// that hold, in generation order: operator tuples outer, number
    /// orderings middle, split positions inner. Repeated runs with identical
    /// input and mode return identical output.
    ///
    /// Candidates that divide by zero are silently excluded; budget
    /// exhaustion is the normal bounded-termination path and returns
    /// whatever has been accumulated, even if empty.
    ///
    /// # Errors
    ///
    /// Returns an error when fewer than two numbers are supplied.
    pub fn find_solutions(&self, numbers: &[f64], budget: u64) -> Result<Vec<String>, SolverError> {
        if numbers.len() < 2 {
            return Err(SolverError::TooFewNumbers(numbers.len()));
        }

        info!(
            "Searching equations over {:?} with budget {} in {:?} mode",
            numbers, budget, self.mode
        );

        let mut solutions = Vec::new();
        let mut seen = HashSet::new();
        let mut attempted: u64 = 0;

        'search: for operators in OperatorCombinations::new(numbers.len() - 1) {
            for ordering in Orderings::new(self.mode, numbers) {
                for split in 1..ordering.len() {
                    attempted += 1;
                    if attempted > budget {
                        debug!("Budget of {} candidates exhausted", budget);
                        break 'search;
                    }

                    let candidate = build_candidate(&ordering, &operators, split);
                    match candidate.holds() {
                        Ok(true) => {
                            let rendered = candidate.to_string();
                            debug!("Candidate holds: {}", rendered);
                            // The unused operator slot makes identical
                            // candidates recur across tuples; keep the first.
                            if seen.insert(rendered.clone()) {
                                solutions.push(rendered);
                            }
                        }
                        // A division by zero only excludes this candidate.
                        Ok(false) | Err(_) => {}
                    }
                }
            }
        }

        info!(
            "Found {} solutions after {} candidates",
            solutions.len(),
            attempted.min(budget)
        );
        Ok(solutions)
    }
}

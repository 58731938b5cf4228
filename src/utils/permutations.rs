use log::debug;

/// Iterator over every distinct ordering of a number multiset, in
/// lexicographic order. Duplicate values never produce repeated orderings.
///
/// Uses the classic in-place next-permutation step, so the full set of
/// orderings is streamed rather than materialized.
#[derive(Debug, Clone)]
pub struct DistinctPermutations {
    values: Vec<f64>,
    started: bool,
    done: bool,
}

/// Enumerate the distinct orderings of `values`.
pub fn distinct_permutations(values: &[f64]) -> DistinctPermutations {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    debug!("Enumerating distinct permutations of {} values", sorted.len());

    DistinctPermutations {
        done: sorted.is_empty(),
        values: sorted,
        started: false,
    }
}

impl DistinctPermutations {
    /// Advance to the lexicographically next ordering; false once wrapped.
    fn next_permutation(&mut self) -> bool {
        let v = &mut self.values;

        let Some(pivot) = (0..v.len().saturating_sub(1))
            .rev()
            .find(|&i| v[i].total_cmp(&v[i + 1]).is_lt())
        else {
            return false;
        };

        let successor = (pivot + 1..v.len())
            .rev()
            .find(|&j| v[pivot].total_cmp(&v[j]).is_lt());
        if let Some(successor) = successor {
            v.swap(pivot, successor);
        }
        v[pivot + 1..].reverse();
        true
    }
}

impl Iterator for DistinctPermutations {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.values.clone());
        }
        if self.next_permutation() {
            Some(self.values.clone())
        } else {
            self.done = true;
            None
        }
    }
}

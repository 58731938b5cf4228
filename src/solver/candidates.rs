use crate::expression::{Equation, Expression, Operator};
use crate::solver::config::SearchMode;
use crate::utils::{DistinctPermutations, distinct_permutations};

/// Enumeration order for operator assignments: `+` before `-` before `*`
/// before `/`, rightmost gap varying fastest.
const OPERATORS: [Operator; 4] = [
    Operator::Add,
    Operator::Sub,
    Operator::Mul,
    Operator::Div,
];

/// Iterator over every assignment of the four operators to `slots` gaps,
/// 4^slots combinations in lexicographic order.
#[derive(Debug, Clone)]
pub struct OperatorCombinations {
    indices: Vec<usize>,
    done: bool,
}

impl OperatorCombinations {
    pub fn new(slots: usize) -> Self {
        Self {
            indices: vec![0; slots],
            done: false,
        }
    }
}

impl Iterator for OperatorCombinations {
    type Item = Vec<Operator>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let combination = self.indices.iter().map(|&i| OPERATORS[i]).collect();

        // Base-4 increment, rightmost slot fastest.
        let mut carried = true;
        for index in self.indices.iter_mut().rev() {
            *index += 1;
            if *index < OPERATORS.len() {
                carried = false;
                break;
            }
            *index = 0;
        }
        if carried {
            self.done = true;
        }

        Some(combination)
    }
}

/// Iterator over the number orderings a search mode explores.
#[derive(Debug, Clone)]
pub enum Orderings {
    Fixed(Option<Vec<f64>>),
    Permuted(DistinctPermutations),
}

impl Orderings {
    pub fn new(mode: SearchMode, numbers: &[f64]) -> Self {
        match mode {
            SearchMode::FixedOrder => Orderings::Fixed(Some(numbers.to_vec())),
            SearchMode::Permutations => Orderings::Permuted(distinct_permutations(numbers)),
        }
    }
}

impl Iterator for Orderings {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Orderings::Fixed(ordering) => ordering.take(),
            Orderings::Permuted(permutations) => permutations.next(),
        }
    }
}

/// Fold a run of numbers and the operators between them into a
/// precedence-correct tree: multiplicative operators bind into the current
/// product, additive operators extend the left-associative chain. The
/// resulting tree is exactly what parsing the flat rendering would produce.
fn build_expression(numbers: &[f64], operators: &[Operator]) -> Expression {
    debug_assert_eq!(numbers.len(), operators.len() + 1);

    let mut chain: Option<(Expression, Operator)> = None;
    let mut product = Expression::Number(numbers[0]);

    for (op, &number) in operators.iter().zip(&numbers[1..]) {
        if op.precedence() == 2 {
            product = Expression::binary(*op, product, Expression::Number(number));
        } else {
            let prefix = match chain.take() {
                Some((prefix, join)) => Expression::binary(join, prefix, product),
                None => product,
            };
            chain = Some((prefix, *op));
            product = Expression::Number(number);
        }
    }

    match chain {
        Some((prefix, join)) => Expression::binary(join, prefix, product),
        None => product,
    }
}

/// Build one candidate equation: the gap at `split` becomes the equality
/// marker, so the operator assigned there goes unused for this candidate.
pub fn build_candidate(ordering: &[f64], operators: &[Operator], split: usize) -> Equation {
    debug_assert!(split >= 1 && split < ordering.len());

    let left = build_expression(&ordering[..split], &operators[..split - 1]);
    let right = build_expression(&ordering[split..], &operators[split..]);
    Equation::new(left, right)
}

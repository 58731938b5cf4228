/// How the solver explores number orderings. Pick one per deployment; the
/// two modes are never mixed inside a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Numbers are used in their given sequence; only operator assignments
    /// and split positions are enumerated.
    FixedOrder,
    /// Additionally enumerates every distinct ordering of the multiset,
    /// matching the original game's behavior.
    #[default]
    Permutations,
}

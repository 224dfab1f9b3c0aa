//! Sortable element

use std::fmt;

/// A single element of the permutation.
///
/// `rank` is the zero-based position in fully sorted order and is the only
/// field the solver compares. `value` is kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    pub value: i64,
    pub rank: usize,
}

impl Element {
    pub fn new(value: i64, rank: usize) -> Self {
        Element { value, rank }
    }

    /// Build elements whose value equals their rank (handy for tests and demos)
    pub fn from_ranks(ranks: &[usize]) -> Vec<Element> {
        ranks
            .iter()
            .map(|&rank| Element::new(rank as i64, rank))
            .collect()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.value, self.rank)
    }
}

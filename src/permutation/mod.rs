//! Input permutations
//!
//! A [`Permutation`] is the validated input to the solver: a non-empty list of
//! distinct integers, each tagged with its rank in sorted order. Validation
//! happens here so that the solver itself never sees malformed input.
//!
//! - [`errors`]: Input rejection reasons
//! - [`shuffle`]: Random permutation generator used by the demo binary

pub mod errors;
pub mod shuffle;

pub use errors::InputError;
pub use shuffle::{shuffled, PermutationSource};

use crate::stacks::Element;
use rustc_hash::FxHashSet;

/// Upper bound on accepted input length; the finalize pass is quadratic
pub const MAX_INPUT_LEN: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    elements: Vec<Element>,
}

impl Permutation {
    /// Validate `values` and assign ranks
    pub fn from_values(values: &[i64]) -> Result<Self, InputError> {
        if values.is_empty() {
            return Err(InputError::Empty);
        }
        if values.len() > MAX_INPUT_LEN {
            return Err(InputError::TooLarge {
                len: values.len(),
                limit: MAX_INPUT_LEN,
            });
        }

        let mut seen = FxHashSet::default();
        for &value in values {
            if !seen.insert(value) {
                return Err(InputError::Duplicate { value });
            }
        }

        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_unstable_by_key(|&idx| values[idx]);

        let mut elements = vec![Element::new(0, 0); values.len()];
        for (rank, &idx) in order.iter().enumerate() {
            elements[idx] = Element::new(values[idx], rank);
        }

        Ok(Permutation { elements })
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Never true for a validated permutation
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.elements.iter().map(|e| e.value)
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}

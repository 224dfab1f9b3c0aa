//! Random permutation generator

use super::{InputError, Permutation, MAX_INPUT_LEN};
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Where new permutations come from when the user asks for another one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermutationSource {
    /// Fresh random values of the given length
    Random { size: usize },
    /// The same values, reshuffled
    Fixed { values: Vec<i64> },
}

impl PermutationSource {
    /// Draw the next permutation
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Permutation, InputError> {
        match self {
            PermutationSource::Random { size } => shuffled(*size, rng),
            PermutationSource::Fixed { values } => {
                let mut values = values.clone();
                values.shuffle(rng);
                Permutation::from_values(&values)
            }
        }
    }
}

/// Draw `size` distinct values from a window centred on zero, in random order
pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Permutation, InputError> {
    if size > MAX_INPUT_LEN {
        return Err(InputError::TooLarge {
            len: size,
            limit: MAX_INPUT_LEN,
        });
    }
    let span = size.saturating_mul(4).max(1);
    let offset = (span / 2) as i64;
    let values: Vec<i64> = index::sample(rng, span, size.min(span))
        .into_iter()
        .map(|idx| idx as i64 - offset)
        .collect();
    Permutation::from_values(&values)
}

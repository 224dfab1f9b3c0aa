//! Strategy selection by input size

use super::constants::SMALL_STRATEGY_MAX;
use super::SolverConfig;
use crate::stacks::{Element, Stack};

/// Which algorithm sorts a given input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Input is already ascending (includes N ≤ 1); the log is empty
    AlreadySorted,
    /// Two unsorted elements: a single swap
    Two,
    /// Three elements: fixed case table
    Three,
    /// Four or five elements: park the two smallest in B, sort three, push back
    Small,
    /// More than five: bucketed partition with the given bucket width
    Chunked { range: usize },
}

impl Strategy {
    /// The sortedness check runs first, so `Two` is only ever chosen for a
    /// strictly descending pair.
    pub fn select(input: &[Element], config: &SolverConfig) -> Self {
        if Stack::from_elements(input).is_ascending() {
            return Strategy::AlreadySorted;
        }
        match input.len() {
            2 => Strategy::Two,
            3 => Strategy::Three,
            4..=SMALL_STRATEGY_MAX => Strategy::Small,
            len => Strategy::Chunked {
                range: config.range_for(len),
            },
        }
    }
}

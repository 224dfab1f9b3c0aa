//! Two-stack sorting solver
//!
//! This module turns a permutation into an [`OperationLog`] that sorts stack A
//! ascending by rank and leaves stack B empty:
//! - [`strategy`]: Size-based strategy selection
//! - [`small`]: Case tables for two to five elements
//! - [`chunked`]: Bucketed partition into B followed by a max-first drain back to A
//! - [`constants`]: Bucket widths and size thresholds
//!
//! # Recording
//!
//! Strategies never build operation lists by hand. They drive a [`Recorder`],
//! which applies each operation to a simulated [`StackPair`] as it is emitted,
//! so every strategy decision is made against the real intermediate state.
//!
//! The log is a heuristic, not a minimal sequence.

pub mod chunked;
pub mod constants;
pub mod small;
pub mod strategy;

pub use strategy::Strategy;

use crate::permutation::Permutation;
use crate::stacks::{Element, Operation, OperationLog, Stack, StackPair};
use constants::{DEFAULT_LARGE_RANGE, DEFAULT_RANGE_THRESHOLD, DEFAULT_SMALL_RANGE};

/// Chunked-strategy tuning. Affects operation counts, never correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub small_range: usize,
    pub large_range: usize,
    pub range_threshold: usize,
}

impl SolverConfig {
    /// Bucket width for an input of `len` elements
    pub fn range_for(&self, len: usize) -> usize {
        if len <= self.range_threshold {
            self.small_range
        } else {
            self.large_range
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            small_range: DEFAULT_SMALL_RANGE,
            large_range: DEFAULT_LARGE_RANGE,
            range_threshold: DEFAULT_RANGE_THRESHOLD,
        }
    }
}

/// Applies operations to a simulated stack pair while recording them
#[derive(Debug, Clone)]
pub struct Recorder {
    pair: StackPair,
    ops: Vec<Operation>,
}

impl Recorder {
    pub fn new(input: &[Element]) -> Self {
        Recorder {
            pair: StackPair::new(input),
            ops: Vec::new(),
        }
    }

    /// Apply and record one operation
    pub fn emit(&mut self, op: Operation) {
        let applied = self.pair.apply(op);
        debug_assert!(applied, "{} emitted with unmet precondition", op);
        self.ops.push(op);
    }

    /// Apply and record `op` `times` times
    pub fn emit_n(&mut self, op: Operation, times: usize) {
        for _ in 0..times {
            self.emit(op);
        }
    }

    pub fn a(&self) -> &Stack {
        &self.pair.a
    }

    pub fn b(&self) -> &Stack {
        &self.pair.b
    }

    /// Rank at `index` from the top of A
    pub fn a_rank(&self, index: usize) -> Option<usize> {
        self.pair.a.get(index).map(|e| e.rank)
    }

    /// Rank at `index` from the top of B
    pub fn b_rank(&self, index: usize) -> Option<usize> {
        self.pair.b.get(index).map(|e| e.rank)
    }

    pub fn pair(&self) -> &StackPair {
        &self.pair
    }

    pub fn finish(self) -> OperationLog {
        OperationLog::new(self.ops)
    }
}

/// Entry point: selects a strategy by input size and records its operations
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Solver { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve(&self, permutation: &Permutation) -> OperationLog {
        self.solve_elements(permutation.elements())
    }

    /// Solve raw elements. Their ranks must be exactly `0..len`; any other
    /// rank set yields an empty log.
    pub fn solve_elements(&self, input: &[Element]) -> OperationLog {
        if !has_dense_ranks(input) {
            return OperationLog::default();
        }

        let strategy = Strategy::select(input, &self.config);
        let mut recorder = Recorder::new(input);
        match strategy {
            Strategy::AlreadySorted => {}
            Strategy::Two => small::sort_two(&mut recorder),
            Strategy::Three => small::sort_three(&mut recorder),
            Strategy::Small => small::sort_small(&mut recorder),
            Strategy::Chunked { range } => chunked::sort_chunked(&mut recorder, range),
        }

        debug_assert!(recorder.pair().is_solved());
        recorder.finish()
    }
}

fn has_dense_ranks(input: &[Element]) -> bool {
    let mut seen = vec![false; input.len()];
    input.iter().all(|e| {
        e.rank < seen.len() && !std::mem::replace(&mut seen[e.rank], true)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_for_threshold() {
        let config = SolverConfig::default();
        assert_eq!(config.range_for(6), 15);
        assert_eq!(config.range_for(100), 15);
        assert_eq!(config.range_for(101), 35);
    }

    #[test]
    fn test_dense_rank_check() {
        assert!(has_dense_ranks(&Element::from_ranks(&[2, 0, 1])));
        assert!(!has_dense_ranks(&Element::from_ranks(&[2, 0, 0])));
        assert!(!has_dense_ranks(&Element::from_ranks(&[3, 0, 1])));
        assert!(has_dense_ranks(&[]));
    }

    #[test]
    fn test_sparse_ranks_yield_empty_log() {
        let solver = Solver::default();
        assert!(solver
            .solve_elements(&Element::from_ranks(&[101, 100, 103, 102]))
            .is_empty());
        let sparse: Vec<usize> = (100..110).rev().collect();
        assert!(solver.solve_elements(&Element::from_ranks(&sparse)).is_empty());
    }

    #[test]
    fn test_recorder_tracks_state() {
        let mut recorder = Recorder::new(&Element::from_ranks(&[1, 0]));
        recorder.emit(Operation::SA);
        assert_eq!(recorder.a_rank(0), Some(0));
        assert_eq!(recorder.finish().as_slice(), &[Operation::SA]);
    }
}

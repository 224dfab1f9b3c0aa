// Stack-pair snapshots handed to rendering

use crate::stacks::{Element, StackPair};

/// Immutable copy of the playback state at one cursor position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Stack A, top first
    pub stack_a: Vec<Element>,
    /// Stack B, top first
    pub stack_b: Vec<Element>,
    /// Number of operations applied to reach this state
    pub cursor: usize,
}

impl Snapshot {
    pub fn from_pair(pair: &StackPair, cursor: usize) -> Self {
        Snapshot {
            stack_a: pair.a.to_vec(),
            stack_b: pair.b.to_vec(),
            cursor,
        }
    }

    pub fn ranks_a(&self) -> Vec<usize> {
        self.stack_a.iter().map(|e| e.rank).collect()
    }

    pub fn ranks_b(&self) -> Vec<usize> {
        self.stack_b.iter().map(|e| e.rank).collect()
    }
}

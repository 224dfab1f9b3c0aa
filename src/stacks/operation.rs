//! Primitive operations and the operation log
//!
//! | Op  | Precondition | Effect                              |
//! |-----|--------------|-------------------------------------|
//! | SA  | \|A\| ≥ 2    | swap top two of A                   |
//! | SB  | \|B\| ≥ 2    | swap top two of B                   |
//! | PA  | \|B\| ≥ 1    | move B's top to A's top             |
//! | PB  | \|A\| ≥ 1    | move A's top to B's top             |
//! | RA  | \|A\| ≥ 2    | rotate A: top moves to bottom       |
//! | RB  | \|B\| ≥ 2    | rotate B: top moves to bottom       |
//! | RRA | \|A\| ≥ 2    | reverse-rotate A: bottom moves to top |
//! | RRB | \|B\| ≥ 2    | reverse-rotate B: bottom moves to top |

use super::element::Element;
use super::pair::StackPair;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    SA,
    SB,
    PA,
    PB,
    RA,
    RB,
    RRA,
    RRB,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::SA,
        Operation::SB,
        Operation::PA,
        Operation::PB,
        Operation::RA,
        Operation::RB,
        Operation::RRA,
        Operation::RRB,
    ];

    /// Opcode token, e.g. `"RRA"`
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::SA => "SA",
            Operation::SB => "SB",
            Operation::PA => "PA",
            Operation::PB => "PB",
            Operation::RA => "RA",
            Operation::RB => "RB",
            Operation::RRA => "RRA",
            Operation::RRB => "RRB",
        }
    }

    /// Short human description for the UI
    pub fn describe(self) -> &'static str {
        match self {
            Operation::SA => "swap top of A",
            Operation::SB => "swap top of B",
            Operation::PA => "push B → A",
            Operation::PB => "push A → B",
            Operation::RA => "rotate A",
            Operation::RB => "rotate B",
            Operation::RRA => "reverse-rotate A",
            Operation::RRB => "reverse-rotate B",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown opcode token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOperationError {
    pub token: String,
}

impl fmt::Display for ParseOperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown operation: '{}'", self.token)
    }
}

impl std::error::Error for ParseOperationError {}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseOperationError {
                token: token.to_string(),
            })
    }
}

/// Ordered, immutable sequence of operations produced by the solver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationLog {
    ops: Vec<Operation>,
}

impl OperationLog {
    pub fn new(ops: Vec<Operation>) -> Self {
        OperationLog { ops }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Operation> {
        self.ops.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Operation> + '_ {
        self.ops.iter().copied()
    }

    pub fn as_slice(&self) -> &[Operation] {
        &self.ops
    }

    /// How many times each operation occurs
    pub fn counts(&self) -> FxHashMap<Operation, usize> {
        let mut counts = FxHashMap::default();
        for op in &self.ops {
            *counts.entry(*op).or_insert(0) += 1;
        }
        counts
    }

    /// Apply the first `count` operations to a fresh pair built from `input`
    pub fn replay_prefix(&self, input: &[Element], count: usize) -> StackPair {
        let mut pair = StackPair::new(input);
        for op in self.ops.iter().take(count) {
            pair.apply(*op);
        }
        pair
    }

    /// Apply the whole log to a fresh pair built from `input`
    pub fn replay(&self, input: &[Element]) -> StackPair {
        self.replay_prefix(input, self.ops.len())
    }
}

impl fmt::Display for OperationLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            writeln!(f, "{}", op)?;
        }
        Ok(())
    }
}

impl FromStr for OperationLog {
    type Err = ParseOperationError;

    /// Parse whitespace-separated opcode tokens
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(Operation::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(OperationLog::new)
    }
}

impl From<Vec<Operation>> for OperationLog {
    fn from(ops: Vec<Operation>) -> Self {
        OperationLog::new(ops)
    }
}

//! # Introduction
//!
//! stacksort sorts a permutation using two stacks and eight primitive
//! operations, records the operations as an [`stacks::OperationLog`], and
//! replays that log forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Values → Permutation → Solver → OperationLog → PlaybackEngine → Snapshots → TUI
//! ```
//!
//! 1. [`permutation`] — validates input values and assigns each a rank.
//! 2. [`solver`] — picks a strategy by input size and records the operations
//!    that sort stack A and empty stack B.
//! 3. [`stacks`] — the deque-backed [`stacks::Stack`], the
//!    [`stacks::Operation`] vocabulary and the A/B [`stacks::StackPair`].
//! 4. [`playback`] — cursor over the log with step, step back, seek and
//!    timer-driven play/pause guarded by cancellation tokens.
//! 5. [`snapshot`] — immutable stack-pair copies handed to rendering.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Operations
//!
//! `SA`/`SB` swap the top two of a stack, `PA`/`PB` move a top element across,
//! `RA`/`RB` rotate top to bottom and `RRA`/`RRB` rotate bottom to top.

pub mod permutation;
pub mod playback;
pub mod snapshot;
pub mod solver;
pub mod stacks;
pub mod ui;

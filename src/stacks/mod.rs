//! Stack model for the two-stack sorter
//!
//! This module provides the core data abstractions:
//! - [`element`]: An input value tagged with its rank in sorted order
//! - [`stack`]: Double-ended stack with O(1) push, pop and rotate
//! - [`operation`]: The eight primitive operations and the immutable [`OperationLog`]
//! - [`pair`]: The A/B stack pair that operations are applied to
//!
//! # Orientation
//!
//! The "top" of a stack is its front. Rotation moves the top to the bottom;
//! reverse rotation moves the bottom to the top:
//! ```text
//! RA:   [t, x, y, b]  →  [x, y, b, t]
//! RRA:  [t, x, y, b]  →  [b, t, x, y]
//! ```
//!
//! Every operation is a no-op when its precondition is unmet, so a log can be
//! replayed safely against any state.

pub mod element;
pub mod operation;
pub mod pair;
pub mod stack;

pub use element::Element;
pub use operation::{Operation, OperationLog};
pub use pair::StackPair;
pub use stack::Stack;

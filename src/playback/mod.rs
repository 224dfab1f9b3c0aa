//! Playback of an operation log
//!
//! This module replays a solver's [`OperationLog`] one operation at a time:
//! - [`engine`]: [`PlaybackEngine`], cursor and live stacks with step, step back, seek and play
//! - [`scheduler`]: Cooperative [`Ticker`] and the [`CancellationToken`] that guards each tick
//!
//! # Time travel
//!
//! Stepping backward does not invert operations. The engine rebuilds the
//! stacks from the original permutation and replays the first `cursor - 1`
//! operations, which costs O(cursor) per backward step and needs no inverse
//! table.
//!
//! # Scheduling
//!
//! Everything runs on the caller's thread. `play` arms a [`Ticker`]; the
//! caller polls the engine with the current time and each due tick performs
//! one step. Every tick carries the token of the ticker that produced it, and
//! a tick whose token was cancelled does nothing when fired. `pause`, `reset`
//! and `load` cancel the token, so a tick produced before them can never
//! advance the cursor afterwards.
//!
//! [`OperationLog`]: crate::stacks::OperationLog

pub mod engine;
pub mod scheduler;

pub use engine::{PlaybackConfig, PlaybackEngine, PlaybackStatus, StepOutcome};
pub use scheduler::{CancellationToken, Tick, Ticker};

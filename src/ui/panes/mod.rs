//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`stack`]: One stack drawn as rank-scaled horizontal bars (used for A and B)
//! - [`log`]: The operation log with the playback cursor highlighted
//! - [`status`]: Status bar with keybindings and playback state
//! - `utils`: Colour and scroll helpers shared by the panes
//!
//! Each pane module exports a primary `render_*` function that takes the
//! frame, its area and borrowed data, plus any scroll state it mutates.

mod utils;

pub mod log;
pub mod stack;
pub mod status;

pub use log::{render_log_pane, LogScrollState};
pub use stack::render_stack_pane;
pub use status::{render_status_bar, StatusRenderData};

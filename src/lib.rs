//! duotris: a dual-board falling-block puzzle game for the terminal.
//!
//! The design core is [`core`]: a pure, deterministic board simulation
//! driven by a gravity tick and discrete player commands. [`term`] and
//! [`input`] adapt it to a crossterm TUI; [`settings`] persists the one
//! numeric preference (board spacing) behind an injected provider.

pub mod core;
pub mod input;
pub mod settings;
pub mod term;
pub mod types;

//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`], the engine's complete
//! input vocabulary. Keys outside the vocabulary map to `None` and are ignored.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_restart, should_quit};

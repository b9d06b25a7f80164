//! Terminal renderer for the rules engine.
//!
//! Draws a [`GameSnapshot`](blockfall_core::GameSnapshot) with full-frame redraws.
//! Two terminal columns per grid cell compensate for the usual glyph aspect ratio.

pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use renderer::{encode_frame_into, TerminalRenderer};

//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on rendering, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed (or script) produces identical games
//! - **Testable**: Unit tests for every rule, driven by a manual clock
//! - **Portable**: Any shell that can read a clock and draw cells can host it
//!
//! # Module Structure
//!
//! - [`grid`]: grid dimensions, bounds and the frozen cell set
//! - [`pieces`]: the seven tetromino kinds and their four rotation states
//! - [`sequence`]: uniform random piece generation with a current/next buffer
//! - [`active`]: the falling piece - spawn, translate, rotate, drop, freeze
//! - [`lines`]: full-row detection, compaction and scoring
//! - [`game_state`]: the session aggregate and tick scheduler
//! - [`config`], [`clock`], [`snapshot`]: construction, time source and render state
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every kind is equally likely on every draw
//! - **Plain rotation**: four fixed states per kind, no wall kicks, no collision test
//! - **Immediate lock**: a piece freezes on the gravity step where it lands
//! - **Scoring**: 100 points per cleared row
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameSession, SessionConfig};
//! use blockfall_core::types::Command;
//!
//! // Create a session on the reference 10x16 grid
//! let mut game = GameSession::new(SessionConfig::default(), 12345).unwrap();
//!
//! // Nothing happens until a full tick interval has elapsed
//! assert!(!game.tick_at(100));
//! assert!(game.tick_at(500));
//! assert!(game.active().is_some());
//!
//! // Apply player commands
//! game.handle_command(Command::MoveLeft);
//! game.handle_command(Command::Rotate);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameSession::on_frame`](game_state::GameSession::on_frame) every frame with a
//! [`Clock`](clock::Clock). A gravity step runs at most once per tick interval (500ms by
//! default).

pub mod active;
pub mod clock;
pub mod config;
pub mod game_state;
pub mod grid;
pub mod lines;
pub mod pieces;
pub mod sequence;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use active::{ActivePiece, PieceController};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, SessionConfig};
pub use game_state::GameSession;
pub use grid::{in_bounds, occupied, Board, GridDims};
pub use lines::{clear_row, is_row_full, process_rows};
pub use pieces::{get_shape, random_kind, rotation_states};
pub use sequence::{GameRng, PieceSequence, PieceSource, Scripted, UniformKinds};
pub use snapshot::{ActiveSnapshot, CellView, GameSnapshot};

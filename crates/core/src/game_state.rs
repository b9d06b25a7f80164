//! Game state module - the session aggregate and tick scheduler
//!
//! This module ties together all core components: board, active piece, piece sequence and
//! line clearing. It paces gravity against an external clock and routes player commands.
//! The session is the single owner of all mutable game state.

use crate::active::{ActivePiece, PieceController};
use crate::clock::Clock;
use crate::config::{ConfigError, SessionConfig};
use crate::grid::{Board, GridDims};
use crate::lines;
use crate::pieces::{cells_at, get_shape};
use crate::sequence::{PieceSequence, PieceSource, UniformKinds};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, CoreLastEvent, Direction, PieceKind};

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession<S = UniformKinds> {
    board: Board,
    controller: PieceController,
    sequence: PieceSequence<S>,
    score: u32,
    /// Total rows cleared this session
    rows_cleared: u32,
    pieces_spawned: u32,
    tick_ms: u64,
    last_tick_ms: u64,
    /// Last freeze/line-clear event (consumed by drivers).
    last_event: Option<CoreLastEvent>,
}

impl GameSession<UniformKinds> {
    /// Create a new session with uniformly random pieces from `seed`
    pub fn new(config: SessionConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_source(config, UniformKinds::seeded(seed))
    }
}

impl<S: PieceSource> GameSession<S> {
    /// Create a new session drawing pieces from `source`
    pub fn with_source(config: SessionConfig, source: S) -> Result<Self, ConfigError> {
        let dims = config.validate()?;
        Ok(Self {
            board: Board::new(dims),
            controller: PieceController::new(),
            sequence: PieceSequence::new(source),
            score: 0,
            rows_cleared: 0,
            pieces_spawned: 0,
            tick_ms: config.tick_ms,
            last_tick_ms: 0,
            last_event: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dims(&self) -> GridDims {
        self.board.dims()
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.controller.active()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    pub fn last_tick_ms(&self) -> u64 {
        self.last_tick_ms
    }

    /// The kind announced as "next", once the first piece has spawned
    pub fn next_kind(&self) -> Option<PieceKind> {
        self.sequence.peek_next()
    }

    /// Spawn a new piece if none is falling
    pub fn spawn_piece(&mut self) -> bool {
        let dims = self.board.dims();
        let spawned = self.controller.spawn(&mut self.sequence, dims);
        if spawned {
            self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        }
        spawned
    }

    /// Try to move the active piece one cell
    pub fn translate(&mut self, direction: Direction) -> bool {
        self.controller.translate(&self.board, direction)
    }

    /// Advance the active piece's rotation state (unchecked)
    pub fn rotate(&mut self) -> bool {
        self.controller.rotate()
    }

    /// Check if the active piece rests on the floor or the stack
    pub fn is_at_bottom(&self) -> bool {
        self.controller.is_at_bottom(&self.board)
    }

    /// Gravity step; returns `true` if the piece froze
    pub fn drop_one_step(&mut self) -> bool {
        self.controller.drop_one_step(&mut self.board)
    }

    /// Clear full rows and score them; returns rows cleared
    pub fn process_rows(&mut self) -> u32 {
        let cleared = lines::process_rows(&mut self.board, &mut self.score);
        self.rows_cleared = self.rows_cleared.saturating_add(cleared);
        cleared
    }

    /// Frame callback: read the clock and run a tick if one is due
    pub fn on_frame<C: Clock + ?Sized>(&mut self, clock: &C) -> bool {
        self.tick_at(clock.now_ms())
    }

    /// Main game tick - spawn, gravity, line clear.
    ///
    /// Does nothing until `tick_ms` has elapsed since the last tick, so gravity runs at a
    /// fixed period regardless of frame rate. Returns `true` if a tick ran.
    pub fn tick_at(&mut self, now_ms: u64) -> bool {
        if now_ms < self.last_tick_ms.saturating_add(self.tick_ms) {
            return false;
        }

        let score_before = self.score;
        self.spawn_piece();
        let frozen = self.drop_one_step();
        let cleared = self.process_rows();
        self.record_event(frozen, cleared, score_before);

        self.last_tick_ms = now_ms;
        true
    }

    /// Apply a player command.
    ///
    /// Ignored while no piece is falling. Rows are processed after every command, so a
    /// soft drop that freezes the piece clears lines on the same event.
    /// Returns `true` if the active piece changed.
    pub fn handle_command(&mut self, command: Command) -> bool {
        let Some(before) = self.controller.active() else {
            return false;
        };

        let score_before = self.score;
        let mut frozen = false;
        match command {
            Command::MoveLeft => {
                self.translate(Direction::Left);
            }
            Command::MoveRight => {
                self.translate(Direction::Right);
            }
            Command::SoftDrop => {
                frozen = self.drop_one_step();
            }
            Command::Rotate => {
                self.rotate();
            }
        }

        let cleared = self.process_rows();
        self.record_event(frozen, cleared, score_before);

        self.controller.active() != Some(before)
    }

    /// Start over on an empty board, keeping dimensions, tick length and piece source
    pub fn restart(&mut self) {
        self.board.clear();
        self.controller.clear();
        self.sequence.reset();
        self.score = 0;
        self.rows_cleared = 0;
        self.pieces_spawned = 0;
        self.last_event = None;
    }

    /// Check if the upcoming piece would spawn on top of frozen cells.
    ///
    /// Informational only: spawning is never refused.
    pub fn is_spawn_blocked(&self) -> bool {
        let Some(kind) = self.next_kind() else {
            return false;
        };
        let cells = cells_at(&get_shape(kind, 0), self.dims().spawn_coord());
        self.board.is_spawn_blocked(&cells)
    }

    /// Take and clear the last freeze/line-clear event.
    pub fn take_last_event(&mut self) -> Option<CoreLastEvent> {
        self.last_event.take()
    }

    fn record_event(&mut self, frozen: bool, rows_cleared: u32, score_before: u32) {
        if frozen || rows_cleared > 0 {
            self.last_event = Some(CoreLastEvent {
                frozen,
                rows_cleared,
                score_gained: self.score - score_before,
            });
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let dims = self.board.dims();
        out.width = dims.width();
        out.height = dims.height();
        out.active = self.controller.active().map(ActiveSnapshot::from);
        out.frozen.clear();
        out.frozen.extend(self.board.cells());
        out.next = self.next_kind();
        out.score = self.score;
        out.rows_cleared = self.rows_cleared;
        out.pieces_spawned = self.pieces_spawned;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Option<ActivePiece>) {
        self.controller.set_active(piece);
    }
}

//! Sequence module - piece generation with one-step lookahead
//!
//! Pieces are drawn independently and uniformly from the seven kinds (no bag).
//! A [`PieceSequence`] wraps any [`PieceSource`] in a small current/next buffer so
//! the kind shown as "next" is always the kind spawned on the following advance.
//!
//! Also provides a scripted source for deterministic puzzles and tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::pieces::random_kind;
use crate::types::PieceKind;

/// Reproducible game PRNG
pub type GameRng = ChaCha8Rng;

/// Something that can hand out piece kinds forever
pub trait PieceSource {
    fn draw(&mut self) -> PieceKind;
}

/// Uniformly random kinds, drawn independently
#[derive(Debug, Clone)]
pub struct UniformKinds<R = GameRng> {
    rng: R,
}

impl UniformKinds<GameRng> {
    /// Seeded source; the same seed always yields the same sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: GameRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> UniformKinds<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PieceSource for UniformKinds<R> {
    fn draw(&mut self) -> PieceKind {
        random_kind(&mut self.rng)
    }
}

/// Never ends
impl<R: Rng> Iterator for UniformKinds<R> {
    type Item = PieceKind;

    fn next(&mut self) -> Option<PieceKind> {
        Some(self.draw())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Cycles through a fixed, non-empty list of kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scripted {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl Scripted {
    /// Returns `None` for an empty script
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Option<Self> {
        let kinds = kinds.into();
        (!kinds.is_empty()).then_some(Self { kinds, pos: 0 })
    }

    /// A source that only ever yields `kind`
    pub fn repeat(kind: PieceKind) -> Self {
        Self {
            kinds: vec![kind],
            pos: 0,
        }
    }
}

impl PieceSource for Scripted {
    fn draw(&mut self) -> PieceKind {
        let kind = self.kinds[self.pos];
        self.pos = (self.pos + 1) % self.kinds.len();
        kind
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn draw(&mut self) -> PieceKind {
        (**self).draw()
    }
}

/// Current/next buffer over a piece source
#[derive(Debug, Clone)]
pub struct PieceSequence<S> {
    source: S,
    next: Option<PieceKind>,
}

impl<S: PieceSource> PieceSequence<S> {
    pub fn new(source: S) -> Self {
        Self { source, next: None }
    }

    /// Draw the next `(current, next)` pair.
    ///
    /// The first call draws both fresh. Every later call returns the previous `next`
    /// as `current`.
    pub fn advance(&mut self) -> (PieceKind, PieceKind) {
        let current = match self.next.take() {
            Some(kind) => kind,
            None => self.source.draw(),
        };
        let next = self.source.draw();
        self.next = Some(next);
        (current, next)
    }

    /// Peek at the upcoming piece without consuming it.
    ///
    /// `None` until the first [`advance`](Self::advance).
    pub fn peek_next(&self) -> Option<PieceKind> {
        self.next
    }

    /// Forget the lookahead so the next advance starts fresh
    pub fn reset(&mut self) {
        self.next = None;
    }
}

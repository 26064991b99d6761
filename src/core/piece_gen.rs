//! Uniform-random tetromino supply with one piece of lookahead.
//!
//! Every spawn is an independent uniform draw over the seven kinds. There is
//! deliberately no bag: the same kind can repeat back to back, and a kind can
//! stay absent for a long stretch. The generator buffers exactly one piece so
//! the engine can always expose the upcoming kind to preview panels.
//!
//! Seeding happens once, at construction. Starting a new round keeps drawing
//! from the same stream, so a single seeded generator yields one reproducible
//! sequence across every game played on it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::PieceKind;

/// Infinite, non-restartable source of upcoming tetromino kinds.
#[derive(Debug, Clone)]
pub struct PieceGen {
    rng: ChaCha8Rng,
    next: PieceKind,
}

impl PieceGen {
    /// Seeded generator producing a reproducible sequence.
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let next = draw_kind(&mut rng);
        Self { rng, next }
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The buffered upcoming kind, without consuming it.
    pub fn peek(&self) -> PieceKind {
        self.next
    }

    /// Take the buffered kind and draw a replacement.
    pub fn draw(&mut self) -> PieceKind {
        let current = self.next;
        self.next = draw_kind(&mut self.rng);
        current
    }
}

fn draw_kind(rng: &mut ChaCha8Rng) -> PieceKind {
    PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())]
}

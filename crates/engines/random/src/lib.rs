//! Random Bagh-Chal Player
//!
//! Picks uniformly among the legal moves for its side.
//! Useful for:
//! - Exercising the session and tournament plumbing
//! - Baseline comparisons (any real strategy should beat this)
//! - Random playouts over the rules engine

use baghchal_core::{GameView, Move, PieceKind, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// A player that makes random legal moves.
///
/// Seeded with [`RandomPlayer::seeded`] it replays the same sequence of
/// choices, which keeps tournament runs reproducible.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
    moves: Vec<Move>,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            moves: Vec::with_capacity(32),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn propose(&mut self, view: &GameView, side: PieceKind) -> Option<Move> {
        baghchal_core::legal_moves_into(
            &view.board,
            view.phase,
            side,
            view.policy,
            &mut self.moves,
        );
        self.moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}

//! Greedy Bagh-Chal Player
//!
//! Looks one move ahead and keeps the move whose resulting position scores
//! best for its side. The baseline every search-based player is measured
//! against.

mod eval;

use baghchal_core::{GameView, Move, PieceKind, Player};
use log::trace;


/// One-ply greedy player.
///
/// The predator maximises [`evaluate`], the prey minimises it. Ties keep the
/// first move in generation order, so play is deterministic.
#[derive(Debug, Clone, Default)]
pub struct GreedyPlayer {
    /// Positions scored on the last call
    nodes: u64,
}

impl GreedyPlayer {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Player for GreedyPlayer {
    fn propose(&mut self, view: &GameView, side: PieceKind) -> Option<Move> {
        self.nodes = 0;
        let mut best: Option<(Move, i32)> = None;

        for mv in view.legal_moves(side) {
            let Ok((next, _)) = view.after(mv, side) else {
                continue;
            };
            self.nodes += 1;

            let score = match side {
                PieceKind::Predator => evaluate(&next.board, next.phase),
                PieceKind::Prey => -evaluate(&next.board, next.phase),
            };
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((mv, score));
            }
        }

        trace!("greedy {} scored {} moves", side, self.nodes);
        best.map(|(mv, _)| mv)
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

pub use eval::evaluate;

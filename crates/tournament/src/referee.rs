//! Deciding when a game is over and who won.
//!
//! The rules engine only reports facts (captures so far, legal moves per
//! side); the thresholds live here.

use baghchal_core::{GameView, PieceKind};
use serde::{Deserialize, Serialize};

/// Captures that win the game for the predator.
pub const DEFAULT_CAPTURES_TO_WIN: u32 = 5;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    PredatorWins,
    PreyWins,
    Draw,
}

impl Verdict {
    /// The verdict when `side` forfeits (no answer or an illegal one).
    pub fn forfeit(side: PieceKind) -> Self {
        match side {
            PieceKind::Predator => Verdict::PreyWins,
            PieceKind::Prey => Verdict::PredatorWins,
        }
    }

    pub fn winner(self) -> Option<PieceKind> {
        match self {
            Verdict::PredatorWins => Some(PieceKind::Predator),
            Verdict::PreyWins => Some(PieceKind::Prey),
            Verdict::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Referee {
    pub captures_to_win: u32,
    /// Plies before the game is called a draw
    pub max_moves: u32,
}

impl Default for Referee {
    fn default() -> Self {
        Self {
            captures_to_win: DEFAULT_CAPTURES_TO_WIN,
            max_moves: 200,
        }
    }
}

impl Referee {
    pub fn new(captures_to_win: u32, max_moves: u32) -> Self {
        Self {
            captures_to_win,
            max_moves,
        }
    }

    /// Judges the position with `to_move` about to play after `plies` plies.
    /// `None` while the game goes on.
    pub fn judge(&self, view: &GameView, to_move: PieceKind, plies: u32) -> Option<Verdict> {
        if view.board.captured(PieceKind::Prey) >= self.captures_to_win {
            return Some(Verdict::PredatorWins);
        }
        // A side that cannot move loses; for the predator that means it is
        // hemmed in.
        if view.legal_moves(to_move).is_empty() {
            return Some(Verdict::forfeit(to_move));
        }
        if plies >= self.max_moves {
            return Some(Verdict::Draw);
        }
        None
    }
}

#[cfg(test)]
#[path = "referee_tests.rs"]
mod referee_tests;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::PieceKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Pieces enter the board from supply.
    #[default]
    Placement,
    /// Pieces on the board move along lines.
    Movement,
}

impl Phase {
    /// Phase after a successful placement. Placement ends once every side
    /// that started with a supply has emptied it; movement never reverts.
    pub fn after_placement(self, board: &Board) -> Phase {
        match self {
            Phase::Placement if placement_finished(board) => Phase::Movement,
            other => other,
        }
    }

    /// True if `side` enters pieces from supply rather than moving them.
    ///
    /// A side whose supply was emptied by the level setup (the predators)
    /// moves from the very first turn.
    pub fn is_placing(self, board: &Board, side: PieceKind) -> bool {
        self == Phase::Placement && board.supply(side) > 0
    }
}

fn placement_finished(board: &Board) -> bool {
    PieceKind::ALL.iter().all(|&k| board.supply(k) == 0)
}

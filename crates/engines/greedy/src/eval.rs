//! Static evaluation from the predator's point of view.

use baghchal_core::{Board, Phase, PieceKind, Step, capture_moves};

/// Prey already taken.
const CAPTURED_VALUE: i32 = 100;
/// Captures the predator could make next.
const THREAT_VALUE: i32 = 20;
/// Predators with neither a step nor a jump.
const TRAPPED_PENALTY: i32 = 40;
const MOBILITY_VALUE: i32 = 1;

/// Scores a position for the predator:
/// - Positive = good for the predator
/// - Negative = good for the prey
///
/// Prey strategies minimise the same number.
pub fn evaluate(board: &Board, phase: Phase) -> i32 {
    let topology = board.topology();
    let mut score = board.captured(PieceKind::Prey) as i32 * CAPTURED_VALUE;
    score += capture_moves(board, phase, PieceKind::Predator).len() as i32 * THREAT_VALUE;

    for at in board.occupied(PieceKind::Predator) {
        let steps = topology
            .neighbors(at)
            .into_iter()
            .filter(|&to| board.is_empty(to))
            .count() as i32;
        let jumps = Step::ALL
            .iter()
            .filter_map(|&step| topology.jump(at, step))
            .filter(|&(over, landing)| {
                board.piece_at(over) == Some(PieceKind::Prey) && board.is_empty(landing)
            })
            .count() as i32;

        if steps + jumps == 0 {
            score -= TRAPPED_PENALTY;
        }
        score += steps * MOBILITY_VALUE;
    }
    score
}

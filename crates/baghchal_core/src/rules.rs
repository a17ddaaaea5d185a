//! Move validation and execution.
//!
//! `validate` inspects the board and produces a [`Plan`] without touching
//! anything; `execute` applies a plan. Splitting the two keeps application
//! all-or-nothing: a rejected move never leaves a half-edited board.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::MoveError;
use crate::phase::Phase;
use crate::types::*;

/// Whether a side that can capture may decline to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapturePolicy {
    #[default]
    Optional,
    Mandatory,
}

/// A validated move, ready to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plan {
    Place { at: Position },
    Step { from: Position, to: Position },
    Capture { from: Position, over: Position, to: Position },
    /// The piece was put back where it was picked up.
    Stay { at: Position },
}

impl Plan {
    pub fn captured(&self) -> Option<Position> {
        match *self {
            Plan::Capture { over, .. } => Some(over),
            _ => None,
        }
    }
}

/// What happened when a move was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub side: PieceKind,
    pub plan: Plan,
    pub phase_before: Phase,
    pub phase_after: Phase,
}

impl MoveOutcome {
    pub fn captured(&self) -> Option<Position> {
        self.plan.captured()
    }

    pub fn is_noop(&self) -> bool {
        matches!(self.plan, Plan::Stay { .. })
    }

    pub fn phase_changed(&self) -> bool {
        self.phase_before != self.phase_after
    }
}

/// Checks `mv` for `side` without mutating anything.
pub fn validate(
    board: &Board,
    phase: Phase,
    mv: Move,
    side: PieceKind,
    policy: CapturePolicy,
) -> Result<Plan, MoveError> {
    if phase == Phase::Placement && (mv.from.is_none() || board.supply(side) > 0) {
        return validate_placement(board, mv.to, side);
    }

    let from = mv.from.ok_or(MoveError::MissingOrigin)?;
    if board.get(from)? != Some(side) {
        return Err(MoveError::NotMoversPiece { at: from, kind: side });
    }
    if mv.to == from {
        return Ok(Plan::Stay { at: from });
    }
    let to = mv.to;
    let occupant = board.get(to)?;

    let topology = board.topology();
    let plan = if topology.step_along_line(from, to).is_some() {
        if occupant.is_some() {
            return Err(MoveError::CellOccupied(to));
        }
        Plan::Step { from, to }
    } else if let Some(step) = topology.jump_step(from, to) {
        if side != PieceKind::Predator {
            return Err(MoveError::IllegalAdjacency { from, to });
        }
        let over = from.offset(step);
        if occupant.is_some() || board.piece_at(over) != Some(PieceKind::Prey) {
            return Err(MoveError::CaptureBlocked { from, to });
        }
        Plan::Capture { from, over, to }
    } else {
        return Err(MoveError::IllegalAdjacency { from, to });
    };

    if policy == CapturePolicy::Mandatory
        && plan.captured().is_none()
        && !capture_moves(board, phase, side).is_empty()
    {
        return Err(MoveError::CaptureRequired);
    }
    Ok(plan)
}

fn validate_placement(board: &Board, to: Position, side: PieceKind) -> Result<Plan, MoveError> {
    if board.get(to)?.is_some() {
        return Err(MoveError::CellOccupied(to));
    }
    if board.supply(side) == 0 {
        return Err(MoveError::NoSupplyRemaining(side));
    }
    Ok(Plan::Place { at: to })
}

/// Applies a plan produced by [`validate`] against the same board and phase.
pub fn execute(board: &mut Board, phase: Phase, side: PieceKind, plan: Plan) -> MoveOutcome {
    let phase_after = match plan {
        Plan::Place { at } => {
            let placed = board.place(at, side);
            debug_assert!(placed.is_ok(), "stale placement plan: {:?}", placed);
            phase.after_placement(board)
        }
        Plan::Step { from, to } => {
            board.relocate(from, to);
            phase
        }
        Plan::Capture { from, over, to } => {
            let taken = board.capture(over);
            debug_assert_eq!(taken, Some(PieceKind::Prey), "stale capture plan");
            board.relocate(from, to);
            phase
        }
        Plan::Stay { .. } => phase,
    };
    board.debug_check();
    MoveOutcome {
        side,
        plan,
        phase_before: phase,
        phase_after,
    }
}

/// Every move `side` may make. Placements come first in raster order, then
/// movements grouped by origin.
pub fn legal_moves(
    board: &Board,
    phase: Phase,
    side: PieceKind,
    policy: CapturePolicy,
) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, phase, side, policy, &mut out);
    out
}

/// Buffer-reusing form of [`legal_moves`].
pub fn legal_moves_into(
    board: &Board,
    phase: Phase,
    side: PieceKind,
    policy: CapturePolicy,
    out: &mut Vec<Move>,
) {
    out.clear();
    if phase.is_placing(board, side) {
        out.extend(board.positions().filter(|&p| board.is_empty(p)).map(Move::place));
        return;
    }

    let captures = capture_moves(board, phase, side);
    if policy == CapturePolicy::Mandatory && !captures.is_empty() {
        out.extend(captures);
        return;
    }

    let topology = board.topology();
    for from in board.occupied(side) {
        for to in topology.neighbors(from) {
            if board.is_empty(to) {
                out.push(Move::new(from, to));
            }
        }
    }
    out.extend(captures);
}

/// Jump captures available to `side` (always empty for prey and while
/// placing).
pub fn capture_moves(board: &Board, phase: Phase, side: PieceKind) -> Vec<Move> {
    if side != PieceKind::Predator || phase.is_placing(board, side) {
        return Vec::new();
    }
    let topology = board.topology();
    let mut out = Vec::new();
    for from in board.occupied(side) {
        for step in Step::ALL {
            if let Some((over, landing)) = topology.jump(from, step) {
                if board.piece_at(over) == Some(PieceKind::Prey) && board.is_empty(landing) {
                    out.push(Move::new(from, landing));
                }
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;

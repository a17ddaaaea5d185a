//! A single level in progress: board, phase, and the observers watching it.

use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError};
use crate::phase::Phase;
use crate::rules::{self, CapturePolicy, MoveOutcome};
use crate::topology::Topology;
use crate::types::*;

/// Something the engine has confirmed. Presentation layers react to these
/// instead of being called into by the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    LevelReset,
    /// A piece was picked up (from the board or from supply) and is being
    /// dragged. Nothing on the board changed.
    PieceLifted { side: PieceKind, from: Option<Position> },
    MoveApplied { side: PieceKind, mv: Move },
    CaptureOccurred { by: Position, at: Position },
    PhaseChanged { from: Phase, to: Phase },
}

pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// A piece in the player's hand. Holding one changes nothing; it is applied
/// only by [`Game::commit`]. Dropping it is a revert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingMove {
    side: PieceKind,
    from: Option<Position>,
    hover: Option<Position>,
}

impl PendingMove {
    pub fn side(&self) -> PieceKind {
        self.side
    }
    /// Board cell the piece was lifted from; `None` when it came from supply.
    pub fn from(&self) -> Option<Position> {
        self.from
    }
    pub fn hover(&mut self, at: Position) {
        self.hover = Some(at);
    }
    /// Where the piece is currently being previewed.
    pub fn preview(&self) -> Option<Position> {
        self.hover
    }
}

/// Read-only snapshot handed to players and renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameView {
    pub board: Board,
    pub phase: Phase,
    pub policy: CapturePolicy,
}

impl GameView {
    pub fn legal_moves(&self, side: PieceKind) -> Vec<Move> {
        rules::legal_moves(&self.board, self.phase, side, self.policy)
    }

    pub fn capture_moves(&self, side: PieceKind) -> Vec<Move> {
        rules::capture_moves(&self.board, self.phase, side)
    }

    /// True if `mv` would be accepted for `side`.
    pub fn is_legal(&self, mv: Move, side: PieceKind) -> bool {
        rules::validate(&self.board, self.phase, mv, side, self.policy).is_ok()
    }

    /// The position after `mv`, or the rejection.
    pub fn after(&self, mv: Move, side: PieceKind) -> Result<(GameView, MoveOutcome), MoveError> {
        let plan = rules::validate(&self.board, self.phase, mv, side, self.policy)?;
        let mut next = self.clone();
        let outcome = rules::execute(&mut next.board, next.phase, side, plan);
        next.phase = outcome.phase_after;
        Ok((next, outcome))
    }
}

pub struct Game {
    config: GameConfig,
    board: Board,
    phase: Phase,
    observers: Vec<Box<dyn GameObserver>>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("phase", &self.phase)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let board = config.setup_board()?;
        Ok(Self {
            config,
            board,
            phase: Phase::Placement,
            observers: Vec::new(),
        })
    }

    /// Starts from an arbitrary position, e.g. one built with
    /// [`Board::from_diagram`].
    pub fn with_board(config: GameConfig, board: Board, phase: Phase) -> Self {
        Self {
            config,
            board,
            phase,
            observers: Vec::new(),
        }
    }

    /// Clears the board and sets up the next level.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.board = self.config.setup_board()?;
        self.phase = Phase::Placement;
        info!("level reset: {} prey to place", self.board.supply(PieceKind::Prey));
        self.emit(GameEvent::LevelReset);
        Ok(())
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn topology(&self) -> &Topology {
        self.board.topology()
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn policy(&self) -> CapturePolicy {
        self.config.capture_policy
    }

    /// Number of prey taken so far this level.
    pub fn captures(&self) -> u32 {
        self.board.captured(PieceKind::Prey)
    }

    pub fn view(&self) -> GameView {
        GameView {
            board: self.board.clone(),
            phase: self.phase,
            policy: self.policy(),
        }
    }

    pub fn legal_moves(&self, side: PieceKind) -> Vec<Move> {
        rules::legal_moves(&self.board, self.phase, side, self.policy())
    }

    /// Validates and, if legal, applies `mv` for `side` in one step.
    pub fn propose_move(&mut self, mv: Move, side: PieceKind) -> Result<MoveOutcome, MoveError> {
        let plan = rules::validate(&self.board, self.phase, mv, side, self.policy())?;
        let outcome = rules::execute(&mut self.board, self.phase, side, plan);
        self.phase = outcome.phase_after;

        if outcome.is_noop() {
            return Ok(outcome);
        }
        debug!("{} played {}", side, mv);
        self.emit(GameEvent::MoveApplied { side, mv });
        if let Some(at) = outcome.captured() {
            debug!("prey captured at {} ({} total)", at, self.captures());
            self.emit(GameEvent::CaptureOccurred { by: mv.to, at });
        }
        if outcome.phase_changed() {
            info!("phase {:?} -> {:?}", outcome.phase_before, outcome.phase_after);
            self.emit(GameEvent::PhaseChanged {
                from: outcome.phase_before,
                to: outcome.phase_after,
            });
        }
        Ok(outcome)
    }

    /// Picks up a piece for dragging. `from` is the board cell, or `None` to
    /// take one from supply. The board is left untouched.
    pub fn lift(
        &mut self,
        side: PieceKind,
        from: Option<Position>,
    ) -> Result<PendingMove, MoveError> {
        match from {
            Some(at) if !self.phase.is_placing(&self.board, side) => {
                if self.board.get(at)? != Some(side) {
                    return Err(MoveError::NotMoversPiece { at, kind: side });
                }
            }
            _ => {
                if self.board.supply(side) == 0 {
                    return Err(MoveError::NoSupplyRemaining(side));
                }
            }
        }
        let from = from.filter(|_| !self.phase.is_placing(&self.board, side));
        self.emit(GameEvent::PieceLifted { side, from });
        Ok(PendingMove {
            side,
            from,
            hover: None,
        })
    }

    /// Drops a lifted piece on `to`. On rejection the board is unchanged and
    /// the piece is back where it came from.
    pub fn commit(&mut self, pending: PendingMove, to: Position) -> Result<MoveOutcome, MoveError> {
        let mv = Move {
            from: pending.from,
            to,
        };
        self.propose_move(mv, pending.side)
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;

//! Turn order on top of [`Game`]: whose move it is, asking that seat, and
//! handing the answer to the validator.

use std::time::Instant;

use log::warn;

use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError};
use crate::game::Game;
use crate::players::{Players, Poll};
use crate::rules::MoveOutcome;
use crate::types::{Move, PieceKind};

/// What one [`Session::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The human to move has not acted.
    Waiting,
    /// A computer seat is still inside its thinking delay.
    Thinking(Instant),
    Applied(MoveOutcome),
    /// The proposal was refused; the same side is still to move.
    Rejected(MoveError),
    /// The side to move has nothing to propose.
    Stuck(PieceKind),
}

pub struct Session {
    game: Game,
    players: Players,
    to_move: PieceKind,
}

impl Session {
    pub fn new(config: GameConfig, players: Players) -> Result<Self, ConfigError> {
        Ok(Self::with_game(Game::new(config)?, players))
    }

    pub fn with_game(game: Game, players: Players) -> Self {
        Self {
            game,
            players,
            to_move: PieceKind::Prey,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Observers and other game-level settings.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut Players {
        &mut self.players
    }

    pub fn to_move(&self) -> PieceKind {
        self.to_move
    }

    /// Polls the seat to move and, if it answered, plays the move. Call from a
    /// frame or event loop; never blocks.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let side = self.to_move;
        let view = self.game.view();
        match self.players.poll(&view, side, now) {
            Poll::Waiting => TickOutcome::Waiting,
            Poll::Thinking(until) => TickOutcome::Thinking(until),
            Poll::Stuck => TickOutcome::Stuck(side),
            Poll::Proposed(mv) => self.play(mv),
        }
    }

    /// Plays `mv` for the side to move, bypassing the seats.
    pub fn play(&mut self, mv: Move) -> TickOutcome {
        let side = self.to_move;
        match self.game.propose_move(mv, side) {
            Ok(outcome) => {
                if !outcome.is_noop() {
                    self.to_move = side.other();
                }
                TickOutcome::Applied(outcome)
            }
            Err(e) => {
                if self.players.is_played_by_computer(side) {
                    warn!(
                        "{} ({}) proposed {}: {}",
                        self.players.name(side),
                        side,
                        mv,
                        e
                    );
                }
                TickOutcome::Rejected(e)
            }
        }
    }

    /// Sets up the next level; prey moves first again.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.game.reset()?;
        self.players.new_game();
        self.to_move = PieceKind::Prey;
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;

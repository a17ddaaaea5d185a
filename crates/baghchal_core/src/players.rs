//! Who is playing each side, and the thinking-time schedule for computer
//! seats.
//!
//! A computer seat never blocks: the first poll of a turn records a deadline
//! and later polls return [`Poll::Thinking`] until it passes. Callers drive
//! this from their frame or event loop, so the renderer keeps repainting while
//! a decision is pending.

use std::time::{Duration, Instant};

use crate::game::GameView;
use crate::types::{Move, PieceKind};

/// Trait implemented by everything that can choose moves: human input
/// adapters as well as automated strategies.
pub trait Player: Send {
    /// Chooses a move for `side` in `view`. `None` means no move is ready
    /// (a human who has not acted yet) or no legal move exists.
    fn propose(&mut self, view: &GameView, side: PieceKind) -> Option<Move>;

    /// Display name
    fn name(&self) -> &str;

    fn is_computer(&self) -> bool {
        true
    }

    /// Drop any per-level state.
    fn new_game(&mut self) {}
}

/// Moves arriving from input handling, handed over one at a time.
#[derive(Debug, Default)]
pub struct HumanPlayer {
    queued: Option<Move>,
}

impl HumanPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any move still waiting to be picked up.
    pub fn submit(&mut self, mv: Move) {
        self.queued = Some(mv);
    }
}

impl Player for HumanPlayer {
    fn propose(&mut self, _view: &GameView, _side: PieceKind) -> Option<Move> {
        self.queued.take()
    }

    fn name(&self) -> &str {
        "Human"
    }

    fn is_computer(&self) -> bool {
        false
    }

    fn new_game(&mut self) {
        self.queued = None;
    }
}

/// Result of polling the seat whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Poll {
    /// Waiting for human input.
    Waiting,
    /// A computer is "thinking" until the given instant.
    Thinking(Instant),
    Proposed(Move),
    /// A computer seat found nothing to play.
    Stuck,
}

struct Seat {
    user: HumanPlayer,
    strategy: Box<dyn Player>,
    computer: bool,
    ready_at: Option<Instant>,
}

impl Seat {
    fn new(strategy: Box<dyn Player>) -> Self {
        Seat {
            user: HumanPlayer::new(),
            strategy,
            computer: false,
            ready_at: None,
        }
    }
}

/// One seat per side, each switchable between human input and a strategy.
/// Both sides start human.
pub struct Players {
    seats: [Seat; 2],
    think_time: Duration,
}

impl Players {
    pub fn new(predator_strategy: Box<dyn Player>, prey_strategy: Box<dyn Player>) -> Self {
        Self {
            seats: [Seat::new(predator_strategy), Seat::new(prey_strategy)],
            think_time: Duration::ZERO,
        }
    }

    /// Both sides played by their strategies with no thinking delay, for
    /// headless play.
    pub fn computers(predator: Box<dyn Player>, prey: Box<dyn Player>) -> Self {
        let mut players = Self::new(predator, prey);
        players.set_played_by_computer(PieceKind::Predator, true);
        players.set_played_by_computer(PieceKind::Prey, true);
        players
    }

    pub fn with_think_time(mut self, think_time: Duration) -> Self {
        self.think_time = think_time;
        self
    }

    pub fn think_time(&self) -> Duration {
        self.think_time
    }

    pub fn set_played_by_computer(&mut self, side: PieceKind, computer: bool) {
        let seat = &mut self.seats[side.idx()];
        seat.computer = computer;
        seat.ready_at = None;
    }

    pub fn is_played_by_computer(&self, side: PieceKind) -> bool {
        self.seats[side.idx()].computer
    }

    pub fn name(&self, side: PieceKind) -> &str {
        let seat = &self.seats[side.idx()];
        if seat.computer {
            seat.strategy.name()
        } else {
            seat.user.name()
        }
    }

    /// Exchanges the strategies of the two seats, e.g. between the games of
    /// a match.
    pub fn swap_strategies(&mut self) {
        let [predator, prey] = &mut self.seats;
        std::mem::swap(&mut predator.strategy, &mut prey.strategy);
        predator.ready_at = None;
        prey.ready_at = None;
    }

    /// Hands a move from input handling to the human seat for `side`.
    pub fn submit(&mut self, side: PieceKind, mv: Move) {
        self.seats[side.idx()].user.submit(mv);
    }

    /// Asks the seat for `side` for a move without ever blocking.
    pub fn poll(&mut self, view: &GameView, side: PieceKind, now: Instant) -> Poll {
        let think_time = self.think_time;
        let seat = &mut self.seats[side.idx()];

        if !seat.computer {
            return match seat.user.propose(view, side) {
                Some(mv) => Poll::Proposed(mv),
                None => Poll::Waiting,
            };
        }

        let ready_at = *seat.ready_at.get_or_insert(now + think_time);
        if now < ready_at {
            return Poll::Thinking(ready_at);
        }
        seat.ready_at = None;
        match seat.strategy.propose(view, side) {
            Some(mv) => Poll::Proposed(mv),
            None => Poll::Stuck,
        }
    }

    /// Forgets pending deadlines and lets every player reset.
    pub fn new_game(&mut self) {
        for seat in &mut self.seats {
            seat.ready_at = None;
            seat.user.new_game();
            seat.strategy.new_game();
        }
    }
}

#[cfg(test)]
#[path = "players_tests.rs"]
mod players_tests;

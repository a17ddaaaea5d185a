pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod phase;
pub mod players;
pub mod rules;
pub mod session;
pub mod topology;
pub mod types;

// Re-export the rules engine surface
pub use board::Board;
pub use config::*;
pub use error::*;
pub use game::*;
pub use phase::Phase;
pub use players::*;
pub use rules::{
    CapturePolicy, MoveOutcome, Plan, capture_moves, execute, legal_moves, legal_moves_into,
    validate,
};
pub use session::*;
pub use topology::*;
pub use types::*;

use thiserror::Error;

use crate::types::{PieceKind, Position};

/// Why a proposed move or board edit was refused. Nothing is mutated when
/// one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{0} is outside the board")]
    OutOfBounds(Position),
    #[error("{0} is already occupied")]
    CellOccupied(Position),
    #[error("no {0} pieces left to place")]
    NoSupplyRemaining(PieceKind),
    #[error("{at} does not hold a {kind}")]
    NotMoversPiece { at: Position, kind: PieceKind },
    #[error("movement needs an origin")]
    MissingOrigin,
    #[error("no line joins {from} and {to}")]
    IllegalAdjacency { from: Position, to: Position },
    #[error("cannot jump from {from} to {to}")]
    CaptureBlocked { from: Position, to: Position },
    #[error("a capture is available and must be taken")]
    CaptureRequired,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

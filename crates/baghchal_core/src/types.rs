use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Predator,
    Prey,
}
impl PieceKind {
    pub const ALL: [PieceKind; 2] = [PieceKind::Predator, PieceKind::Prey];

    pub fn other(self) -> PieceKind {
        match self {
            PieceKind::Predator => PieceKind::Prey,
            PieceKind::Prey => PieceKind::Predator,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            PieceKind::Predator => 0,
            PieceKind::Prey => 1,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Predator => write!(f, "predator"),
            PieceKind::Prey => write!(f, "prey"),
        }
    }
}

/// A lattice intersection. Coordinates are signed so that offsetting past an
/// edge yields a value the topology can reject instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, step: Step) -> Position {
        Position::new(self.x + step.dx as i32, self.y + step.dy as i32)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the eight compass directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    pub dx: i8,
    pub dy: i8,
}

impl Step {
    pub const ALL: [Step; 8] = [
        Step { dx: -1, dy: -1 },
        Step { dx: 0, dy: -1 },
        Step { dx: 1, dy: -1 },
        Step { dx: -1, dy: 0 },
        Step { dx: 1, dy: 0 },
        Step { dx: -1, dy: 1 },
        Step { dx: 0, dy: 1 },
        Step { dx: 1, dy: 1 },
    ];

    /// Half of `ALL`: every line through a point is visited once when only
    /// these are followed.
    pub const FORWARD: [Step; 4] = [
        Step { dx: 1, dy: -1 },
        Step { dx: 1, dy: 0 },
        Step { dx: 1, dy: 1 },
        Step { dx: 0, dy: 1 },
    ];

    /// Returns the step between two points if they are exactly one
    /// king-move apart.
    pub fn between(from: Position, to: Position) -> Option<Step> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if (dx, dy) == (0, 0) || dx.abs() > 1 || dy.abs() > 1 {
            return None;
        }
        Some(Step {
            dx: dx as i8,
            dy: dy as i8,
        })
    }

    pub fn is_orthogonal(self) -> bool {
        self.dx == 0 || self.dy == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// `None` when a piece enters from the off-board supply.
    pub from: Option<Position>,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Self {
            from: Some(from),
            to,
        }
    }

    pub fn place(to: Position) -> Self {
        Self { from: None, to }
    }

    pub fn is_placement(&self) -> bool {
        self.from.is_none()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.from {
            Some(from) => write!(f, "{} -> {}", from, self.to),
            None => write!(f, "@{}", self.to),
        }
    }
}

//! Level configuration, loadable from TOML.
//!
//! ```toml
//! width = 5
//! height = 5
//! prey = 20
//! predator_start = [[0, 0], [4, 0], [0, 4], [4, 4]]
//! capture_policy = "optional"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::board::Board;
use crate::error::ConfigError;
use crate::rules::CapturePolicy;
use crate::topology::{STANDARD_SIZE, Topology};
use crate::types::{PieceKind, Position};

/// Prey pieces each level starts with.
pub const STANDARD_PREY: u32 = 20;

/// Largest accepted board edge.
pub const MAX_SIZE: u32 = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    /// Prey entering from the off-board supply during placement.
    pub prey: u32,
    /// Where the predators stand when a level starts.
    pub predator_start: Vec<(i32, i32)>,
    pub capture_policy: CapturePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        let edge = STANDARD_SIZE as i32 - 1;
        Self {
            width: STANDARD_SIZE,
            height: STANDARD_SIZE,
            prey: STANDARD_PREY,
            predator_start: vec![(0, 0), (edge, 0), (0, edge), (edge, edge)],
            capture_policy: CapturePolicy::Optional,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn topology(&self) -> Topology {
        Topology::new(self.width, self.height)
    }

    pub fn predator_start(&self) -> impl Iterator<Item = Position> + '_ {
        self.predator_start.iter().map(|&(x, y)| Position::new(x, y))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Setting up a board catches out-of-range and duplicate cells.
        self.setup_board().map(|_| ())
    }

    fn check_shape(&self) -> Result<(), ConfigError> {
        let in_range = 2..=MAX_SIZE;
        if !in_range.contains(&self.width) || !in_range.contains(&self.height) {
            return Err(ConfigError::Invalid(format!(
                "board must be between 2x2 and {}x{}, got {}x{}",
                MAX_SIZE, MAX_SIZE, self.width, self.height
            )));
        }
        if self.predator_start.is_empty() {
            return Err(ConfigError::Invalid("no predator start cells".into()));
        }
        if self.prey == 0 {
            return Err(ConfigError::Invalid("prey supply must not be empty".into()));
        }
        Ok(())
    }

    /// A board with the predators already standing on their start cells and
    /// the full prey supply in hand.
    pub fn setup_board(&self) -> Result<Board, ConfigError> {
        self.check_shape()?;
        let mut board = Board::new(self.topology(), self.predator_start.len() as u32, self.prey);
        for p in self.predator_start() {
            board
                .place(p, PieceKind::Predator)
                .map_err(|e| ConfigError::Invalid(format!("predator start: {}", e)))?;
        }
        let free = self.topology().cell_count() as u32 - self.predator_start.len() as u32;
        if self.prey > free {
            return Err(ConfigError::Invalid(format!(
                "{} prey do not fit on {} free cells",
                self.prey, free
            )));
        }
        Ok(board)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

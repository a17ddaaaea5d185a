//! Match runner for playing games between players

use baghchal_core::{GameConfig, PieceKind, Player, Players, Session, TickOutcome};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

use crate::referee::{Referee, Verdict, DEFAULT_CAPTURES_TO_WIN};
use crate::results::{GameRecord, MatchResult};

/// Configuration for a match, loadable from TOML:
///
/// ```toml
/// num_games = 20
/// max_moves = 150
///
/// [game]
/// capture_policy = "mandatory"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum plies per game before declaring draw
    pub max_moves: u32,
    /// Captures that end the game in the predator's favour
    pub captures_to_win: u32,
    /// Whether to swap sides each game
    pub alternate_sides: bool,
    /// Board and rules every game is played with
    pub game: GameConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 200,
            captures_to_win: DEFAULT_CAPTURES_TO_WIN,
            alternate_sides: true,
            game: GameConfig::default(),
        }
    }
}

impl MatchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, String> {
        let config: MatchConfig =
            toml::from_str(s).map_err(|e| format!("Failed to parse: {}", e))?;
        config.game.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        Self::from_toml_str(&contents)
    }

    fn referee(&self) -> Referee {
        Referee::new(self.captures_to_win, self.max_moves)
    }
}

/// Runs matches between two players
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two players. engine1 hunts first.
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(
        &self,
        engine1: Box<dyn Player>,
        engine2: Box<dyn Player>,
    ) -> Result<MatchResult, String> {
        let players = Players::computers(engine1, engine2);
        let mut session =
            Session::new(self.config.game.clone(), players).map_err(|e| e.to_string())?;
        let mut result = MatchResult::new();
        let mut engine1_predator = true;

        for game_num in 0..self.config.num_games {
            if game_num > 0 {
                if self.config.alternate_sides {
                    session.players_mut().swap_strategies();
                    engine1_predator = !engine1_predator;
                }
                session.reset().map_err(|e| e.to_string())?;
            }

            let record = self.play_game(&mut session);
            let side = if engine1_predator { "P" } else { "G" };
            let outcome = match record.verdict {
                Verdict::PredatorWins => "predator",
                Verdict::PreyWins => "prey",
                Verdict::Draw => "draw",
            };
            result.record(engine1_predator, record);

            info!(
                "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                game_num + 1,
                self.config.num_games,
                outcome,
                side,
                result.wins,
                result.losses,
                result.draws
            );
        }

        Ok(result)
    }

    /// Play a single game from the session's current position
    fn play_game(&self, session: &mut Session) -> GameRecord {
        let referee = self.config.referee();
        let mut plies = 0;

        let verdict = loop {
            let side = session.to_move();
            if let Some(verdict) = referee.judge(&session.game().view(), side, plies) {
                break verdict;
            }

            match session.tick(Instant::now()) {
                TickOutcome::Applied(outcome) => {
                    debug!("ply {}: {} {:?}", plies, side, outcome.plan);
                }
                TickOutcome::Rejected(e) => {
                    warn!("{} forfeits after an illegal move: {}", side, e);
                    break Verdict::forfeit(side);
                }
                TickOutcome::Stuck(side) => {
                    warn!("{} forfeits: no move proposed", side);
                    break Verdict::forfeit(side);
                }
                // Zero think time; counted toward the cap in case a seat
                // never answers
                TickOutcome::Waiting | TickOutcome::Thinking(_) => {}
            }
            plies += 1;
        };

        let players = session.players();
        GameRecord {
            predator: players.name(PieceKind::Predator).to_string(),
            prey: players.name(PieceKind::Prey).to_string(),
            verdict,
            plies,
            captures: session.game().captures(),
        }
    }
}

/// Quick utility to run a single match on the standard board
pub fn quick_match(
    engine1: Box<dyn Player>,
    engine2: Box<dyn Player>,
    num_games: u32,
) -> Result<MatchResult, String> {
    let config = MatchConfig {
        num_games,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;

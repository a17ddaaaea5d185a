//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::match_runner::MatchConfig;
use crate::referee::Verdict;

/// One finished game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub predator: String,
    pub prey: String,
    pub verdict: Verdict,
    pub plies: u32,
    pub captures: u32,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    /// Counted from engine1's perspective
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Counted by side, whoever was playing it
    pub predator_wins: u32,
    pub prey_wins: u32,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }

    /// Adds a game in which engine1 played the predator iff
    /// `engine1_predator`.
    pub fn record(&mut self, engine1_predator: bool, game: GameRecord) {
        match game.verdict {
            Verdict::PredatorWins => self.predator_wins += 1,
            Verdict::PreyWins => self.prey_wins += 1,
            Verdict::Draw => {}
        }
        match (game.verdict, engine1_predator) {
            (Verdict::Draw, _) => self.draws += 1,
            (Verdict::PredatorWins, true) | (Verdict::PreyWins, false) => self.wins += 1,
            _ => self.losses += 1,
        }
        self.games.push(game);
    }

    /// Mean plies per game
    pub fn average_length(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        self.games.iter().map(|g| g.plies as f64).sum::<f64>() / self.games.len() as f64
    }
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating players
    pub participants: Vec<String>,
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: MatchConfig,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: MatchConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, {} captures to win, draw after {} plies, {}x{} board\n\n",
            self.config.num_games,
            self.config.captures_to_win,
            self.config.max_moves,
            self.config.game.width,
            self.config.game.height
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<16} vs {:<16} {:>5}-{:<5}-{:<5} {:>9} {:>9} {:>7}\n",
            "Engine 1", "Engine 2", "W", "L", "D", "Predator", "Prey", "Plies"
        ));
        report.push_str(&"-".repeat(84));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<16} vs {:<16} {:>5}-{:<5}-{:<5} {:>9} {:>9} {:>7.1}\n",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws,
                entry.result.predator_wins,
                entry.result.prey_wins,
                entry.result.average_length()
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;

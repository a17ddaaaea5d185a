//! Tournament Runner for Bagh-Chal players
//!
//! This crate provides infrastructure for:
//! - Judging finished games (capture threshold, blocked sides, move cap)
//! - Running matches between players, alternating who hunts
//! - Saving results as JSON and generating reports
//!
//! # Usage
//!
//! ```bash
//! # Greedy predator against a random prey, 20 games
//! cargo run -p tournament -- match greedy random --games 20
//!
//! # Match settings and board from a TOML file, results to JSON
//! RUST_LOG=info cargo run -p tournament -- match greedy greedy --config match.toml --out results.json
//! ```

mod match_runner;
mod referee;
mod results;

pub use match_runner::*;
pub use referee::*;
pub use results::*;

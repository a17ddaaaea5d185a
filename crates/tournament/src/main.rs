//! Tournament CLI
//!
//! Run matches between Bagh-Chal players and save the results.

use baghchal_core::Player;
use greedy_player::GreedyPlayer;
use log::{error, info};
use random_player::RandomPlayer;
use std::env;
use std::path::PathBuf;
use tournament::{MatchConfig, MatchRunner, TournamentResults};

fn print_usage() {
    println!("Bagh-Chal Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--max-moves M] [--config FILE] [--out FILE]");
    println!();
    println!("engine1 plays the predator in the first game; sides alternate unless");
    println!("the config sets alternate_sides = false.");
    println!();
    println!("Engines:");
    println!("  random        - Uniformly random legal moves");
    println!("  random:SEED   - Random with a fixed seed");
    println!("  greedy        - One-ply capture and mobility evaluation");
    println!();
    println!("Examples:");
    println!("  tournament match greedy random --games 20");
    println!("  RUST_LOG=info tournament match greedy greedy --config match.toml --out results.json");
}

fn create_engine(spec: &str) -> Result<Box<dyn Player>, String> {
    let parts: Vec<&str> = spec.split(':').collect();
    match parts[0].to_lowercase().as_str() {
        "greedy" => Ok(Box::new(GreedyPlayer::new())),
        "random" | "rand" => match parts.get(1) {
            Some(seed) => seed
                .parse()
                .map(|seed| Box::new(RandomPlayer::seeded(seed)) as Box<dyn Player>)
                .map_err(|_| format!("Invalid seed: {}", seed)),
            None => Ok(Box::new(RandomPlayer::new())),
        },
        _ => Err(format!("Unknown engine: {}", spec)),
    }
}

fn run_match(args: &[String]) -> Result<(), String> {
    if args.len() < 2 {
        print_usage();
        return Err("match requires two engine specifications".into());
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    // Parse optional arguments
    let mut num_games: Option<u32> = None;
    let mut max_moves: Option<u32> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut out_path: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        let value = args.get(i + 1);
        match (args[i].as_str(), value) {
            ("--games" | "-g", Some(v)) => {
                num_games = Some(v.parse().map_err(|_| format!("Invalid game count: {}", v))?);
                i += 1;
            }
            ("--max-moves" | "-m", Some(v)) => {
                max_moves = Some(v.parse().map_err(|_| format!("Invalid move cap: {}", v))?);
                i += 1;
            }
            ("--config" | "-c", Some(v)) => {
                config_path = Some(PathBuf::from(v));
                i += 1;
            }
            ("--out" | "-o", Some(v)) => {
                out_path = Some(PathBuf::from(v));
                i += 1;
            }
            (flag, _) => return Err(format!("Unexpected argument: {}", flag)),
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => MatchConfig::load(&path)?,
        None => MatchConfig::default(),
    };
    if let Some(n) = num_games {
        config.num_games = n;
    }
    if let Some(m) = max_moves {
        config.max_moves = m;
    }

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, Max plies: {}, Captures to win: {}",
        config.num_games, config.max_moves, config.captures_to_win
    );
    println!();

    let engine1 = create_engine(engine1_spec)?;
    let engine2 = create_engine(engine2_spec)?;

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(engine1, engine2)?;

    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!(
        "Predator won {}, prey won {}, {:.1} plies per game",
        result.predator_wins,
        result.prey_wins,
        result.average_length()
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    println!();

    let mut results = TournamentResults::new(
        &format!("{} vs {}", engine1_spec, engine2_spec),
        vec![engine1_spec.to_string(), engine2_spec.to_string()],
        config,
    );
    results.add_match(engine1_spec, engine2_spec, result);
    results.print_report();

    if let Some(path) = out_path {
        results.save(&path)?;
        info!("results written to {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let outcome = match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            print_usage();
            Err(format!("Unknown command: {}", args[1]))
        }
    };

    if let Err(e) = outcome {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Standalone oracle-vs-oracle game runner.
//!
//! Run with:
//! `cargo run --release --bin selfplay`
//! `cargo run --release --bin selfplay -- --verbose`
//! `cargo run --release --bin selfplay -- --uci /path/to/stockfish`
//!
//! `CHESS_RULES_SEED` fixes the random opening and the random oracles.

use chess_rules::oracle::oracle_random::RandomOracle;
use chess_rules::oracle::oracle_trait::MoveOracle;
use chess_rules::oracle::oracle_uci_process::{UciOracleConfig, UciProcessOracle};
use chess_rules::utils::oracle_match_harness::{play_oracle_match, MatchConfig};
use chess_rules::utils::render_game_state::render_game_state;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    let uci_path = args
        .iter()
        .position(|a| a == "--uci")
        .and_then(|idx| args.get(idx + 1))
        .cloned();

    let seed = match std::env::var("CHESS_RULES_SEED") {
        Ok(value) => value.parse::<u64>()?,
        Err(_) => rand::random::<u64>(),
    };

    let mut white: Box<dyn MoveOracle> = match uci_path {
        Some(path) => Box::new(UciProcessOracle::new(UciOracleConfig {
            path: path.into(),
            ..UciOracleConfig::default()
        })),
        None => Box::new(RandomOracle::with_seed(seed)),
    };
    let mut black = RandomOracle::with_seed(seed.wrapping_add(1));

    let result = play_oracle_match(white.as_mut(), &mut black, seed, MatchConfig::default())?;

    if verbose {
        for line in &result.info_lines {
            eprintln!("{line}");
        }
        println!("opening: {}", result.opening_moves_lan.join(" "));
        println!("moves: {}", result.played_moves_lan.join(" "));
    }
    println!("{}\n", render_game_state(&result.final_state));
    println!("seed={seed} {}", result.report());
    Ok(())
}

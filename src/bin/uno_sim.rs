//! Uno simulator CLI - plays seeded games between automated policies.

use clap::{Parser, ValueEnum};
use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::{info, warn};

use uno_engine::{
    run_to_completion, FirstPlayable, GameRng, GameResult, Policy, UniformRandom, UnoConfig,
    UnoGame,
};

#[derive(Parser)]
#[command(name = "uno_sim")]
#[command(about = "Simulate Uno games between automated players")]
struct Args {
    /// Number of players per game (2-15)
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Base seed; game `i` uses `seed + i`
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Deal from the fixed, unshuffled deck order
    #[arg(long)]
    no_shuffle: bool,

    /// Policy for every seat
    #[arg(long, default_value = "first-playable")]
    policy: PolicyType,

    /// Give up on a game after this many actions
    #[arg(long, default_value = "10000")]
    max_turns: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum PolicyType {
    FirstPlayable,
    Random,
}

impl PolicyType {
    fn build(&self) -> Box<dyn Policy> {
        match self {
            PolicyType::FirstPlayable => Box::new(FirstPlayable),
            PolicyType::Random => Box::new(UniformRandom),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let policies = vec![args.policy.build()];
    let mut wins: FxHashMap<u8, u32> = FxHashMap::default();
    let mut unfinished = 0u32;
    let start = Instant::now();

    for i in 0..args.games {
        let seed = args.seed.wrapping_add(u64::from(i));
        let config = UnoConfig::new(args.players)
            .with_shuffle(!args.no_shuffle)
            .with_seed(seed);
        let mut game = UnoGame::new(config)?;
        let mut rng = GameRng::new(seed).for_context("policy");

        match run_to_completion(&mut game, &policies, &mut rng, args.max_turns)? {
            GameResult::Winner(winner) => {
                if args.games == 1 {
                    println!("{winner} wins!");
                }
                info!(game = i, %winner, turns = game.turn_number() - 1, "game finished");
                *wins.entry(winner.0).or_default() += 1;
            }
            GameResult::TurnLimit => {
                warn!(game = i, max_turns = args.max_turns, "game hit the turn limit");
                unfinished += 1;
            }
        }
    }

    if args.games > 1 {
        println!(
            "{} games, {} players, policy {:?}, {:.2?}",
            args.games,
            args.players,
            args.policy,
            start.elapsed()
        );
        let mut seats: Vec<_> = wins.into_iter().collect();
        seats.sort_unstable();
        for (seat, count) in seats {
            println!("  Player {seat}: {count} wins");
        }
        if unfinished > 0 {
            println!("  unfinished: {unfinished}");
        }
    }

    Ok(())
}

//! Interactive terminal match.
//!
//! Options: --difficulty, --rounds, --seed, --name

use clap::Parser;
use rochambeau::config::Config;
use rochambeau::opponent::Difficulty;
use rochambeau::opponent::Opponent;
use rochambeau::play::Table;

#[derive(Parser)]
#[command(about = "play rock paper scissors against an adaptive opponent")]
struct Args {
    /// Strategy tier of the opponent.
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,
    /// Rounds per match.
    #[arg(long)]
    rounds: Option<usize>,
    /// Seed the opponent's randomness for reproducible matches.
    #[arg(long)]
    seed: Option<u64>,
    /// Name recorded on the leaderboard.
    #[arg(long, default_value = "anonymous")]
    name: String,
}

fn main() -> anyhow::Result<()> {
    rochambeau::log();
    let args = Args::parse();
    let config = Config::load("config.json");
    let difficulty = args.difficulty.unwrap_or(config.opponent.difficulty);
    let rounds = args.rounds.unwrap_or(config.rules.rounds_per_game);
    let opponent = match args.seed {
        Some(seed) => Opponent::seeded(difficulty, seed),
        None => Opponent::new(difficulty),
    }
    .window(config.opponent.frequency_window);
    Table::sit(args.name, rounds, opponent).play()
}

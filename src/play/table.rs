/// One seated match: a human on the prompt against the adaptive engine.
///
/// Round discipline mirrors the engine's contract: propose, reveal,
/// resolve, observe, score. Aggregate statistics and the leaderboard are
/// loaded at sit-down and written back when the match ends.
pub struct Table {
    name: String,
    rounds: usize,
    opponent: Opponent,
    score: Scoreboard,
    stats: Statistics,
}

impl Table {
    pub fn sit(name: String, rounds: usize, opponent: Opponent) -> Self {
        let stats = Statistics::load();
        let opponent = opponent.recall(&stats.move_history);
        Self {
            name,
            rounds,
            opponent,
            score: Scoreboard::default(),
            stats,
        }
    }

    pub fn play(mut self) -> anyhow::Result<()> {
        self.stats.new_game();
        log::info!(
            "match start: {} rounds vs {} opponent",
            self.rounds,
            self.opponent.difficulty()
        );
        while self.score.round() < self.rounds {
            match self.ask()? {
                Some(human) => self.next_round(human),
                None => break,
            }
        }
        self.settle()
    }

    fn next_round(&mut self, human: Move) {
        let play = self.opponent.propose();
        let result = RoundResult::from((self.score.round(), human, play));
        self.report(&result);
        self.opponent.observe(play, human);
        self.stats.record(result.outcome(), human);
        self.score.apply(result);
    }

    /// Prompt for the human's throw. None means they quit early.
    fn ask(&self) -> anyhow::Result<Option<Move>> {
        let choice = Select::new()
            .with_prompt(format!("round {} of {}", self.score.round() + 1, self.rounds))
            .items(&["rock", "paper", "scissors", "quit"])
            .default(0)
            .interact()?;
        Ok(match choice {
            0..=2 => Some(Move::from(choice as u8)),
            _ => None,
        })
    }

    fn report(&self, result: &RoundResult) {
        let verdict = match result.outcome() {
            Outcome::PlayerWin => "you win".green(),
            Outcome::OpponentWin => "you lose".red(),
            Outcome::Draw => "draw".yellow(),
        };
        println!(
            "  {} vs {}  ->  {}",
            result.player().to_string().bold(),
            result.opponent(),
            verdict
        );
    }

    fn settle(self) -> anyhow::Result<()> {
        println!(
            "\nfinal score {}  (win rate {:.0}%)",
            self.score.to_string().bold(),
            self.stats.win_rate()
        );
        if let Some(lean) = self.opponent.plays().dominant(self.score.round()) {
            log::info!("opponent threw {} most often", lean);
        }
        let mut board = Leaderboard::load();
        board.submit(Entry::from((self.name, self.score.player(), self.score.round())));
        board.save()?;
        self.stats.save()?;
        Ok(())
    }
}

use crate::game::moves::Move;
use crate::game::outcome::Outcome;
use crate::game::round::RoundResult;
use crate::game::score::Scoreboard;
use crate::game::stats::Statistics;
use crate::opponent::Opponent;
use crate::save::Disk;
use crate::save::Entry;
use crate::save::Leaderboard;
use colored::Colorize;
use dialoguer::Select;

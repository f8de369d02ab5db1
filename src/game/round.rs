use super::moves::Move;
use super::outcome::Outcome;
use serde::Deserialize;
use serde::Serialize;

/// Immutable record of one played round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundResult {
    round: usize,
    player: Move,
    opponent: Move,
    outcome: Outcome,
    timestamp: u64,
}

impl From<(usize, Move, Move)> for RoundResult {
    fn from((round, player, opponent): (usize, Move, Move)) -> Self {
        Self {
            round,
            player,
            opponent,
            outcome: Outcome::from((player, opponent)),
            timestamp: crate::clock(),
        }
    }
}

impl RoundResult {
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn player(&self) -> Move {
        self.player
    }
    pub fn opponent(&self) -> Move {
        self.opponent
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "round {:<4} {:<10} vs {:<10} {}",
            self.round,
            self.player.to_string(),
            self.opponent.to_string(),
            self.outcome
        )
    }
}

use super::moves::Move;
use super::outcome::Outcome;
use serde::Deserialize;
use serde::Serialize;

/// Most recent moves kept in the persisted log.
const MOVE_LOG_CAP: usize = 100;

/// Aggregate statistics persisted across sessions.
///
/// The move log is bounded to the most recent [MOVE_LOG_CAP] entries with
/// oldest-first eviction, and can seed an opponent engine on restore.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub win_streak: u32,
    pub best_streak: u32,
    pub move_history: Vec<Move>,
}

impl Statistics {
    /// Fold one round into the aggregate. A draw leaves the streak alone.
    pub fn record(&mut self, outcome: Outcome, player: Move) {
        match outcome {
            Outcome::PlayerWin => {
                self.wins += 1;
                self.win_streak += 1;
            }
            Outcome::OpponentWin => {
                self.losses += 1;
                self.win_streak = 0;
            }
            Outcome::Draw => self.draws += 1,
        }
        self.best_streak = self.best_streak.max(self.win_streak);
        self.move_history.push(player);
        if self.move_history.len() > MOVE_LOG_CAP {
            self.move_history.remove(0);
        }
    }

    pub fn new_game(&mut self) {
        self.total_games += 1;
    }

    pub fn win_rate(&self) -> crate::Probability {
        let total = self.wins + self.losses + self.draws;
        match total {
            0 => 0.,
            _ => 100. * self.wins as crate::Probability / total as crate::Probability,
        }
    }
}

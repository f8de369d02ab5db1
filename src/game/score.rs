use super::outcome::Outcome;
use super::round::RoundResult;

/// Per-match score state: tallies, round counter, and the round log.
///
/// One match at a time; reset between games.
#[derive(Debug, Default)]
pub struct Scoreboard {
    player: u32,
    opponent: u32,
    rounds: Vec<RoundResult>,
}

impl Scoreboard {
    pub fn apply(&mut self, result: RoundResult) {
        match result.outcome() {
            Outcome::PlayerWin => self.player += 1,
            Outcome::OpponentWin => self.opponent += 1,
            Outcome::Draw => {}
        }
        self.rounds.push(result);
    }

    pub fn reset(&mut self) {
        self.player = 0;
        self.opponent = 0;
        self.rounds.clear();
    }

    /// Index the next round should carry.
    pub fn round(&self) -> usize {
        self.rounds.len()
    }
    pub fn player(&self) -> u32 {
        self.player
    }
    pub fn opponent(&self) -> u32 {
        self.opponent
    }
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} - {}", self.player, self.opponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::moves::Move;

    #[test]
    fn tallies_and_round_counter() {
        let mut score = Scoreboard::default();
        score.apply(RoundResult::from((0, Move::Rock, Move::Scissors)));
        score.apply(RoundResult::from((1, Move::Rock, Move::Paper)));
        score.apply(RoundResult::from((2, Move::Rock, Move::Rock)));
        assert!(score.player() == 1);
        assert!(score.opponent() == 1);
        assert!(score.round() == 3);
        score.reset();
        assert!(score.round() == 0);
        assert!(score.player() == 0);
    }
}

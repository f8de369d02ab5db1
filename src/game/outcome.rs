use super::moves::Move;
use serde::Deserialize;
use serde::Serialize;

/// Result of a single round from the human player's perspective.
///
/// Total over all nine move pairs. Stateless; construct from the pair.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWin,
    OpponentWin,
    Draw,
}

impl From<(Move, Move)> for Outcome {
    fn from((player, opponent): (Move, Move)) -> Self {
        if player == opponent {
            Outcome::Draw
        } else if player.beats(&opponent) {
            Outcome::PlayerWin
        } else {
            Outcome::OpponentWin
        }
    }
}

impl Outcome {
    /// The same round seen from the other side of the table.
    pub fn flip(&self) -> Outcome {
        match self {
            Outcome::PlayerWin => Outcome::OpponentWin,
            Outcome::OpponentWin => Outcome::PlayerWin,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Outcome::PlayerWin => "win",
                Outcome::OpponentWin => "loss",
                Outcome::Draw => "draw",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_and_symmetric() {
        for a in Move::ALL {
            for b in Move::ALL {
                assert!(Outcome::from((a, b)) == Outcome::from((b, a)).flip());
            }
        }
    }

    #[test]
    fn dominance_cycle() {
        assert!(Outcome::from((Move::Rock, Move::Scissors)) == Outcome::PlayerWin);
        assert!(Outcome::from((Move::Scissors, Move::Paper)) == Outcome::PlayerWin);
        assert!(Outcome::from((Move::Paper, Move::Rock)) == Outcome::PlayerWin);
    }

    #[test]
    fn equal_moves_draw() {
        for m in Move::ALL {
            assert!(Outcome::from((m, m)) == Outcome::Draw);
        }
    }
}

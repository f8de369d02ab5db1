use serde::Deserialize;
use serde::Serialize;

/// The three throws. Dominance is cyclic: Rock > Scissors > Paper > Rock.
///
/// Declaration order doubles as the universal tie-break for every
/// "most frequent" or "most likely" selection in the crate, which keeps
/// prediction behavior reproducible given identical history.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    #[default]
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move that defeats this one.
    pub fn counter(&self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    pub fn beats(&self, other: &Move) -> bool {
        other.counter() == *self
    }
}

/// u8 isomorphism
impl From<u8> for Move {
    fn from(n: u8) -> Move {
        match n {
            0 => Move::Rock,
            1 => Move::Paper,
            2 => Move::Scissors,
            _ => panic!("Invalid move u8: {}", n),
        }
    }
}
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

/// str isomorphism
impl From<&str> for Move {
    fn from(s: &str) -> Self {
        match s {
            "rock" => Move::Rock,
            "paper" => Move::Paper,
            "scissors" => Move::Scissors,
            _ => panic!("Invalid move str: {}", s),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Move::Rock => "rock",
                Move::Paper => "paper",
                Move::Scissors => "scissors",
            }
        )
    }
}

impl crate::Arbitrary for Move {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..3u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for m in Move::ALL {
            assert!(m == Move::from(u8::from(m)));
        }
    }

    #[test]
    fn bijective_str() {
        for m in Move::ALL {
            assert!(m == Move::from(m.to_string().as_str()));
        }
    }

    #[test]
    fn counter_is_cyclic() {
        for m in Move::ALL {
            assert!(m == m.counter().counter().counter());
        }
    }

    #[test]
    fn each_move_beats_exactly_one() {
        for m in Move::ALL {
            assert!(1 == Move::ALL.iter().filter(|o| m.beats(o)).count());
            assert!(m.counter().beats(&m));
            assert!(!m.beats(&m));
        }
    }
}

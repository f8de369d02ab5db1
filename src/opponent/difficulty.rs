use serde::Deserialize;
use serde::Serialize;

/// Strategy tier. Fixed for the life of a session unless explicitly
/// reconfigured; the learned models persist across tier changes.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Difficulty {
    /// Uniform random, no prediction.
    Easy,
    /// Pattern recall with frequency-analysis fallback.
    #[default]
    Medium,
    /// Markov-chain prediction with pattern fallback.
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Difficulty::Easy => "easy",
                Difficulty::Medium => "medium",
                Difficulty::Hard => "hard",
            }
        )
    }
}

impl std::str::FromStr for Difficulty {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(anyhow::anyhow!("unknown difficulty: {}", s)),
        }
    }
}

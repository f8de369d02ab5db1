//! The adaptive opponent.
//!
//! The engine never guesses at random unless it has to: it predicts the
//! human's next move from whatever structure the history supports, then
//! plays the counter. Prediction layers degrade gracefully:
//! Markov chain -> pattern recall -> frequency analysis -> uniform random.
//! All models learn online after every round, independent of the active
//! difficulty, so switching tiers mid-session discards nothing.

pub use difficulty::Difficulty;
pub use engine::Opponent;
pub use history::MoveHistory;
pub use markov::MarkovModel;
pub use pattern::PatternMemory;

pub mod difficulty;
pub mod engine;
pub mod history;
pub mod markov;
pub mod pattern;

//! Moves, outcomes, and match bookkeeping.
//!
//! The move type is a plain value; dominance lives in [Outcome] and
//! counter-move logic in [Move::counter], so both stay testable in isolation.

pub use moves::Move;
pub use outcome::Outcome;
pub use round::RoundResult;
pub use score::Scoreboard;
pub use stats::Statistics;

pub mod moves;
pub mod outcome;
pub mod round;
pub mod score;
pub mod stats;

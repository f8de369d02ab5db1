use super::history::MoveHistory;
use crate::game::moves::Move;
use std::collections::HashMap;

/// Consecutive moves that form a recall key.
pub const PATTERN_LEN: usize = 4;

/// Recall table from a fixed-length move sequence to the move that
/// historically followed it.
///
/// Recording and lookup use the same key length, so a hit against the
/// current trailing pattern is a genuine prediction of the next move.
/// Later occurrences of a pattern overwrite earlier ones; recency wins.
#[derive(Debug, Default, Clone)]
pub struct PatternMemory {
    seen: HashMap<[Move; PATTERN_LEN], Move>,
}

impl PatternMemory {
    /// Record the latest move against the pattern that preceded it.
    /// No-op until the history holds a full pattern plus its successor.
    pub fn record(&mut self, history: &MoveHistory) {
        let tail = history.trailing(PATTERN_LEN + 1);
        if let [pattern @ .., followup] = tail.as_slice() {
            let key: [Move; PATTERN_LEN] = pattern.try_into().expect("pattern length");
            self.seen.insert(key, *followup);
        }
    }

    /// Predict the next move from the current trailing pattern, if seen.
    pub fn recall(&self, history: &MoveHistory) -> Option<Move> {
        let tail = history.trailing(PATTERN_LEN);
        let key: [Move; PATTERN_LEN] = tail.as_slice().try_into().ok()?;
        self.seen.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, key: [Move; PATTERN_LEN]) -> Option<Move> {
        self.seen.get(&key).copied()
    }
}

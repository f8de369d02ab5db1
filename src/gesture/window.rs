use super::reading::Reading;
use crate::game::moves::Move;
use std::collections::VecDeque;

/// Fixed-capacity FIFO of recent per-frame readings.
///
/// A decision is available only once the window is full: the most frequent
/// non-Unknown reading, and only if its count meets the confidence floor.
/// Ties break by move declaration order. This rejects single-frame flicker
/// while still converging within one window of a steadily held pose.
#[derive(Debug, Clone)]
pub struct VoteWindow {
    votes: VecDeque<Reading>,
    capacity: usize,
    confidence: usize,
}

impl VoteWindow {
    /// Confidence floor must leave the majority reachable: 0 < confidence < capacity.
    pub fn new(capacity: usize, confidence: usize) -> Self {
        assert!(0 < confidence && confidence < capacity);
        Self {
            votes: VecDeque::with_capacity(capacity),
            capacity,
            confidence,
        }
    }

    pub fn push(&mut self, vote: Reading) {
        if self.votes.len() == self.capacity {
            self.votes.pop_front();
        }
        self.votes.push_back(vote);
    }

    pub fn clear(&mut self) {
        self.votes.clear();
    }

    pub fn is_full(&self) -> bool {
        self.votes.len() == self.capacity
    }

    fn count(&self, gesture: Move) -> usize {
        self.votes
            .iter()
            .filter(|v| **v == Reading::Gesture(gesture))
            .count()
    }

    /// Majority vote over the full window, gated by the confidence floor.
    pub fn decision(&self) -> Option<Move> {
        if !self.is_full() {
            return None;
        }
        Move::ALL
            .into_iter()
            .map(|m| (m, self.count(m)))
            .max_by_key(|(m, n)| (*n, std::cmp::Reverse(*m)))
            .filter(|(_, n)| *n >= self.confidence)
            .map(|(m, _)| m)
    }
}

impl Default for VoteWindow {
    fn default() -> Self {
        Self::new(5, 3)
    }
}

use crate::game::moves::Move;
use std::collections::VecDeque;

/// Bounded, append-only log of past moves, oldest evicted first.
///
/// Feeds both frequency counting and Markov transition updates.
#[derive(Debug, Clone)]
pub struct MoveHistory {
    moves: VecDeque<Move>,
    capacity: usize,
}

impl MoveHistory {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0);
        Self {
            moves: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, m: Move) {
        if self.moves.len() == self.capacity {
            self.moves.pop_front();
        }
        self.moves.push_back(m);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn last(&self) -> Option<Move> {
        self.moves.back().copied()
    }

    /// The move before the most recent one.
    pub fn previous(&self) -> Option<Move> {
        self.moves.iter().rev().nth(1).copied()
    }

    /// The trailing n moves, oldest first. Empty if fewer than n seen.
    pub fn trailing(&self, n: usize) -> Vec<Move> {
        match self.moves.len() < n {
            true => vec![],
            false => self.moves.iter().skip(self.moves.len() - n).copied().collect(),
        }
    }

    /// The most frequent move among the trailing n, ties broken by
    /// declaration order.
    pub fn dominant(&self, n: usize) -> Option<Move> {
        let recent = self.moves.iter().rev().take(n);
        let counts = recent.fold([0usize; 3], |mut counts, m| {
            counts[u8::from(*m) as usize] += 1;
            counts
        });
        Move::ALL
            .into_iter()
            .max_by_key(|m| (counts[u8::from(*m) as usize], std::cmp::Reverse(*m)))
            .filter(|_| !self.moves.is_empty())
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new(100)
    }
}

impl FromIterator<Move> for MoveHistory {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut history = Self::default();
        for m in iter {
            history.push(m);
        }
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let mut history = MoveHistory::new(3);
        for m in [Move::Rock, Move::Paper, Move::Scissors, Move::Rock] {
            history.push(m);
        }
        assert!(history.len() == 3);
        assert!(history.trailing(3) == vec![Move::Paper, Move::Scissors, Move::Rock]);
    }

    #[test]
    fn previous_is_second_to_last() {
        let history: MoveHistory = [Move::Rock, Move::Paper].into_iter().collect();
        assert!(history.last() == Some(Move::Paper));
        assert!(history.previous() == Some(Move::Rock));
    }

    #[test]
    fn trailing_requires_enough_entries() {
        let history: MoveHistory = [Move::Rock, Move::Paper].into_iter().collect();
        assert!(history.trailing(3).is_empty());
        assert!(history.trailing(2) == vec![Move::Rock, Move::Paper]);
    }

    #[test]
    fn dominant_counts_recent_window() {
        let history: MoveHistory = [
            Move::Scissors,
            Move::Scissors,
            Move::Scissors,
            Move::Rock,
            Move::Rock,
            Move::Paper,
        ]
        .into_iter()
        .collect();
        assert!(history.dominant(3) == Some(Move::Rock));
        assert!(history.dominant(6) == Some(Move::Scissors));
    }

    #[test]
    fn dominant_ties_break_by_declaration_order() {
        let history: MoveHistory = [Move::Scissors, Move::Rock].into_iter().collect();
        assert!(history.dominant(10) == Some(Move::Rock));
        assert!(MoveHistory::default().dominant(10).is_none());
    }
}

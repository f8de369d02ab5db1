use crate::game::moves::Move;
use crate::Probability;

/// First-order transition model over the human's move sequence.
///
/// Counts start at 1 for every (prev, next) pair, so no transition ever
/// carries zero probability and prediction is defined from the first
/// observation. Never reset mid-session.
#[derive(Debug, Clone)]
pub struct MarkovModel {
    counts: [[u32; 3]; 3],
}

impl Default for MarkovModel {
    fn default() -> Self {
        Self { counts: [[1; 3]; 3] }
    }
}

impl MarkovModel {
    pub fn observe(&mut self, prev: Move, next: Move) {
        self.counts[u8::from(prev) as usize][u8::from(next) as usize] += 1;
    }

    pub fn weight(&self, prev: Move, next: Move) -> u32 {
        self.counts[u8::from(prev) as usize][u8::from(next) as usize]
    }

    pub fn probability(&self, prev: Move, next: Move) -> Probability {
        let row = &self.counts[u8::from(prev) as usize];
        self.weight(prev, next) as Probability / row.iter().sum::<u32>() as Probability
    }

    /// Most likely successor of prev, ties broken by declaration order.
    pub fn predict(&self, prev: Move) -> Move {
        Move::ALL
            .into_iter()
            .max_by_key(|next| (self.weight(prev, *next), std::cmp::Reverse(*next)))
            .expect("nonempty move set")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Move::*;

    /// feed consecutive pairs of a move sequence
    fn observe_all(model: &mut MarkovModel, sequence: &[Move]) {
        for pair in sequence.windows(2) {
            model.observe(pair[0], pair[1]);
        }
    }

    #[test]
    fn laplace_smoothing_leaves_no_zero_transition() {
        let model = MarkovModel::default();
        for prev in Move::ALL {
            for next in Move::ALL {
                assert!(model.weight(prev, next) == 1);
                assert!(model.probability(prev, next) > 0.);
            }
        }
    }

    #[test]
    fn learns_repeated_transition() {
        let mut model = MarkovModel::default();
        observe_all(&mut model, &[Rock, Rock, Paper, Rock, Rock, Paper]);
        assert!(model.weight(Rock, Paper) > model.weight(Rock, Scissors));
        assert!(model.predict(Rock) == Rock); // Rock->Rock seen twice as well
        observe_all(&mut model, &[Rock, Paper]);
        assert!(model.predict(Rock) == Paper);
    }

    #[test]
    fn untrained_prediction_is_deterministic() {
        assert!(MarkovModel::default().predict(Scissors) == Rock);
    }

    #[test]
    fn rows_normalize() {
        let mut model = MarkovModel::default();
        observe_all(&mut model, &[Paper, Scissors, Paper, Rock]);
        for prev in Move::ALL {
            let total: Probability = Move::ALL
                .into_iter()
                .map(|next| model.probability(prev, next))
                .sum();
            assert!((total - 1.).abs() < 1e-6);
        }
    }
}

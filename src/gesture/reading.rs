use super::fingers::FingerState;
use crate::game::moves::Move;

/// Classification of a single frame. Inherently noisy; only the vote
/// window turns readings into decisions.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Reading {
    Gesture(Move),
    Unknown,
}

/// Priority policy on the extended-finger count, then on which fingers.
///
/// Count is checked before the specific two- and three-finger rules, so an
/// open hand that happens to include thumb+index+middle still reads as paper.
impl From<FingerState> for Reading {
    fn from(fingers: FingerState) -> Self {
        match fingers.count() {
            0 => Reading::Gesture(Move::Rock),
            4 | 5 => Reading::Gesture(Move::Paper),
            2 if fingers.index() && fingers.middle() => Reading::Gesture(Move::Scissors),
            // alternate scissors pose with the thumb out
            3 if fingers.thumb() && fingers.index() && fingers.middle() => {
                Reading::Gesture(Move::Scissors)
            }
            _ => Reading::Unknown,
        }
    }
}

impl Reading {
    /// Classify a raw 0/1 vector, degrading malformed input to Unknown.
    pub fn read(raw: &[u8]) -> Self {
        FingerState::parse(raw)
            .map(Reading::from)
            .unwrap_or(Reading::Unknown)
    }

    pub fn gesture(&self) -> Option<Move> {
        match self {
            Reading::Gesture(m) => Some(*m),
            Reading::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fist_is_rock() {
        assert!(Reading::read(&[0, 0, 0, 0, 0]) == Reading::Gesture(Move::Rock));
    }

    #[test]
    fn open_hand_is_paper() {
        assert!(Reading::read(&[1, 1, 1, 1, 1]) == Reading::Gesture(Move::Paper));
        assert!(Reading::read(&[0, 1, 1, 1, 1]) == Reading::Gesture(Move::Paper));
        assert!(Reading::read(&[1, 1, 1, 1, 0]) == Reading::Gesture(Move::Paper));
    }

    #[test]
    fn index_middle_is_scissors() {
        assert!(Reading::read(&[0, 1, 1, 0, 0]) == Reading::Gesture(Move::Scissors));
    }

    #[test]
    fn thumb_index_middle_is_scissors() {
        assert!(Reading::read(&[1, 1, 1, 0, 0]) == Reading::Gesture(Move::Scissors));
    }

    #[test]
    fn ambiguous_poses_are_unknown() {
        assert!(Reading::read(&[1, 0, 0, 0, 0]) == Reading::Unknown);
        assert!(Reading::read(&[0, 1, 0, 1, 0]) == Reading::Unknown);
        assert!(Reading::read(&[0, 0, 1, 1, 1]) == Reading::Unknown);
    }

    #[test]
    fn malformed_frames_are_unknown() {
        assert!(Reading::read(&[]) == Reading::Unknown);
        assert!(Reading::read(&[1, 1, 1]) == Reading::Unknown);
        assert!(Reading::read(&[0, 3, 0, 0, 0]) == Reading::Unknown);
    }
}

use super::fingers::FingerState;
use super::reading::Reading;
use super::window::VoteWindow;
use crate::game::moves::Move;
use std::time::Duration;
use std::time::Instant;

/// What the detector reports on each tick while a session is live.
///
/// NoGesture is a first-class outcome, distinct from an Unknown reading:
/// it means the round's time budget ran out with no stable decision, and
/// the caller should fall back to a manual-input path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pending,
    Gesture(Move),
    NoGesture,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Disarmed,
    Armed { since: Instant },
    Decided(Move),
}

/// Round-scoped detection session.
///
/// Exactly one session is live at a time. The caller arms at the start of a
/// round, feeds one frame per tick, and disarms once the verdict is consumed.
/// Time advances cooperatively: each tick carries the caller's clock, so no
/// timer thread exists here.
#[derive(Debug)]
pub struct Detector {
    phase: Phase,
    window: VoteWindow,
    timeout: Duration,
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(VoteWindow::default(), Duration::from_secs(3))
    }
}

impl Detector {
    pub fn new(window: VoteWindow, timeout: Duration) -> Self {
        Self {
            phase: Phase::Disarmed,
            window,
            timeout,
        }
    }

    /// Begin a detection session. Rejected while a session is live; stale
    /// votes never leak across rounds because arming clears the window.
    pub fn arm(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Disarmed => {
                self.window.clear();
                self.phase = Phase::Armed { since: now };
                true
            }
            _ => {
                log::warn!("rejecting re-arm while detection session is live");
                false
            }
        }
    }

    /// End the session. Idempotent; disarming a disarmed detector is a no-op.
    pub fn disarm(&mut self) {
        self.window.clear();
        self.phase = Phase::Disarmed;
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.phase, Phase::Armed { .. })
    }

    /// Consume the decided move, if any, and end the session.
    pub fn take(&mut self) -> Option<Move> {
        match self.phase {
            Phase::Decided(m) => {
                self.disarm();
                Some(m)
            }
            _ => None,
        }
    }

    /// Feed one frame, or None when no hand is present. The timeout is
    /// checked first, so a session that never sees a hand still ends.
    pub fn tick(&mut self, frame: Option<FingerState>, now: Instant) -> Verdict {
        match self.phase {
            Phase::Disarmed => Verdict::Pending,
            Phase::Decided(m) => Verdict::Gesture(m),
            Phase::Armed { since } => {
                if now.duration_since(since) > self.timeout {
                    self.disarm();
                    return Verdict::NoGesture;
                }
                let Some(fingers) = frame else {
                    return Verdict::Pending;
                };
                self.window.push(Reading::from(fingers));
                match self.window.decision() {
                    Some(m) => {
                        self.window.clear();
                        self.phase = Phase::Decided(m);
                        Verdict::Gesture(m)
                    }
                    None => Verdict::Pending,
                }
            }
        }
    }
}

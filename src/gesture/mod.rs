//! Gesture stabilization.
//!
//! Per-frame finger readings are noisy: hand motion and partial occlusion
//! flip individual fingers between frames. The pipeline here is
//! [FingerState] -> [Reading] -> [VoteWindow] -> [Detector], where the window
//! debounces single-frame flicker with a majority vote over a fixed-capacity
//! FIFO, and the detector scopes the vote to one round at a time with an
//! arming discipline and a cooperative timeout.

pub use fingers::FingerState;
pub use reading::Reading;
pub use session::Detector;
pub use session::Verdict;
pub use window::VoteWindow;

pub mod fingers;
pub mod reading;
pub mod session;
pub mod window;

//! Gesture-stabilized rock paper scissors.
//!
//! Two subsystems carry the interesting logic: [gesture] turns noisy per-frame
//! finger readings into a debounced, confidence-gated move, and [opponent]
//! adapts to the human's move sequence with layered prediction strategies.
//! Everything else is bookkeeping around them.

pub mod config;
pub mod game;
pub mod gesture;
pub mod opponent;
#[cfg(feature = "cli")]
pub mod play;
pub mod save;

/// Strategy weights and prediction confidence.
pub type Probability = f32;

/// Random instance generation for testing and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Seconds since the unix epoch, for round records and leaderboard dates.
pub fn clock() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|t| t.as_secs())
        .unwrap_or_default()
}

/// Initialize logging to terminal and a timestamped file under logs/.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", clock())).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

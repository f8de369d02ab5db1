use crate::gesture::Detector;
use crate::gesture::VoteWindow;
use crate::opponent::Difficulty;
use serde::Deserialize;
use serde::Serialize;

/// Application configuration, loaded from config.json when present.
///
/// Every field defaults sensibly; a missing or corrupt file never stops a
/// game from starting. The two history windows (frequency analysis vs the
/// bounded move log) are deliberately separate knobs.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub detection: Detection,
    pub opponent: Engine,
    pub rules: Rules,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Detection {
    /// Sliding-window capacity, in frames.
    pub window: usize,
    /// Votes required for a stable decision. Must be below window.
    pub confidence: usize,
    /// Detection budget per round, in seconds.
    pub timeout: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Engine {
    pub difficulty: Difficulty,
    /// Trailing moves considered by frequency analysis.
    pub frequency_window: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub rounds_per_game: usize,
}

impl Default for Detection {
    fn default() -> Self {
        Self {
            window: 5,
            confidence: 3,
            timeout: 3.0,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            frequency_window: 10,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self { rounds_per_game: 5 }
    }
}

impl Detection {
    /// Reject values the detector cannot run on: the confidence floor must
    /// sit strictly inside the window, and the timeout must be a positive
    /// finite number of seconds.
    fn vet(self) -> Self {
        let coherent = 0 < self.confidence
            && self.confidence < self.window
            && self.timeout.is_finite()
            && self.timeout > 0.;
        match coherent {
            true => self,
            false => {
                log::warn!("incoherent detection config {:?}, using defaults", self);
                Self::default()
            }
        }
    }
}

impl Config {
    /// Load from disk, falling back to defaults on any failure. A file that
    /// parses but carries incoherent values degrades the same way: a bad
    /// config never stops a game from starting.
    pub fn load(path: &str) -> Self {
        match Self::read(path) {
            Ok(config) => config.vet(),
            Err(e) => {
                log::warn!("using default config ({}): {}", path, e);
                Self::default()
            }
        }
    }

    fn vet(mut self) -> Self {
        self.detection = self.detection.vet();
        self
    }

    fn read(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl From<&Detection> for Detector {
    fn from(detection: &Detection) -> Self {
        Detector::new(
            VoteWindow::new(detection.window, detection.confidence),
            std::time::Duration::from_secs_f32(detection.timeout),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_coherent() {
        let config = Config::default();
        assert!(config.detection.confidence < config.detection.window);
        assert!(config.rules.rounds_per_game > 0);
        assert!(config.opponent.frequency_window > 0);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load("/nonexistent/config.json");
        assert!(config.detection.window == 5);
    }

    #[test]
    fn incoherent_detection_values_fall_back_to_defaults() {
        let config = Config {
            detection: Detection {
                window: 3,
                confidence: 5,
                timeout: 3.0,
            },
            ..Config::default()
        }
        .vet();
        assert!(config.detection.confidence < config.detection.window);
        // a vetted config always yields a working detector
        let _ = Detector::from(&config.detection);
    }

    #[test]
    fn degenerate_timeouts_fall_back_to_defaults() {
        for timeout in [-1.0, 0.0, f32::NAN, f32::INFINITY] {
            let detection = Detection {
                timeout,
                ..Detection::default()
            }
            .vet();
            assert!(detection.timeout == 3.0);
            let _ = Detector::from(&detection);
        }
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"opponent": {"difficulty": "hard"}}"#).unwrap();
        assert!(config.opponent.difficulty == Difficulty::Hard);
        assert!(config.opponent.frequency_window == 10);
        assert!(config.detection.timeout == 3.0);
    }
}

use crate::game::stats::Statistics;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

/// Leaderboard entries retained on disk.
const LEADERBOARD_CAP: usize = 10;

/// For records that live as json files under data/.
///
/// Loading is forgiving: a missing or corrupt file logs and yields the
/// default record, since losing a stats file should never stop a game.
/// Saving propagates errors so the caller can decide how loudly to fail.
pub trait Disk: Serialize + DeserializeOwned + Default {
    /// Path to the record's file on disk.
    fn path() -> String;

    fn load() -> Self {
        match std::fs::read_to_string(Self::path()) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("corrupt record at {}, starting fresh: {}", Self::path(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = std::path::Path::new(&path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

impl Disk for Statistics {
    fn path() -> String {
        "data/stats.json".to_string()
    }
}

/// Top scores across all sessions, highest first.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub score: u32,
    pub date: u64,
    pub rounds: usize,
}

impl From<(String, u32, usize)> for Entry {
    fn from((name, score, rounds): (String, u32, usize)) -> Self {
        Self {
            name,
            score,
            rounds,
            date: crate::clock(),
        }
    }
}

impl Leaderboard {
    pub fn submit(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(LEADERBOARD_CAP);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl Disk for Leaderboard {
    fn path() -> String {
        "data/leaderboard.json".to_string()
    }
}

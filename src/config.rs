use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::game::JudgeWindows;

/// Engine tuning knobs. The defaults match the shipped gameplay feel; the
/// tolerances are tunable constants, not load-bearing precision values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub judge: JudgeWindows,
    /// Rendering lead time: how long before its scheduled time a note
    /// enters the visible window.
    pub travel_time_s: f64,
    /// How far past the hit line a note stays in the visible window.
    pub trail_window_s: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            judge: JudgeWindows::normal(),
            travel_time_s: 2.35,
            trail_window_s: 0.35,
        }
    }
}

impl EngineSettings {
    /// Load settings from a JSON file, falling back to defaults when the
    /// file is absent or unreadable.
    pub fn load(path: &Path) -> Self {
        Self::load_from_file(path).unwrap_or_default()
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

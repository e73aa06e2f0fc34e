use serde::{Deserialize, Serialize};

use super::defaults;

/// Engine configuration. Scorer weights and thresholds are deliberately
/// NOT here — they are product constants (`crate::constants`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuityConfig {
    /// How far back (hours) to look for candidate ideas.
    pub time_window_hours: i64,
    /// Prior development summaries attached to a signal.
    pub max_recent_developments: usize,
    /// Keywords kept per text during extraction.
    pub max_keywords: usize,
}

impl Default for ContinuityConfig {
    fn default() -> Self {
        Self {
            time_window_hours: defaults::DEFAULT_TIME_WINDOW_HOURS,
            max_recent_developments: defaults::DEFAULT_MAX_RECENT_DEVELOPMENTS,
            max_keywords: defaults::DEFAULT_MAX_KEYWORDS,
        }
    }
}

impl ContinuityConfig {
    /// Parse from a TOML document; missing fields take defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

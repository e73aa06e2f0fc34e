use serde::{Deserialize, Serialize};
use std::fmt;

/// Match/edit confidence clamped to [0.0, 1.0].
/// User-authored edits default to full confidence.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Above this, a continuation is a strong match.
    pub const STRONG: f64 = 0.7;
    /// Medium-strength match.
    pub const MEDIUM: f64 = 0.5;
    /// Below this, a candidate is never surfaced.
    pub const FLOOR: f64 = 0.3;

    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Check whether this clears the detection floor.
    pub fn is_detectable(self) -> bool {
        self.0 >= Self::FLOOR
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

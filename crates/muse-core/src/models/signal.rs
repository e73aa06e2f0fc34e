use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::confidence::Confidence;

/// What the engine suggests doing with a detected continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    /// Apply the conversation as an edit to the matched idea.
    Update,
    /// Fold the new material into the matched idea.
    Merge,
    /// Save as a new idea that varies the matched one.
    NewVariation,
}

/// How a signal was produced. Only the heuristic matcher exists today;
/// the tag keeps room for embedding-backed detection later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    HeuristicMatch,
}

/// Per-factor contributions behind a confidence score. Every signal is
/// explainable: total = title + keyword + category + phrase_bonus,
/// clamped to [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub title_overlap: f64,
    pub keyword_overlap: f64,
    pub category_terms: f64,
    pub phrase_bonus: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        (self.title_overlap + self.keyword_overlap + self.category_terms + self.phrase_bonus)
            .clamp(0.0, 1.0)
    }
}

/// One prior development rendered for display alongside a signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorDevelopment {
    /// Local-format date string of the entry.
    pub date: String,
    /// Stored change summary, or "`<development_type>` development".
    pub label: String,
}

/// A detected continuation, surfaced to the user for a decision.
/// Transient: never persisted as its own record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuationSignal {
    pub idea_id: Uuid,
    pub idea_title: String,
    pub confidence: Confidence,
    pub suggested_action: SuggestedAction,
    pub detection_method: DetectionMethod,
    /// Whole hours since the matched idea's last update, rounded.
    pub hours_since_update: i64,
    /// Up to 5 most-recent prior developments, newest first.
    pub recent_developments: Vec<PriorDevelopment>,
    /// Per-factor score contributions.
    pub breakdown: ScoreBreakdown,
}

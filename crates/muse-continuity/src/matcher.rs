//! Continuation matcher: four-factor scorer over candidate ideas.
//!
//! Factors: title-token overlap, extracted-keyword overlap, category
//! domain-term overlap, continuation-phrase bonus. Strict-max selection
//! above the detection floor; the winner gets a suggested action.

use chrono::{DateTime, Utc};
use tracing::debug;

use muse_core::constants::{
    ACTION_MERGE_CUE_THRESHOLD, ACTION_MERGE_DEFAULT_THRESHOLD, ACTION_UPDATE_CUE_THRESHOLD,
    ACTION_UPDATE_DEFAULT_THRESHOLD, ACTION_VARIATION_CUE_THRESHOLD, CATEGORY_TERM_CAP,
    CONTINUATION_PHRASE_BONUS, DETECTION_FLOOR, KEYWORD_OVERLAP_CAP, MIN_KEYWORD_LEN,
    TITLE_OVERLAP_WEIGHT,
};
use muse_core::models::{Confidence, Idea, ScoreBreakdown, SuggestedAction};

use crate::keywords;
use crate::lexicon;

/// Phrases that signal the user wants to keep working on something.
const CONTINUATION_PHRASES: &[&str] = &[
    "continue",
    "build on",
    "expand",
    "develop further",
    "add to",
    "improve",
    "enhance",
    "refine",
    "iterate",
    "evolve",
];

/// Cues for the action tiers, checked against the combined user text.
const UPDATE_CUES: &[&str] = &["continue", "build", "expand"];
const MERGE_CUES: &[&str] = &["refine", "improve", "enhance"];
const VARIATION_CUES: &[&str] = &["different", "alternative", "another"];

/// The winning candidate, before history enrichment.
#[derive(Debug, Clone)]
pub struct ContinuationMatch {
    pub idea: Idea,
    pub confidence: Confidence,
    pub suggested_action: SuggestedAction,
    pub breakdown: ScoreBreakdown,
    /// Whole hours since the idea's last update, rounded.
    pub hours_since_update: i64,
}

/// Deterministic continuation detector. Read-only against the candidate
/// set passed in; candidates must already be scoped to the current user
/// and the caller's time window.
#[derive(Debug, Default)]
pub struct ContinuationMatcher;

impl ContinuationMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Score every candidate against the recent user utterances and pick
    /// the strict maximum, if it clears the detection floor.
    ///
    /// Ties keep the first candidate seen. Callers pass candidates
    /// most-recently-updated first, so a tie resolves to the most recent
    /// idea.
    pub fn detect(
        &self,
        utterances: &[String],
        candidates: &[Idea],
        now: DateTime<Utc>,
    ) -> Option<ContinuationMatch> {
        if utterances.is_empty() || candidates.is_empty() {
            return None;
        }

        let text = utterances.join(" ").to_lowercase();
        let user_keywords = keywords::extract(&text);

        let mut best: Option<(usize, ScoreBreakdown)> = None;
        for (i, idea) in candidates.iter().enumerate() {
            let breakdown = score_candidate(idea, &text, &user_keywords);
            debug!(
                idea_id = %idea.id,
                total = breakdown.total(),
                "scored continuation candidate"
            );
            // Strictly greater keeps the first-seen candidate on ties.
            let is_better = match &best {
                Some((_, current)) => breakdown.total() > current.total(),
                None => true,
            };
            if is_better {
                best = Some((i, breakdown));
            }
        }

        let (index, breakdown) = best?;
        let total = breakdown.total();
        if total < DETECTION_FLOOR {
            debug!(total, "best candidate below detection floor");
            return None;
        }

        let idea = candidates[index].clone();
        let suggested_action = classify_action(total, &text);
        Some(ContinuationMatch {
            hours_since_update: idea.hours_since_update(now),
            confidence: Confidence::new(total),
            suggested_action,
            breakdown,
            idea,
        })
    }
}

/// Compute the four factor contributions for one candidate.
fn score_candidate(idea: &Idea, text: &str, user_keywords: &[String]) -> ScoreBreakdown {
    // Factor 1: title tokens (len > 3) literally occurring in the text.
    let title_tokens: Vec<String> = idea
        .title
        .to_lowercase()
        .split_whitespace()
        .filter(|t| t.len() > MIN_KEYWORD_LEN)
        .map(str::to_string)
        .collect();
    let title_overlap = if title_tokens.is_empty() {
        0.0
    } else {
        let matched = title_tokens.iter().filter(|t| text.contains(t.as_str())).count();
        matched as f64 / title_tokens.len() as f64 * TITLE_OVERLAP_WEIGHT
    };

    // Factor 2: extracted-keyword overlap between the idea and the text.
    let idea_keywords = keywords::extract(&format!("{} {}", idea.title, idea.content));
    let overlap = keywords::overlap_count(&idea_keywords, user_keywords);
    let keyword_overlap =
        (overlap as f64 / idea_keywords.len().max(1) as f64).min(KEYWORD_OVERLAP_CAP);

    // Factor 3: category domain terms occurring in the text.
    let terms = lexicon::terms_for(&idea.category);
    let matched_terms = terms.iter().filter(|t| text.contains(*t)).count();
    let category_terms = (matched_terms as f64 / terms.len() as f64).min(CATEGORY_TERM_CAP);

    // Factor 4: flat bonus for an explicit continuation phrase.
    let phrase_bonus = if CONTINUATION_PHRASES.iter().any(|p| text.contains(p)) {
        CONTINUATION_PHRASE_BONUS
    } else {
        0.0
    };

    ScoreBreakdown {
        title_overlap,
        keyword_overlap,
        category_terms,
        phrase_bonus,
    }
}

/// Action tiers, evaluated in order; first match wins.
fn classify_action(confidence: f64, text: &str) -> SuggestedAction {
    let has = |cues: &[&str]| cues.iter().any(|c| text.contains(c));

    if confidence > ACTION_UPDATE_CUE_THRESHOLD && has(UPDATE_CUES) {
        SuggestedAction::Update
    } else if confidence > ACTION_MERGE_CUE_THRESHOLD && has(MERGE_CUES) {
        SuggestedAction::Merge
    } else if confidence > ACTION_VARIATION_CUE_THRESHOLD && has(VARIATION_CUES) {
        SuggestedAction::NewVariation
    } else if confidence > ACTION_UPDATE_DEFAULT_THRESHOLD {
        SuggestedAction::Update
    } else if confidence > ACTION_MERGE_DEFAULT_THRESHOLD {
        SuggestedAction::Merge
    } else {
        SuggestedAction::NewVariation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_tiers_evaluate_in_order() {
        assert_eq!(
            classify_action(0.8, "let's continue this"),
            SuggestedAction::Update
        );
        assert_eq!(
            classify_action(0.6, "please refine the pitch"),
            SuggestedAction::Merge
        );
        assert_eq!(
            classify_action(0.45, "a different take"),
            SuggestedAction::NewVariation
        );
    }

    #[test]
    fn action_defaults_by_confidence_without_cues() {
        assert_eq!(classify_action(0.65, "more thoughts"), SuggestedAction::Update);
        assert_eq!(classify_action(0.5, "more thoughts"), SuggestedAction::Merge);
        assert_eq!(
            classify_action(0.35, "more thoughts"),
            SuggestedAction::NewVariation
        );
    }

    #[test]
    fn update_cue_below_threshold_falls_through() {
        // "continue" present but confidence too low for the cue tier,
        // lands on the cue-less merge default.
        assert_eq!(classify_action(0.5, "continue it"), SuggestedAction::Merge);
    }
}

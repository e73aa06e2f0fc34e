//! Property tests for the continuation scorer: confidence stays in
//! [0, 1] and never decreases when more matching material is added.

use chrono::Utc;
use muse_continuity::ContinuationMatcher;
use muse_core::models::{Idea, IdeaDraft};
use proptest::prelude::*;

const VOCAB: &[&str] = &[
    "morning", "routine", "habit", "tracking", "streaks", "reminders", "budget", "travel",
    "planning", "pizza", "quantum", "garden", "improve", "different", "continue", "the", "and",
    "about",
];

fn candidate() -> Idea {
    Idea::new(
        "user-1",
        &IdeaDraft::new(
            "Morning Routine App",
            "Track morning habits and build a routine with streaks and reminders.",
            "Productivity",
        ),
    )
}

fn words() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::collection::vec(proptest::sample::select(VOCAB), 1..15)
}

proptest! {
    #[test]
    fn confidence_is_always_within_unit_interval(words in words()) {
        let matcher = ContinuationMatcher::new();
        let utterance = vec![words.join(" ")];
        if let Some(m) = matcher.detect(&utterance, &[candidate()], Utc::now()) {
            let c = m.confidence.value();
            prop_assert!((0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn adding_a_continuation_phrase_never_lowers_confidence(words in words()) {
        let matcher = ContinuationMatcher::new();
        let base = words.join(" ");
        let richer = format!("{base} continue");

        let before = matcher.detect(&[base], &[candidate()], Utc::now());
        let after = matcher.detect(&[richer], &[candidate()], Utc::now());

        if let Some(b) = before {
            let a = after.expect("adding matching text cannot drop below the floor");
            prop_assert!(a.confidence.value() >= b.confidence.value());
        }
    }

    #[test]
    fn adding_title_tokens_never_lowers_confidence(words in words()) {
        let matcher = ContinuationMatcher::new();
        let base = words.join(" ");
        let richer = format!("{base} morning routine");

        let before = matcher.detect(&[base], &[candidate()], Utc::now());
        let after = matcher.detect(&[richer], &[candidate()], Utc::now());

        if let (Some(b), Some(a)) = (before, after) {
            prop_assert!(a.confidence.value() >= b.confidence.value());
        }
    }
}

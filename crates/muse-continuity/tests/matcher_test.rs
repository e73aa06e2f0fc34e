use chrono::{Duration, Utc};
use muse_continuity::ContinuationMatcher;
use muse_core::models::{Idea, IdeaDraft, SuggestedAction};

fn idea(title: &str, content: &str, category: &str, hours_ago: i64) -> Idea {
    let mut idea = Idea::new("user-1", &IdeaDraft::new(title, content, category));
    idea.updated_at = Utc::now() - Duration::hours(hours_ago);
    idea
}

fn utterances(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

// ── Detection scenarios ────────────────────────────────────────────────────

#[test]
fn strong_continuation_suggests_update() {
    let candidate = idea(
        "Morning Routine App",
        "Track morning habits and build a routine with streaks and reminders.",
        "Productivity",
        2,
    );
    let matcher = ContinuationMatcher::new();
    let result = matcher
        .detect(
            &utterances(&[
                "let's continue building the morning routine app",
                "I want to expand the habit tracking part",
            ]),
            &[candidate.clone()],
            Utc::now(),
        )
        .expect("should detect a continuation");

    assert_eq!(result.idea.id, candidate.id);
    assert!(
        result.confidence.value() > 0.7,
        "expected a strong match, got {}",
        result.confidence
    );
    assert_eq!(result.suggested_action, SuggestedAction::Update);
    assert_eq!(result.hours_since_update, 2);
}

#[test]
fn unrelated_topic_scores_below_the_floor() {
    let candidate = idea(
        "Morning Routine App",
        "Track morning habits and build a routine with streaks and reminders.",
        "Productivity",
        2,
    );
    let matcher = ContinuationMatcher::new();
    let result = matcher.detect(
        &utterances(&["I have a totally different idea about travel planning"]),
        &[candidate],
        Utc::now(),
    );
    assert!(result.is_none(), "low overlap must not surface a signal");
}

#[test]
fn pizza_never_continues_a_quantum_startup() {
    let candidate = idea(
        "Quantum Computing Startup",
        "Raising a seed round to fund quantum annealing hardware research.",
        "Business",
        1,
    );
    let matcher = ContinuationMatcher::new();
    let result = matcher.detect(&utterances(&["I like pizza"]), &[candidate], Utc::now());
    assert!(result.is_none());
}

#[test]
fn empty_inputs_detect_nothing() {
    let matcher = ContinuationMatcher::new();
    let candidate = idea("Anything", "Some body text here.", "General", 1);

    assert!(matcher.detect(&[], &[candidate], Utc::now()).is_none());
    assert!(matcher
        .detect(&utterances(&["continue the plan"]), &[], Utc::now())
        .is_none());
}

// ── Selection ──────────────────────────────────────────────────────────────

#[test]
fn best_scoring_candidate_wins() {
    let strong = idea(
        "Garden Irrigation System",
        "Drip irrigation schedule for the vegetable garden.",
        "Personal",
        3,
    );
    let weak = idea(
        "Quarterly Budget Review",
        "Spreadsheet of recurring expenses.",
        "Finance",
        1,
    );
    let matcher = ContinuationMatcher::new();
    let result = matcher
        .detect(
            &utterances(&["let's continue the garden irrigation system design"]),
            &[weak, strong.clone()],
            Utc::now(),
        )
        .expect("should match the garden idea");
    assert_eq!(result.idea.id, strong.id);
}

#[test]
fn ties_keep_the_first_candidate_seen() {
    let first = idea("Solar Charger", "Portable panel sizing notes.", "Technology", 1);
    let second = idea("Solar Charger", "Portable panel sizing notes.", "Technology", 1);
    let matcher = ContinuationMatcher::new();
    let result = matcher
        .detect(
            &utterances(&["continue the solar charger work"]),
            &[first.clone(), second],
            Utc::now(),
        )
        .expect("identical candidates still clear the floor");
    assert_eq!(result.idea.id, first.id);
}

// ── Score breakdown ────────────────────────────────────────────────────────

#[test]
fn breakdown_factors_sum_to_the_confidence() {
    let candidate = idea(
        "Morning Routine App",
        "Track morning habits and build a routine.",
        "Productivity",
        2,
    );
    let matcher = ContinuationMatcher::new();
    let result = matcher
        .detect(
            &utterances(&["continue building the morning routine tracking app"]),
            &[candidate],
            Utc::now(),
        )
        .unwrap();

    let b = result.breakdown;
    assert!((b.total() - result.confidence.value()).abs() < 1e-9);
    assert!(b.title_overlap > 0.0);
    assert!(b.phrase_bonus > 0.0);
}

#[test]
fn continuation_phrase_alone_is_not_enough() {
    let candidate = idea(
        "Sourdough Log",
        "Hydration ratios and proofing times.",
        "Creative",
        1,
    );
    let matcher = ContinuationMatcher::new();
    // "continue" gives 0.1 but nothing else overlaps; below the 0.3 floor.
    let result = matcher.detect(
        &utterances(&["continue with my taxes"]),
        &[candidate],
        Utc::now(),
    );
    assert!(result.is_none());
}

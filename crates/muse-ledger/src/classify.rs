//! Automatic classification of an accepted edit.

use muse_core::constants::MAJOR_REVISION_RATIO;
use muse_core::models::{DevelopmentType, Idea, IdeaDraft};

/// Relative content length change: `|len(old) - len(new)| / len(old)`.
/// Zero when the old content is empty or the content is unchanged.
pub fn change_ratio(old_content: &str, new_content: &str) -> f64 {
    if old_content.is_empty() || old_content == new_content {
        return 0.0;
    }
    let old_len = old_content.chars().count() as f64;
    let new_len = new_content.chars().count() as f64;
    (old_len - new_len).abs() / old_len
}

/// Classify an edit when the caller did not supply an explicit type.
///
/// A large content change together with a title change is a major
/// revision; everything else, including category-only changes, is a
/// refinement. Folding recategorization into refinement mirrors the
/// product's current behavior.
pub fn classify_edit(idea: &Idea, draft: &IdeaDraft) -> DevelopmentType {
    let ratio = change_ratio(&idea.content, &draft.content);
    let title_changed = idea.title != draft.title;

    if ratio > MAJOR_REVISION_RATIO && title_changed {
        DevelopmentType::MajorRevision
    } else {
        DevelopmentType::Refinement
    }
}

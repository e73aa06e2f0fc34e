//! Deterministic human-readable change summaries.

use muse_core::constants::MAJOR_REVISION_RATIO;
use muse_core::models::{Idea, IdeaDraft};

use crate::classify::change_ratio;

/// Build the ordered clause list for an edit and join it with ", ".
/// An edit that changes nothing summarizes as "Minor updates".
pub fn summarize_edit(idea: &Idea, draft: &IdeaDraft) -> String {
    let mut clauses: Vec<String> = Vec::new();

    if idea.title != draft.title {
        clauses.push("Updated title".into());
    }

    if idea.content != draft.content {
        let ratio = change_ratio(&idea.content, &draft.content);
        if ratio > MAJOR_REVISION_RATIO {
            clauses.push("Major content revision".into());
        } else if draft.content.chars().count() > idea.content.chars().count() {
            clauses.push("Expanded content".into());
        } else {
            clauses.push("Refined content".into());
        }
    }

    if idea.category != draft.category {
        clauses.push(format!(
            "Changed category from {} to {}",
            idea.category, draft.category
        ));
    }

    if clauses.is_empty() {
        "Minor updates".into()
    } else {
        clauses.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(title: &str, content: &str, category: &str) -> Idea {
        Idea::new("user-1", &IdeaDraft::new(title, content, category))
    }

    #[test]
    fn no_change_is_minor_updates() {
        let idea = idea("Title", "body", "General");
        let draft = IdeaDraft::new("Title", "body", "General");
        assert_eq!(summarize_edit(&idea, &draft), "Minor updates");
    }

    #[test]
    fn longer_content_is_expanded() {
        let idea = idea("Title", "short", "General");
        let draft = IdeaDraft::new("Title", "short but longer now", "General");
        assert_eq!(summarize_edit(&idea, &draft), "Expanded content");
    }

    #[test]
    fn shorter_content_is_refined() {
        let idea = idea("Title", "a fairly long body", "General");
        let draft = IdeaDraft::new("Title", "a short body", "General");
        assert_eq!(summarize_edit(&idea, &draft), "Refined content");
    }

    #[test]
    fn clauses_join_in_order() {
        let idea = idea("Old", &"x".repeat(1000), "General");
        let draft = IdeaDraft::new("New", "y".repeat(1700), "Business");
        assert_eq!(
            summarize_edit(&idea, &draft),
            "Updated title, Major content revision, Changed category from General to Business"
        );
    }

    #[test]
    fn category_change_names_both_categories() {
        let idea = idea("Title", "body", "Personal");
        let draft = IdeaDraft::new("Title", "body", "Health");
        assert_eq!(
            summarize_edit(&idea, &draft),
            "Changed category from Personal to Health"
        );
    }
}

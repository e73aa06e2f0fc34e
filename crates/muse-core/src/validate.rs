//! Input validation for all write paths. Runs before any ledger call;
//! the first offending field aborts the operation.

use crate::constants::{MAX_CONTENT_LEN, MAX_TITLE_LEN};
use crate::errors::{MuseError, MuseResult};
use crate::models::IdeaDraft;

/// Validate a proposed title/content/category.
pub fn validate_draft(draft: &IdeaDraft) -> MuseResult<()> {
    if draft.title.trim().is_empty() {
        return Err(MuseError::Validation {
            field: "title",
            reason: "title must not be empty".into(),
        });
    }
    if draft.title.chars().count() > MAX_TITLE_LEN {
        return Err(MuseError::Validation {
            field: "title",
            reason: format!("title exceeds {MAX_TITLE_LEN} characters"),
        });
    }
    if draft.content.trim().is_empty() {
        return Err(MuseError::Validation {
            field: "content",
            reason: "content must not be empty".into(),
        });
    }
    if draft.content.chars().count() > MAX_CONTENT_LEN {
        return Err(MuseError::Validation {
            field: "content",
            reason: format!("content exceeds {MAX_CONTENT_LEN} characters"),
        });
    }
    if draft.category.trim().is_empty() {
        return Err(MuseError::Validation {
            field: "category",
            reason: "category must not be empty".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_normal_draft() {
        let draft = IdeaDraft::new("Morning Routine App", "Track habits.", "Productivity");
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn rejects_empty_title_first() {
        let draft = IdeaDraft::new("  ", "", "");
        let err = validate_draft(&draft).unwrap_err();
        assert!(matches!(err, MuseError::Validation { field: "title", .. }));
    }

    #[test]
    fn rejects_oversized_title() {
        let draft = IdeaDraft::new("x".repeat(MAX_TITLE_LEN + 1), "body", "General");
        let err = validate_draft(&draft).unwrap_err();
        assert!(matches!(err, MuseError::Validation { field: "title", .. }));
    }

    #[test]
    fn rejects_oversized_content() {
        let draft = IdeaDraft::new("t", "x".repeat(MAX_CONTENT_LEN + 1), "General");
        let err = validate_draft(&draft).unwrap_err();
        assert!(matches!(
            err,
            MuseError::Validation {
                field: "content",
                ..
            }
        ));
    }

    #[test]
    fn rejects_blank_category() {
        let draft = IdeaDraft::new("t", "body", " ");
        let err = validate_draft(&draft).unwrap_err();
        assert!(matches!(
            err,
            MuseError::Validation {
                field: "category",
                ..
            }
        ));
    }
}

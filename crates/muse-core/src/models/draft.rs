use serde::{Deserialize, Serialize};

/// Proposed title/content/category for any write path.
/// Always validated (`crate::validate::validate_draft`) before a ledger call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaDraft {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl IdeaDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: category.into(),
        }
    }
}

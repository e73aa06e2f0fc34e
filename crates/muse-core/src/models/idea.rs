use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::draft::IdeaDraft;

/// Who can see an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Private,
    Shared,
    Public,
}

/// A persisted user-authored idea. The unit everything else revolves around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    /// UUID v4 identifier.
    pub id: Uuid,
    /// Owning user. Ownership is enforced on every mutation.
    pub owner_id: String,
    /// Short title, at most 200 characters.
    pub title: String,
    /// Body text, at most 50,000 characters.
    pub content: String,
    /// Free-form category, conventionally one of the lexicon's fixed set.
    pub category: String,
    pub created_at: DateTime<Utc>,
    /// Last activity; bumped on every accepted edit, branch target, or merge.
    pub updated_at: DateTime<Utc>,
    /// Number of accepted history entries. Never decreases.
    pub development_count: u32,
    /// Parent idea this one was forked from, if any.
    pub branched_from_id: Option<Uuid>,
    /// Optional note recorded when the branch was created.
    pub branch_note: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub pinned: bool,
    /// Lightweight provenance when saved as a new variation of a viewed idea.
    #[serde(default)]
    pub save_type: Option<String>,
    /// The idea the user viewed but chose not to merge into.
    #[serde(default)]
    pub original_id: Option<Uuid>,
}

impl Idea {
    /// Create a fresh idea from a draft. Version chain starts empty;
    /// `development_count` is set by the first ledger write.
    pub fn new(owner_id: impl Into<String>, draft: &IdeaDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id: owner_id.into(),
            title: draft.title.clone(),
            content: draft.content.clone(),
            category: draft.category.clone(),
            created_at: now,
            updated_at: now,
            development_count: 0,
            branched_from_id: None,
            branch_note: None,
            visibility: Visibility::default(),
            archived: false,
            pinned: false,
            save_type: None,
            original_id: None,
        }
    }

    /// Structural comparison: same title, content, and category.
    ///
    /// Distinct from `PartialEq`, which only compares IDs (entity pattern).
    pub fn content_eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.content == other.content
            && self.category == other.category
    }

    /// Whole hours since the last activity, rounded to nearest.
    pub fn hours_since_update(&self, now: DateTime<Utc>) -> i64 {
        let minutes = (now - self.updated_at).num_minutes().max(0);
        (minutes as f64 / 60.0).round() as i64
    }
}

/// Identity equality: two ideas are equal if they have the same ID.
impl PartialEq for Idea {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

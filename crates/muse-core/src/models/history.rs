use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::confidence::Confidence;
use super::idea::Idea;

/// How an accepted change is classified in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentType {
    Refinement,
    MajorRevision,
    Branch,
    Merge,
}

impl DevelopmentType {
    /// Human label used when an entry has no stored change summary.
    pub fn label(self) -> &'static str {
        match self {
            Self::Refinement => "refinement",
            Self::MajorRevision => "major_revision",
            Self::Branch => "branch",
            Self::Merge => "merge",
        }
    }
}

/// Which merge path actually produced the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// Deterministic concatenation with a separator.
    Append,
    /// External semantic merge collaborator.
    Smart,
    /// Smart path failed; append was used instead.
    AppendFallback,
}

/// Point-in-time copy of an idea's editable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaSnapshot {
    pub title: String,
    pub content: String,
    pub category: String,
    pub timestamp: DateTime<Utc>,
}

impl IdeaSnapshot {
    pub fn of(idea: &Idea, timestamp: DateTime<Utc>) -> Self {
        Self {
            title: idea.title.clone(),
            content: idea.content.clone(),
            category: idea.category.clone(),
            timestamp,
        }
    }

    /// The empty snapshot marking the first entry of a freshly created idea.
    pub fn empty(timestamp: DateTime<Utc>) -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            category: String::new(),
            timestamp,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty() && self.category.is_empty()
    }
}

/// Provenance bag on a history entry: recognized typed keys per
/// development type, plus an open map for anything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryMetadata {
    /// Branch entries: the parent idea.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branched_from: Option<Uuid>,
    /// Branch entries: note recorded at fork time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_note: Option<String>,
    /// Merge entries: the source history entry folded in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_source_entry: Option<Uuid>,
    /// Merge entries: the strategy actually used, including fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_strategy: Option<MergeStrategy>,
    /// Anything callers want to carry along.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl HistoryMetadata {
    pub fn for_branch(parent_id: Uuid, branch_note: Option<String>) -> Self {
        Self {
            branched_from: Some(parent_id),
            branch_note,
            ..Self::default()
        }
    }

    pub fn for_merge(source_entry_id: Uuid, strategy: MergeStrategy) -> Self {
        Self {
            merge_source_entry: Some(source_entry_id),
            merge_strategy: Some(strategy),
            ..Self::default()
        }
    }
}

/// One immutable, append-only record of an accepted change to an idea.
/// Entries for a given idea are totally ordered by `version_number`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevelopmentHistoryEntry {
    /// UUID v4 identifier.
    pub id: Uuid,
    /// The idea this entry belongs to.
    pub idea_id: Uuid,
    /// Owning user, copied from the idea at write time.
    pub owner_id: String,
    /// Conversation the change originated from, if any.
    pub conversation_id: Option<String>,
    pub development_type: DevelopmentType,
    /// Pre-edit snapshot; empty for the first entry of a new idea.
    pub previous_version: IdeaSnapshot,
    /// Post-edit snapshot.
    pub new_version: IdeaSnapshot,
    /// 1-based, strictly increasing per idea.
    pub version_number: u32,
    /// Deterministic human-readable summary of what changed.
    pub change_summary: String,
    /// Defaults to 1.0 for user-authored edits.
    #[serde(default)]
    pub confidence: Confidence,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: HistoryMetadata,
    pub created_at: DateTime<Utc>,
}

impl DevelopmentHistoryEntry {
    /// The label surfaced to users: the stored summary, or a generic
    /// "`<development_type>` development" fallback.
    pub fn display_label(&self) -> String {
        if self.change_summary.is_empty() {
            format!("{} development", self.development_type.label())
        } else {
            self.change_summary.clone()
        }
    }
}

/// Identity equality by ID (entity pattern).
impl PartialEq for DevelopmentHistoryEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

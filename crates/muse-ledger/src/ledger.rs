//! The version ledger. All mutations load the idea, enforce ownership,
//! assign `version = current max + 1`, and append an immutable history
//! entry.
//!
//! Version assignment is read-max-then-write; two concurrent edits to the
//! same idea can race. Accepted for a single-user-editing workload.

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use muse_core::constants::MERGE_SEPARATOR;
use muse_core::errors::{LedgerError, MuseResult};
use muse_core::models::{
    Confidence, DevelopmentHistoryEntry, DevelopmentType, HistoryMetadata, Idea, IdeaDraft,
    IdeaSnapshot, MergeStrategy,
};
use muse_core::traits::{IContentMerger, IRecordStore};
use muse_core::validate::validate_draft;

use crate::classify::classify_edit;
use crate::summary::summarize_edit;

/// Result of `record_edit`. The idea mutation always succeeded; `entry`
/// is `None` when the best-effort history append failed, so the caller
/// can note "history may be incomplete".
#[derive(Debug, Clone)]
pub struct EditOutcome {
    pub idea: Idea,
    pub entry: Option<DevelopmentHistoryEntry>,
}

impl EditOutcome {
    pub fn history_recorded(&self) -> bool {
        self.entry.is_some()
    }
}

/// Append-only ledger over the record store, with an optional smart-merge
/// collaborator.
pub struct VersionLedger<'a> {
    store: &'a dyn IRecordStore,
    merger: Option<&'a dyn IContentMerger>,
}

impl<'a> VersionLedger<'a> {
    pub fn new(store: &'a dyn IRecordStore) -> Self {
        Self {
            store,
            merger: None,
        }
    }

    /// Wire the smart-merge collaborator. Without it, `Smart` merges fall
    /// back to append.
    pub fn with_merger(mut self, merger: &'a dyn IContentMerger) -> Self {
        self.merger = Some(merger);
        self
    }

    /// Record an accepted edit against an existing idea.
    ///
    /// The idea update is authoritative; the history append is
    /// best-effort (logged and swallowed on failure, never rolled back).
    #[allow(clippy::too_many_arguments)]
    pub fn record_edit(
        &self,
        idea_id: Uuid,
        owner_id: &str,
        draft: &IdeaDraft,
        conversation_id: Option<String>,
        explicit_type: Option<DevelopmentType>,
        confidence: Confidence,
    ) -> MuseResult<EditOutcome> {
        validate_draft(draft)?;
        let idea = self.load_owned(idea_id, owner_id)?;
        let now = Utc::now();

        let development_type = explicit_type.unwrap_or_else(|| classify_edit(&idea, draft));
        let change_summary = summarize_edit(&idea, draft);
        let version = self.store.max_version_number(idea.id)? + 1;

        let previous_version = IdeaSnapshot::of(&idea, now);

        let mut updated = idea;
        updated.title = draft.title.clone();
        updated.content = draft.content.clone();
        updated.category = draft.category.clone();
        updated.development_count = version;
        updated.updated_at = now;
        self.store.update_idea(&updated)?;

        let entry = DevelopmentHistoryEntry {
            id: Uuid::new_v4(),
            idea_id: updated.id,
            owner_id: updated.owner_id.clone(),
            conversation_id,
            development_type,
            previous_version,
            new_version: IdeaSnapshot::of(&updated, now),
            version_number: version,
            change_summary,
            confidence,
            tags: Vec::new(),
            metadata: HistoryMetadata::default(),
            created_at: now,
        };

        match self.store.insert_history_entry(&entry) {
            Ok(()) => Ok(EditOutcome {
                idea: updated,
                entry: Some(entry),
            }),
            Err(err) => {
                warn!(idea_id = %updated.id, version, %err, "history append failed after edit");
                Ok(EditOutcome {
                    idea: updated,
                    entry: None,
                })
            }
        }
    }

    /// Fork a new, independent idea from a parent. The parent is not
    /// modified; the branch's version chain starts at 1.
    pub fn create_branch(
        &self,
        parent_id: Uuid,
        owner_id: &str,
        draft: &IdeaDraft,
        branch_note: Option<String>,
        conversation_id: Option<String>,
    ) -> MuseResult<(Idea, DevelopmentHistoryEntry)> {
        validate_draft(draft)?;
        let parent = self.load_owned(parent_id, owner_id)?;
        let now = Utc::now();

        let mut branch = Idea::new(owner_id, draft);
        branch.branched_from_id = Some(parent.id);
        branch.branch_note = branch_note.clone();
        branch.development_count = 1;
        self.store.insert_idea(&branch)?;

        let entry = DevelopmentHistoryEntry {
            id: Uuid::new_v4(),
            idea_id: branch.id,
            owner_id: branch.owner_id.clone(),
            conversation_id,
            development_type: DevelopmentType::Branch,
            previous_version: IdeaSnapshot::empty(now),
            new_version: IdeaSnapshot::of(&branch, now),
            version_number: 1,
            change_summary: format!("Branched from {}", parent.title),
            confidence: Confidence::default(),
            tags: Vec::new(),
            metadata: HistoryMetadata::for_branch(parent.id, branch_note),
            created_at: now,
        };
        self.store.insert_history_entry(&entry)?;

        Ok((branch, entry))
    }

    /// Fold a branch's recorded content back into a target idea.
    ///
    /// `Smart` delegates to the merge collaborator; on any failure (or
    /// when no collaborator is wired) the deterministic append path is
    /// used and `AppendFallback` is recorded. A merge never hard-fails
    /// because the smart path is unavailable.
    pub fn merge_branch(
        &self,
        source_entry_id: Uuid,
        target_id: Uuid,
        owner_id: &str,
        strategy: MergeStrategy,
    ) -> MuseResult<(Idea, DevelopmentHistoryEntry)> {
        let source = self
            .store
            .get_history_entry(source_entry_id)?
            .ok_or(LedgerError::HistoryEntryNotFound {
                id: source_entry_id,
            })?;
        let target = self.load_owned(target_id, owner_id)?;
        let now = Utc::now();

        let source_content = source.new_version.content.as_str();
        let (merged_content, used_strategy, merge_summary) = match strategy {
            MergeStrategy::Smart => match self
                .merger
                .ok_or(())
                .and_then(|m| {
                    m.merge_content(&target.content, source_content, "smart")
                        .map_err(|err| {
                            warn!(target_id = %target.id, %err, "smart merge failed, appending");
                        })
                }) {
                Ok(merged) => {
                    let summary = if merged.summary.is_empty() {
                        "Merged branch content".to_string()
                    } else {
                        merged.summary
                    };
                    (merged.merged_content, MergeStrategy::Smart, summary)
                }
                Err(()) => (
                    append_content(&target.content, source_content),
                    MergeStrategy::AppendFallback,
                    "Merged branch content".to_string(),
                ),
            },
            _ => (
                append_content(&target.content, source_content),
                MergeStrategy::Append,
                "Merged branch content".to_string(),
            ),
        };

        let version = self.store.max_version_number(target.id)? + 1;
        let previous_version = IdeaSnapshot::of(&target, now);

        let mut updated = target;
        updated.content = merged_content;
        updated.development_count = version;
        updated.updated_at = now;
        self.store.update_idea(&updated)?;

        let entry = DevelopmentHistoryEntry {
            id: Uuid::new_v4(),
            idea_id: updated.id,
            owner_id: updated.owner_id.clone(),
            conversation_id: source.conversation_id.clone(),
            development_type: DevelopmentType::Merge,
            previous_version,
            new_version: IdeaSnapshot::of(&updated, now),
            version_number: version,
            change_summary: merge_summary,
            confidence: Confidence::default(),
            tags: Vec::new(),
            metadata: HistoryMetadata::for_merge(source.id, used_strategy),
            created_at: now,
        };
        self.store.insert_history_entry(&entry)?;

        Ok((updated, entry))
    }

    fn load_owned(&self, idea_id: Uuid, owner_id: &str) -> MuseResult<Idea> {
        let idea = self
            .store
            .get_idea(idea_id)?
            .ok_or(LedgerError::IdeaNotFound { id: idea_id })?;
        if idea.owner_id != owner_id {
            return Err(LedgerError::Forbidden {
                id: idea_id,
                owner_id: owner_id.to_string(),
            }
            .into());
        }
        Ok(idea)
    }
}

fn append_content(target: &str, source: &str) -> String {
    format!("{target}{MERGE_SEPARATOR}{source}")
}

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::{DevelopmentHistoryEntry, Idea};

/// The persistence collaborator. The engine issues no raw queries itself;
/// table/column layout is entirely the store's concern.
///
/// Implementations are expected to scope `find_ideas_by_owner` to the
/// given owner; every mutation path re-checks ownership regardless.
pub trait IRecordStore: Send + Sync {
    /// Ideas owned by `owner_id` with activity after `updated_after`,
    /// most-recently-updated first.
    fn find_ideas_by_owner(
        &self,
        owner_id: &str,
        updated_after: DateTime<Utc>,
    ) -> Result<Vec<Idea>, StoreError>;

    fn get_idea(&self, id: Uuid) -> Result<Option<Idea>, StoreError>;

    fn insert_idea(&self, idea: &Idea) -> Result<(), StoreError>;

    /// Full-record update keyed by `idea.id`.
    fn update_idea(&self, idea: &Idea) -> Result<(), StoreError>;

    fn insert_history_entry(&self, entry: &DevelopmentHistoryEntry) -> Result<(), StoreError>;

    fn get_history_entry(
        &self,
        id: Uuid,
    ) -> Result<Option<DevelopmentHistoryEntry>, StoreError>;

    /// Current maximum version number for an idea, 0 if it has no entries.
    fn max_version_number(&self, idea_id: Uuid) -> Result<u32, StoreError>;

    /// Up to `limit` history entries for an idea, newest first.
    fn recent_history(
        &self,
        idea_id: Uuid,
        limit: usize,
    ) -> Result<Vec<DevelopmentHistoryEntry>, StoreError>;
}

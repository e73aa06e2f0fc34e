//! Shared test fixtures: an in-memory record store, idea/draft builders,
//! and stub merge collaborators used by integration tests across crates.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use muse_core::errors::StoreError;
use muse_core::models::{DevelopmentHistoryEntry, Idea, IdeaDraft};
use muse_core::traits::{IContentMerger, IRecordStore, MergedContent};

/// Mutex-serialized in-memory record store. Version assignment in the
/// engine is read-max-then-write, so tests stay deterministic here.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Tables>,
    /// When true, every call fails with a backend error.
    fail_all: Mutex<bool>,
    /// When true, only history appends fail.
    fail_history: Mutex<bool>,
}

#[derive(Default)]
struct Tables {
    ideas: HashMap<Uuid, Idea>,
    history: Vec<DevelopmentHistoryEntry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every store call fail, for detection-degradation tests.
    pub fn fail_everything(&self) {
        *self.fail_all.lock().unwrap() = true;
    }

    /// Make only history appends fail, for best-effort-history tests.
    pub fn fail_history_writes(&self) {
        *self.fail_history.lock().unwrap() = true;
    }

    pub fn heal(&self) {
        *self.fail_all.lock().unwrap() = false;
        *self.fail_history.lock().unwrap() = false;
    }

    pub fn history_len(&self) -> usize {
        self.inner.lock().unwrap().history.len()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if *self.fail_all.lock().unwrap() {
            return Err(StoreError::Backend {
                message: "store unavailable (test)".into(),
            });
        }
        Ok(())
    }
}

impl IRecordStore for InMemoryStore {
    fn find_ideas_by_owner(
        &self,
        owner_id: &str,
        updated_after: DateTime<Utc>,
    ) -> Result<Vec<Idea>, StoreError> {
        self.check_available()?;
        let inner = self.inner.lock().unwrap();
        let mut ideas: Vec<Idea> = inner
            .ideas
            .values()
            .filter(|i| i.owner_id == owner_id && i.updated_at > updated_after)
            .cloned()
            .collect();
        ideas.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(ideas)
    }

    fn get_idea(&self, id: Uuid) -> Result<Option<Idea>, StoreError> {
        self.check_available()?;
        Ok(self.inner.lock().unwrap().ideas.get(&id).cloned())
    }

    fn insert_idea(&self, idea: &Idea) -> Result<(), StoreError> {
        self.check_available()?;
        self.inner
            .lock()
            .unwrap()
            .ideas
            .insert(idea.id, idea.clone());
        Ok(())
    }

    fn update_idea(&self, idea: &Idea) -> Result<(), StoreError> {
        self.check_available()?;
        let mut inner = self.inner.lock().unwrap();
        if !inner.ideas.contains_key(&idea.id) {
            return Err(StoreError::Backend {
                message: format!("update of missing idea {}", idea.id),
            });
        }
        inner.ideas.insert(idea.id, idea.clone());
        Ok(())
    }

    fn insert_history_entry(&self, entry: &DevelopmentHistoryEntry) -> Result<(), StoreError> {
        self.check_available()?;
        if *self.fail_history.lock().unwrap() {
            return Err(StoreError::Backend {
                message: "history table unavailable (test)".into(),
            });
        }
        self.inner.lock().unwrap().history.push(entry.clone());
        Ok(())
    }

    fn get_history_entry(
        &self,
        id: Uuid,
    ) -> Result<Option<DevelopmentHistoryEntry>, StoreError> {
        self.check_available()?;
        Ok(self
            .inner
            .lock()
            .unwrap()
            .history
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    fn max_version_number(&self, idea_id: Uuid) -> Result<u32, StoreError> {
        self.check_available()?;
        Ok(self
            .inner
            .lock()
            .unwrap()
            .history
            .iter()
            .filter(|e| e.idea_id == idea_id)
            .map(|e| e.version_number)
            .max()
            .unwrap_or(0))
    }

    fn recent_history(
        &self,
        idea_id: Uuid,
        limit: usize,
    ) -> Result<Vec<DevelopmentHistoryEntry>, StoreError> {
        self.check_available()?;
        let inner = self.inner.lock().unwrap();
        let mut entries: Vec<DevelopmentHistoryEntry> = inner
            .history
            .iter()
            .filter(|e| e.idea_id == idea_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.version_number.cmp(&a.version_number));
        entries.truncate(limit);
        Ok(entries)
    }
}

/// Merger that always succeeds with a canned semantic merge.
pub struct StubMerger;

impl IContentMerger for StubMerger {
    fn merge_content(
        &self,
        original_content: &str,
        new_content: &str,
        _merge_type: &str,
    ) -> Result<MergedContent, StoreError> {
        Ok(MergedContent {
            merged_content: format!("{original_content} [smart] {new_content}"),
            insights: vec!["combined overlapping sections".into()],
            summary: "Smart-merged branch content".into(),
        })
    }
}

/// Merger that always fails, for fallback tests.
pub struct FailingMerger;

impl IContentMerger for FailingMerger {
    fn merge_content(
        &self,
        _original_content: &str,
        _new_content: &str,
        _merge_type: &str,
    ) -> Result<MergedContent, StoreError> {
        Err(StoreError::Timeout {
            operation: "merge_content".into(),
        })
    }
}

/// A draft with sensible defaults.
pub fn draft(title: &str, content: &str, category: &str) -> IdeaDraft {
    IdeaDraft::new(title, content, category)
}

/// Build and insert an idea owned by `owner_id`, last updated
/// `hours_ago` hours in the past. Panics on store failure.
pub fn seed_idea(
    store: &InMemoryStore,
    owner_id: &str,
    title: &str,
    content: &str,
    category: &str,
    hours_ago: i64,
) -> Idea {
    let mut idea = Idea::new(owner_id, &draft(title, content, category));
    idea.updated_at = Utc::now() - Duration::hours(hours_ago);
    idea.created_at = idea.updated_at;
    store.insert_idea(&idea).expect("seed insert");
    idea
}

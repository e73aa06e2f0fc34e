use crate::errors::StoreError;

/// Result of a semantic merge from the external collaborator.
#[derive(Debug, Clone)]
pub struct MergedContent {
    pub merged_content: String,
    pub insights: Vec<String>,
    pub summary: String,
}

/// Optional smart-merge collaborator. May fail or time out; the ledger
/// falls back to deterministic append and records the fallback.
pub trait IContentMerger: Send + Sync {
    fn merge_content(
        &self,
        original_content: &str,
        new_content: &str,
        merge_type: &str,
    ) -> Result<MergedContent, StoreError>;
}

use uuid::Uuid;

/// Version-ledger errors for idea mutations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("idea {id} not found")]
    IdeaNotFound { id: Uuid },

    #[error("idea {id} is not owned by {owner_id}")]
    Forbidden { id: Uuid, owner_id: String },

    #[error("history entry {id} not found")]
    HistoryEntryNotFound { id: Uuid },
}

//! Error taxonomy for the continuity engine.
//!
//! Validation and not-found errors abort the operation and bubble to the
//! caller. Detection degradation and history-write failures never abort a
//! user-visible save — they are logged at the call site and surfaced as
//! warnings, not as variants here.

mod ledger_error;
mod store_error;

pub use ledger_error::LedgerError;
pub use store_error::StoreError;

/// Top-level error type. Sub-system errors convert via `From`.
#[derive(Debug, thiserror::Error)]
pub enum MuseError {
    #[error("validation failed on field '{field}': {reason}")]
    Validation { field: &'static str, reason: String },

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type MuseResult<T> = Result<T, MuseError>;

//! # muse-ledger
//!
//! The append-only version ledger. Classifies accepted edits, writes
//! immutable history entries with monotonically increasing version
//! numbers, and records branch/merge provenance.
//!
//! The idea mutation is authoritative; the history append is best-effort.
//! Losing a history entry is acceptable, losing the user's edit is not.

pub mod classify;
pub mod ledger;
pub mod summary;

pub use classify::{change_ratio, classify_edit};
pub use ledger::{EditOutcome, VersionLedger};
pub use summary::summarize_edit;

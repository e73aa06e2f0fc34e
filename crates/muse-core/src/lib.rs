//! # muse-core
//!
//! Foundation crate for the Muse idea continuity engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod validate;

// Re-export the most commonly used types at the crate root.
pub use config::ContinuityConfig;
pub use errors::{MuseError, MuseResult};
pub use models::{
    Confidence, ContinuationSignal, DevelopmentHistoryEntry, DevelopmentType, Idea, IdeaDraft,
    IdeaSnapshot, MergeStrategy, SuggestedAction,
};

pub mod confidence;
pub mod draft;
pub mod history;
pub mod idea;
pub mod signal;

pub use confidence::Confidence;
pub use draft::IdeaDraft;
pub use history::{
    DevelopmentHistoryEntry, DevelopmentType, HistoryMetadata, IdeaSnapshot, MergeStrategy,
};
pub use idea::{Idea, Visibility};
pub use signal::{ContinuationSignal, DetectionMethod, PriorDevelopment, ScoreBreakdown, SuggestedAction};

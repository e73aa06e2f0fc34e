pub mod content_merger;
pub mod record_store;

pub use content_merger::{IContentMerger, MergedContent};
pub use record_store::IRecordStore;

//! # muse-continuity
//!
//! Decides whether a conversation continues a previously saved idea.
//! Pure and deterministic: a four-factor weighted score per candidate,
//! strict-max selection above a floor, and a suggested-action tier.

pub mod keywords;
pub mod lexicon;
pub mod matcher;

pub use matcher::{ContinuationMatch, ContinuationMatcher};

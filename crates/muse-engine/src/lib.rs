//! # muse-engine
//!
//! The continuity orchestrator. Composes the matcher and the ledger:
//! detects continuations, surfaces signals, and applies the user's
//! decision (update, branch, save new, dismiss).

pub mod decision;
pub mod dismissals;
pub mod orchestrator;

pub use decision::{ChosenAction, DecisionState};
pub use dismissals::DismissalTracker;
pub use orchestrator::{ContinuityEngine, DecisionPayload, SaveOutcome};

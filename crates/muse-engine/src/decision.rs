//! The per-conversation decision lifecycle.
//!
//! `NoSignal` → `SignalPresented` → one of `Updating` / `Branching` /
//! `CreatingNew` → `Persisted`, or `Dismissed` from any non-terminal
//! state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// States of a single conversation-to-idea decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionState {
    NoSignal,
    SignalPresented,
    Updating,
    Branching,
    CreatingNew,
    /// Terminal: the outcome was written.
    Persisted,
    /// Terminal: the user ignored the signal; nothing persisted.
    Dismissed,
}

impl DecisionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Persisted | Self::Dismissed)
    }

    /// Whether `next` is a legal successor of `self`.
    pub fn can_transition_to(self, next: Self) -> bool {
        use DecisionState::*;
        match (self, next) {
            // Dismissal is allowed from any non-terminal state.
            (from, Dismissed) => !from.is_terminal(),
            (NoSignal, SignalPresented) => true,
            (NoSignal, CreatingNew) => true,
            (SignalPresented, Updating | Branching | CreatingNew) => true,
            (Updating | Branching | CreatingNew, Persisted) => true,
            _ => false,
        }
    }
}

/// What the user chose to do with a surfaced signal (or without one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChosenAction {
    /// Accept the suggested update/merge: edit the matched idea in place.
    AcceptUpdate,
    /// Fork a new idea from the matched one.
    Branch { note: Option<String> },
    /// Save as an unrelated new idea, optionally tagged as a variation
    /// of an idea the user viewed but chose not to merge into.
    SaveNew {
        save_type: Option<String>,
        original_id: Option<Uuid>,
    },
    /// Discard the signal; nothing is persisted.
    Dismiss,
}

#[cfg(test)]
mod tests {
    use super::DecisionState::*;

    #[test]
    fn happy_paths_are_legal() {
        assert!(NoSignal.can_transition_to(SignalPresented));
        assert!(SignalPresented.can_transition_to(Updating));
        assert!(SignalPresented.can_transition_to(Branching));
        assert!(SignalPresented.can_transition_to(CreatingNew));
        assert!(NoSignal.can_transition_to(CreatingNew));
        assert!(Updating.can_transition_to(Persisted));
    }

    #[test]
    fn dismissal_is_legal_from_any_non_terminal_state() {
        assert!(NoSignal.can_transition_to(Dismissed));
        assert!(SignalPresented.can_transition_to(Dismissed));
        assert!(Branching.can_transition_to(Dismissed));
        assert!(!Persisted.can_transition_to(Dismissed));
        assert!(!Dismissed.can_transition_to(Dismissed));
    }

    #[test]
    fn terminal_states_have_no_successors() {
        for next in [
            NoSignal,
            SignalPresented,
            Updating,
            Branching,
            CreatingNew,
            Persisted,
            Dismissed,
        ] {
            assert!(!Persisted.can_transition_to(next));
            assert!(!Dismissed.can_transition_to(next));
        }
    }

    #[test]
    fn skipping_the_mutation_states_is_illegal() {
        assert!(!SignalPresented.can_transition_to(Persisted));
        assert!(!NoSignal.can_transition_to(Persisted));
    }
}

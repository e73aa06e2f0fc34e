//! Per-conversation-turn dismissal tracking.
//!
//! A dismissed signal must not be re-surfaced for the same conversation
//! turn. Keyed by `conversation_id` + turn; shared across requests.

use dashmap::DashMap;
use std::sync::Arc;

/// Thread-safe dismissal tracker using `DashMap` for concurrent access.
#[derive(Debug, Clone, Default)]
pub struct DismissalTracker {
    dismissed: Arc<DashMap<(String, u64), ()>>,
}

impl DismissalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the signal for this conversation turn was dismissed.
    pub fn dismiss(&self, conversation_id: &str, turn: u64) {
        self.dismissed
            .insert((conversation_id.to_string(), turn), ());
    }

    /// Whether the signal for this conversation turn was dismissed.
    pub fn is_dismissed(&self, conversation_id: &str, turn: u64) -> bool {
        self.dismissed
            .contains_key(&(conversation_id.to_string(), turn))
    }

    /// Drop all turns for a conversation once it ends.
    pub fn forget_conversation(&self, conversation_id: &str) {
        self.dismissed
            .retain(|(cid, _), _| cid != conversation_id);
    }

    pub fn len(&self) -> usize {
        self.dismissed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dismissed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismissal_is_scoped_to_the_turn() {
        let tracker = DismissalTracker::new();
        tracker.dismiss("conv-1", 3);
        assert!(tracker.is_dismissed("conv-1", 3));
        assert!(!tracker.is_dismissed("conv-1", 4));
        assert!(!tracker.is_dismissed("conv-2", 3));
    }

    #[test]
    fn forgetting_a_conversation_clears_its_turns() {
        let tracker = DismissalTracker::new();
        tracker.dismiss("conv-1", 1);
        tracker.dismiss("conv-1", 2);
        tracker.dismiss("conv-2", 1);
        tracker.forget_conversation("conv-1");
        assert!(!tracker.is_dismissed("conv-1", 1));
        assert!(tracker.is_dismissed("conv-2", 1));
        assert_eq!(tracker.len(), 1);
    }
}

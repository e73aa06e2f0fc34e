//! ContinuityEngine: composes the matcher with the ledger.
//!
//! Detection is advisory and never blocks a save: any store failure on
//! the detection path degrades to "no signal" with a warning. Ledger
//! failures while applying a decision are user-visible data loss and
//! surface as hard errors.

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use muse_continuity::ContinuationMatcher;
use muse_core::config::ContinuityConfig;
use muse_core::errors::{MuseError, MuseResult};
use muse_core::models::{
    Confidence, ContinuationSignal, DetectionMethod, Idea, IdeaDraft, MergeStrategy,
    PriorDevelopment,
};
use muse_core::traits::{IContentMerger, IRecordStore};
use muse_core::validate::validate_draft;
use muse_ledger::VersionLedger;

use crate::decision::{ChosenAction, DecisionState};
use crate::dismissals::DismissalTracker;

/// Everything a decision needs beyond the chosen action.
#[derive(Debug, Clone)]
pub struct DecisionPayload {
    pub draft: IdeaDraft,
    pub conversation_id: Option<String>,
    /// Conversation turn, used to scope dismissals.
    pub turn: u64,
}

impl DecisionPayload {
    pub fn new(draft: IdeaDraft) -> Self {
        Self {
            draft,
            conversation_id: None,
            turn: 0,
        }
    }

    pub fn with_conversation(mut self, conversation_id: impl Into<String>, turn: u64) -> Self {
        self.conversation_id = Some(conversation_id.into());
        self.turn = turn;
        self
    }
}

/// Result of applying a decision.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    /// Terminal state reached: `Persisted` or `Dismissed`.
    pub state: DecisionState,
    /// The persisted idea; `None` only for dismissals.
    pub idea: Option<Idea>,
    /// False when the best-effort history append was lost, so the UI can
    /// note "history may be incomplete".
    pub history_recorded: bool,
}

/// The continuity orchestrator exposed to the request layer.
pub struct ContinuityEngine<'a> {
    store: &'a dyn IRecordStore,
    merger: Option<&'a dyn IContentMerger>,
    matcher: ContinuationMatcher,
    config: ContinuityConfig,
    dismissals: DismissalTracker,
}

impl<'a> ContinuityEngine<'a> {
    pub fn new(store: &'a dyn IRecordStore, config: ContinuityConfig) -> Self {
        Self {
            store,
            merger: None,
            matcher: ContinuationMatcher::new(),
            config,
            dismissals: DismissalTracker::new(),
        }
    }

    /// Wire the optional smart-merge collaborator.
    pub fn with_merger(mut self, merger: &'a dyn IContentMerger) -> Self {
        self.merger = Some(merger);
        self
    }

    /// Share a dismissal tracker across engine instances (one per request).
    pub fn with_dismissals(mut self, dismissals: DismissalTracker) -> Self {
        self.dismissals = dismissals;
        self
    }

    pub fn dismissals(&self) -> &DismissalTracker {
        &self.dismissals
    }

    /// Look for a continuation of a recently-touched idea.
    ///
    /// Returns `None` when nothing clears the floor, when the signal for
    /// this conversation turn was already dismissed, or when the store
    /// lookup fails (detection is advisory, never blocking).
    pub fn detect_continuation(
        &self,
        utterances: &[String],
        owner_id: &str,
        time_window_hours: i64,
        conversation: Option<(&str, u64)>,
    ) -> Option<ContinuationSignal> {
        if let Some((conversation_id, turn)) = conversation {
            if self.dismissals.is_dismissed(conversation_id, turn) {
                debug!(conversation_id, turn, "signal already dismissed this turn");
                return None;
            }
        }

        let now = Utc::now();
        let updated_after = now - Duration::hours(time_window_hours);
        let candidates = match self.store.find_ideas_by_owner(owner_id, updated_after) {
            Ok(ideas) => ideas,
            Err(err) => {
                warn!(owner_id, %err, "idea lookup failed, continuity detection degraded");
                return None;
            }
        };
        debug!(candidates = candidates.len(), "gathered continuation candidates");

        let matched = self.matcher.detect(utterances, &candidates, now)?;
        info!(
            idea_id = %matched.idea.id,
            confidence = %matched.confidence,
            action = ?matched.suggested_action,
            "continuation detected"
        );

        let recent_developments = self.recent_developments(matched.idea.id);
        Some(ContinuationSignal {
            idea_id: matched.idea.id,
            idea_title: matched.idea.title.clone(),
            confidence: matched.confidence,
            suggested_action: matched.suggested_action,
            detection_method: DetectionMethod::HeuristicMatch,
            hours_since_update: matched.hours_since_update,
            recent_developments,
            breakdown: matched.breakdown,
        })
    }

    /// Apply the user's decision for a surfaced (or absent) signal.
    /// Ownership scoping is the caller's responsibility; the ledger
    /// re-checks it on every mutation.
    pub fn apply_decision(
        &self,
        owner_id: &str,
        signal: Option<&ContinuationSignal>,
        action: ChosenAction,
        payload: DecisionPayload,
    ) -> MuseResult<SaveOutcome> {
        let ledger = self.ledger();
        match action {
            ChosenAction::AcceptUpdate => {
                let signal = require_signal(signal)?;
                let outcome = ledger.record_edit(
                    signal.idea_id,
                    owner_id,
                    &payload.draft,
                    payload.conversation_id,
                    None,
                    signal.confidence,
                )?;
                Ok(SaveOutcome {
                    state: DecisionState::Persisted,
                    history_recorded: outcome.history_recorded(),
                    idea: Some(outcome.idea),
                })
            }
            ChosenAction::Branch { note } => {
                let signal = require_signal(signal)?;
                let (branch, _entry) = ledger.create_branch(
                    signal.idea_id,
                    owner_id,
                    &payload.draft,
                    note,
                    payload.conversation_id,
                )?;
                Ok(SaveOutcome {
                    state: DecisionState::Persisted,
                    idea: Some(branch),
                    history_recorded: true,
                })
            }
            ChosenAction::SaveNew {
                save_type,
                original_id,
            } => {
                validate_draft(&payload.draft)?;
                // A plain creation: lightweight provenance only, no
                // history entry and no development count.
                let idea =
                    self.insert_new(owner_id.to_string(), &payload.draft, save_type, original_id)?;
                Ok(SaveOutcome {
                    state: DecisionState::Persisted,
                    idea: Some(idea),
                    history_recorded: true,
                })
            }
            ChosenAction::Dismiss => {
                if let Some(conversation_id) = payload.conversation_id.as_deref() {
                    self.dismissals.dismiss(conversation_id, payload.turn);
                }
                debug!("signal dismissed, nothing persisted");
                Ok(SaveOutcome {
                    state: DecisionState::Dismissed,
                    idea: None,
                    history_recorded: true,
                })
            }
        }
    }

    /// Save a brand-new idea with no signal involved.
    pub fn save_new_idea(
        &self,
        owner_id: &str,
        payload: DecisionPayload,
        save_type: Option<String>,
        original_id: Option<Uuid>,
    ) -> MuseResult<Idea> {
        validate_draft(&payload.draft)?;
        self.insert_new(owner_id.to_string(), &payload.draft, save_type, original_id)
    }

    /// Record a user-authored edit outside any continuation flow.
    pub fn record_manual_edit(
        &self,
        idea_id: Uuid,
        owner_id: &str,
        payload: DecisionPayload,
    ) -> MuseResult<SaveOutcome> {
        let outcome = self.ledger().record_edit(
            idea_id,
            owner_id,
            &payload.draft,
            payload.conversation_id,
            None,
            Confidence::default(),
        )?;
        Ok(SaveOutcome {
            state: DecisionState::Persisted,
            history_recorded: outcome.history_recorded(),
            idea: Some(outcome.idea),
        })
    }

    /// Fold a branch's recorded content back into a target idea.
    /// Passthrough to the ledger so the request layer has one surface.
    pub fn merge_branch(
        &self,
        source_entry_id: Uuid,
        target_id: Uuid,
        owner_id: &str,
        strategy: MergeStrategy,
    ) -> MuseResult<SaveOutcome> {
        let (idea, _entry) =
            self.ledger()
                .merge_branch(source_entry_id, target_id, owner_id, strategy)?;
        Ok(SaveOutcome {
            state: DecisionState::Persisted,
            idea: Some(idea),
            history_recorded: true,
        })
    }

    fn ledger(&self) -> VersionLedger<'a> {
        match self.merger {
            Some(merger) => VersionLedger::new(self.store).with_merger(merger),
            None => VersionLedger::new(self.store),
        }
    }

    fn insert_new(
        &self,
        owner_id: String,
        draft: &IdeaDraft,
        save_type: Option<String>,
        original_id: Option<Uuid>,
    ) -> MuseResult<Idea> {
        let mut idea = Idea::new(owner_id, draft);
        idea.save_type = save_type;
        idea.original_id = original_id;
        self.store.insert_idea(&idea)?;
        info!(idea_id = %idea.id, "saved new idea");
        Ok(idea)
    }

    /// Up to N prior development summaries, newest first. A history
    /// lookup failure degrades to an empty list.
    fn recent_developments(&self, idea_id: Uuid) -> Vec<PriorDevelopment> {
        match self
            .store
            .recent_history(idea_id, self.config.max_recent_developments)
        {
            Ok(entries) => entries
                .iter()
                .map(|e| PriorDevelopment {
                    date: e.created_at.format("%b %e, %Y").to_string(),
                    label: e.display_label(),
                })
                .collect(),
            Err(err) => {
                warn!(%idea_id, %err, "history lookup failed, omitting prior developments");
                Vec::new()
            }
        }
    }
}

fn require_signal(signal: Option<&ContinuationSignal>) -> MuseResult<&ContinuationSignal> {
    signal.ok_or(MuseError::Validation {
        field: "signal",
        reason: "this action requires a surfaced continuation signal".into(),
    })
}

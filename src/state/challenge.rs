//! Daily-challenge attempt state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the challenge dialog: one question, one textarea, a submit button
//! whose appearance tracks the backend's verdict, and a Next action that is
//! only offered while submissions remain today. The whole attempt is
//! ephemeral: nothing here is ever persisted.

#[cfg(test)]
#[path = "challenge_test.rs"]
mod challenge_test;

use crate::net::types::{ChallengeOutcome, ChallengeQuestion};

/// Ratings at or above this count as a pass.
pub const PASSING_RATING: i32 = 6;

/// Lifecycle of one submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Answer still editable, nothing in flight.
    #[default]
    Idle,
    /// Waiting on the backend's rating.
    Submitting,
    /// Rated at or above [`PASSING_RATING`].
    Passed,
    /// Rated below [`PASSING_RATING`].
    Failed,
}

/// State of the challenge dialog.
#[derive(Clone, Debug, Default)]
pub struct ChallengeState {
    pub question: Option<ChallengeQuestion>,
    pub answer: String,
    pub phase: SubmitPhase,
    /// Feedback text from the last rating, shown under the answer box.
    pub insight: Option<String>,
    /// Submissions remaining today; `None` until the first verdict arrives.
    pub attempts_left: Option<i32>,
}

impl ChallengeState {
    /// Load a freshly fetched question, keeping any attempts counter from
    /// earlier submissions this session.
    pub fn with_question(&self, question: ChallengeQuestion) -> Self {
        Self {
            question: Some(question),
            answer: String::new(),
            phase: SubmitPhase::Idle,
            insight: None,
            attempts_left: self.attempts_left,
        }
    }

    /// Whether a submission may be sent right now.
    pub fn can_submit(&self) -> bool {
        self.phase == SubmitPhase::Idle
            && self.question.is_some()
            && !self.answer.trim().is_empty()
    }

    /// Mark a submission as in flight.
    pub fn begin_submit(&mut self) {
        self.phase = SubmitPhase::Submitting;
    }

    /// Fold the backend's verdict into the dialog. Each verdict carries the
    /// authoritative remaining-attempts counter.
    pub fn apply_outcome(&mut self, outcome: &ChallengeOutcome) {
        self.phase = if outcome.rating >= PASSING_RATING {
            SubmitPhase::Passed
        } else {
            SubmitPhase::Failed
        };
        self.insight = Some(outcome.insight.clone());
        self.attempts_left = Some(outcome.left);
    }

    /// A submission failed in transit; the answer stays editable.
    pub fn submit_failed(&mut self) {
        self.phase = SubmitPhase::Idle;
    }

    /// Whether the Next action is offered: only after a verdict, and only
    /// while attempts remain today.
    pub fn can_advance(&self) -> bool {
        matches!(self.phase, SubmitPhase::Passed | SubmitPhase::Failed)
            && self.attempts_left.is_some_and(|left| left > 0)
    }

    /// Label for the submit button in the current phase.
    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmitPhase::Idle => "Submit",
            SubmitPhase::Submitting => "Rating...",
            SubmitPhase::Passed => "Success",
            SubmitPhase::Failed => "Failed",
        }
    }

    /// Modifier class for the submit button in the current phase.
    pub fn submit_class(&self) -> &'static str {
        match self.phase {
            SubmitPhase::Idle | SubmitPhase::Submitting => "btn btn--contrast",
            SubmitPhase::Passed => "btn btn--success",
            SubmitPhase::Failed => "btn btn--danger",
        }
    }
}

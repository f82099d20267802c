//! Feedback submission workflow.
//!
//! Wraps one write with the tri-state lifecycle the form layer observes.
//! The workflow holds no form data: on success the caller clears its own
//! inputs, on failure it keeps them so the user can retry.

use snackboard_core::models::feedback::FeedbackSubmission;

use crate::feedback::FeedbackRepository;

/// Observable state of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    /// Carries the id of the recorded feedback document.
    Succeeded(String),
    Failed(String),
}

pub struct FeedbackSubmissionFlow {
    feedback: FeedbackRepository,
    state: SubmitState,
}

impl FeedbackSubmissionFlow {
    pub fn new(feedback: FeedbackRepository) -> Self {
        Self {
            feedback,
            state: SubmitState::Idle,
        }
    }

    /// Run one submission attempt. At most one may be in flight per
    /// instance; preventing overlapping calls is the caller's job — this
    /// workflow neither queues nor rejects them.
    pub async fn submit(&mut self, submission: FeedbackSubmission) {
        self.state = SubmitState::Submitting;
        self.state = match self.feedback.submit(submission).await {
            Ok(id) => SubmitState::Succeeded(id),
            Err(e) => SubmitState::Failed(e.to_string()),
        };
    }

    /// Back to idle for a second submission. Nothing is re-validated.
    pub fn reset(&mut self) {
        self.state = SubmitState::Idle;
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }
}

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use snackboard_core::models::feedback::{Feedback, FeedbackSubmission};
use snackboard_repo::submission::{FeedbackSubmissionFlow, SubmitState};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Created {
    pub id: String,
}

pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(submission): Json<FeedbackSubmission>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let mut flow = FeedbackSubmissionFlow::new(state.feedback.clone());
    flow.submit(submission).await;

    match flow.state() {
        SubmitState::Succeeded(id) => Ok((StatusCode::CREATED, Json(Created { id: id.clone() }))),
        SubmitState::Failed(reason) => Err(ApiError::Internal(reason.clone())),
        _ => Err(ApiError::Internal("submission did not complete".to_string())),
    }
}

pub async fn list_feedback(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<Vec<Feedback>>, ApiError> {
    let feedback = state.feedback.list_by_year(year).await?;
    Ok(Json(feedback))
}

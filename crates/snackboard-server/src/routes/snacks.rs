use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use snackboard_core::models::snack::{Snack, SnackDraft, SnackPatch};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Created {
    pub id: String,
}

pub async fn list_snacks(State(state): State<AppState>) -> Result<Json<Vec<Snack>>, ApiError> {
    let snacks = state.snacks.list_all().await?;
    Ok(Json(snacks))
}

pub async fn create_snack(
    State(state): State<AppState>,
    Json(draft): Json<SnackDraft>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let id = state.snacks.create(draft).await?;
    Ok((StatusCode::CREATED, Json(Created { id })))
}

pub async fn update_snack(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<SnackPatch>,
) -> Result<Json<()>, ApiError> {
    state.snacks.update(&id, patch).await?;
    Ok(Json(()))
}

pub async fn delete_snack(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<()>, ApiError> {
    state.snacks.delete(&id).await?;
    Ok(Json(()))
}

/// Flip one year in a snack's offered set. The membership decision is made
/// against the snack as currently stored; the mutation itself is a single
/// atomic transform.
pub async fn toggle_year(
    State(state): State<AppState>,
    Path((id, year)): Path<(String, i32)>,
) -> Result<Json<()>, ApiError> {
    let snacks = state.snacks.list_all().await?;
    let snack = snacks
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("snack not found: {id}")))?;

    state.snacks.toggle_year(&snack, year).await?;
    Ok(Json(()))
}

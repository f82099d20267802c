use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use snackboard_core::categories;
use snackboard_core::models::snack::Snack;
use snackboard_repo::catalog::{CatalogQuery, CatalogState};

use crate::error::ApiError;
use crate::state::AppState;

/// One category bucket of the year's catalog. `category` is the raw stored
/// string; `display_name` is the lossy display mapping (unknown categories
/// render as "Other").
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSection {
    pub category: String,
    pub display_name: &'static str,
    pub snacks: Vec<Snack>,
}

pub async fn get_catalog(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<Vec<CatalogSection>>, ApiError> {
    let mut query = CatalogQuery::new(state.snacks.clone());
    query.load(year).await;

    match query.into_state() {
        CatalogState::Ready(grouped) => Ok(Json(
            grouped
                .into_iter()
                .map(|(category, snacks)| CatalogSection {
                    display_name: categories::display_name(&category),
                    category,
                    snacks,
                })
                .collect(),
        )),
        CatalogState::Failed(reason) => Err(ApiError::Internal(reason)),
        CatalogState::Loading => Err(ApiError::Internal("catalog load did not complete".to_string())),
    }
}

use axum::Json;
use serde::Serialize;

use snackboard_core::categories::Category;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: &'static str,
    pub display_name: &'static str,
}

/// The fixed category set, in presentation order. Drives the category tabs
/// and the admin form's category picker.
pub async fn list_categories() -> Json<Vec<CategoryInfo>> {
    Json(
        Category::ALL
            .into_iter()
            .map(|category| CategoryInfo {
                id: category.as_str(),
                display_name: category.display_name(),
            })
            .collect(),
    )
}

use serde::{Deserialize, Serialize};

/// A catalog entry as persisted in the `snacks` collection.
///
/// `category` is kept as the raw stored string; see
/// [`crate::categories`] for the display mapping. `created_at` is assigned by
/// the store at creation and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snack {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub years_offered: Vec<i32>,
    pub created_at: jiff::Timestamp,
}

/// Input to snack creation. The document id and `createdAt` are derived and
/// assigned on the way in, so neither appears here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnackDraft {
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub years_offered: Vec<i32>,
}

/// Partial update for a snack. Only the supplied fields are merged into the
/// stored document; absent fields are left untouched. The id and `createdAt`
/// cannot be named here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnackPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_offered: Option<Vec<i32>>,
}

/// Collapse duplicate years, keeping first-occurrence order.
///
/// `yearsOffered` is a set represented as an ordered sequence; this is the
/// single place duplicates are dropped on the way into the store.
pub fn collapse_years(years: Vec<i32>) -> Vec<i32> {
    let mut collapsed = Vec::with_capacity(years.len());
    for year in years {
        if !collapsed.contains(&year) {
            collapsed.push(year);
        }
    }
    collapsed
}

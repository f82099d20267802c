//! Catalog query workflow: fetch one year's snacks and partition them by
//! category for the view layer.

use std::collections::BTreeMap;

use snackboard_core::models::snack::Snack;

use crate::snacks::SnackRepository;

/// Partition snacks by their raw category string, preserving the order they
/// were fetched in within each bucket. Categories with no snacks are simply
/// absent from the mapping.
pub fn group_by_category(snacks: Vec<Snack>) -> BTreeMap<String, Vec<Snack>> {
    let mut grouped: BTreeMap<String, Vec<Snack>> = BTreeMap::new();
    for snack in snacks {
        grouped.entry(snack.category.clone()).or_default().push(snack);
    }
    grouped
}

/// Observable state of a catalog load.
#[derive(Debug, Clone)]
pub enum CatalogState {
    Loading,
    Ready(BTreeMap<String, Vec<Snack>>),
    Failed(String),
}

/// One read-and-group operation for the view layer.
///
/// Starts out loading; `load` is re-invoked whenever the target year
/// changes. Errors are captured as a failed state with a human-readable
/// reason — nothing is retried here.
pub struct CatalogQuery {
    snacks: SnackRepository,
    state: CatalogState,
}

impl CatalogQuery {
    pub fn new(snacks: SnackRepository) -> Self {
        Self {
            snacks,
            state: CatalogState::Loading,
        }
    }

    pub async fn load(&mut self, year: i32) {
        self.state = CatalogState::Loading;
        self.state = match self.snacks.list_by_year(year).await {
            Ok(snacks) => CatalogState::Ready(group_by_category(snacks)),
            Err(e) => CatalogState::Failed(e.to_string()),
        };
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn into_state(self) -> CatalogState {
        self.state
    }
}

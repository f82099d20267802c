//! Category grouping and the catalog query workflow.

use std::sync::Arc;

use async_trait::async_trait;

use snackboard_core::models::snack::{Snack, SnackDraft};
use snackboard_repo::catalog::{group_by_category, CatalogQuery, CatalogState};
use snackboard_repo::snacks::SnackRepository;
use snackboard_store::document::{Document, Fields};
use snackboard_store::error::StoreError;
use snackboard_store::filter::{Filter, Patch};
use snackboard_store::memory::MemoryStore;
use snackboard_store::store::DocumentStore;

fn snack(id: &str, category: &str, years: &[i32]) -> Snack {
    Snack {
        id: id.to_string(),
        name: id.to_string(),
        category: category.to_string(),
        image_url: String::new(),
        years_offered: years.to_vec(),
        created_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn grouping_covers_every_snack_exactly_once() {
    let snacks = vec![
        snack("a", "chips", &[2025]),
        snack("b", "ramen", &[2025]),
        snack("c", "chips", &[2025]),
        snack("d", "weird", &[2025]),
    ];
    let total = snacks.len();

    let grouped = group_by_category(snacks);
    assert_eq!(grouped.values().map(Vec::len).sum::<usize>(), total);
    assert_eq!(grouped.len(), 3);
}

#[test]
fn grouping_preserves_fetched_order_within_buckets() {
    let grouped = group_by_category(vec![
        snack("a", "chips", &[2025]),
        snack("b", "chips", &[2025]),
    ]);
    let ids: Vec<&str> = grouped["chips"].iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn empty_categories_are_absent() {
    let grouped = group_by_category(vec![snack("a", "chips", &[2025])]);
    assert!(!grouped.contains_key("sweets"));
}

fn draft(name: &str, category: &str, years: &[i32]) -> SnackDraft {
    SnackDraft {
        name: name.to_string(),
        category: category.to_string(),
        image_url: String::new(),
        years_offered: years.to_vec(),
    }
}

#[tokio::test]
async fn load_partitions_one_year_of_snacks() {
    let repo = SnackRepository::new(Arc::new(MemoryStore::new()));
    repo.create(draft("Hot Cheetos!!", "chips", &[2025]))
        .await
        .unwrap();
    repo.create(draft("Shin Ramyun", "ramen", &[2025]))
        .await
        .unwrap();
    repo.create(draft("Old Timer", "chips", &[2019]))
        .await
        .unwrap();

    let mut query = CatalogQuery::new(repo);
    assert!(matches!(query.state(), CatalogState::Loading));

    query.load(2025).await;
    let CatalogState::Ready(grouped) = query.state() else {
        panic!("expected ready state");
    };

    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped["chips"].len(), 1);
    assert_eq!(grouped["chips"][0].id, "hot-cheetos");
    for snacks in grouped.values() {
        for snack in snacks {
            assert!(snack.years_offered.contains(&2025));
        }
    }
}

#[tokio::test]
async fn reload_for_a_different_year_replaces_the_mapping() {
    let repo = SnackRepository::new(Arc::new(MemoryStore::new()));
    repo.create(draft("Hot Cheetos!!", "chips", &[2025]))
        .await
        .unwrap();

    let mut query = CatalogQuery::new(repo);
    query.load(2025).await;
    query.load(2019).await;

    let CatalogState::Ready(grouped) = query.state() else {
        panic!("expected ready state");
    };
    assert!(grouped.is_empty());
}

struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn get_documents(
        &self,
        _collection: &str,
        _filter: Option<&Filter>,
    ) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn set_document(
        &self,
        _collection: &str,
        _id: &str,
        _fields: Fields,
    ) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn update_document(
        &self,
        _collection: &str,
        _id: &str,
        _patch: Patch,
    ) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn delete_document(&self, _collection: &str, _id: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }
}

#[tokio::test]
async fn store_failure_lands_in_failed_with_a_reason() {
    let mut query = CatalogQuery::new(SnackRepository::new(Arc::new(FailingStore)));
    query.load(2025).await;

    let CatalogState::Failed(reason) = query.state() else {
        panic!("expected failed state");
    };
    assert!(reason.contains("connection refused"));
}

//! Feedback repository behavior over the in-memory store.

use std::sync::Arc;

use snackboard_core::models::feedback::FeedbackSubmission;
use snackboard_repo::feedback::FeedbackRepository;
use snackboard_store::memory::MemoryStore;

fn repo() -> FeedbackRepository {
    FeedbackRepository::new(Arc::new(MemoryStore::new()))
}

fn submission(liked: &[&str], year: i32) -> FeedbackSubmission {
    FeedbackSubmission {
        liked_snacks: liked.iter().map(|s| s.to_string()).collect(),
        comments: String::new(),
        year,
    }
}

#[tokio::test]
async fn submit_then_list_by_matching_year() {
    let repo = repo();
    let id = repo
        .submit(submission(&["hot-cheetos"], 2025))
        .await
        .unwrap();

    let recorded = repo.list_by_year(2025).await.unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].id, id);
    assert_eq!(recorded[0].liked_snacks, vec!["hot-cheetos"]);
    assert_eq!(recorded[0].year, 2025);
}

#[tokio::test]
async fn list_by_other_year_excludes_the_submission() {
    let repo = repo();
    repo.submit(submission(&["hot-cheetos"], 2025))
        .await
        .unwrap();

    assert!(repo.list_by_year(2024).await.unwrap().is_empty());
}

#[tokio::test]
async fn submissions_get_distinct_ids() {
    let repo = repo();
    let first = repo.submit(submission(&[], 2025)).await.unwrap();
    let second = repo.submit(submission(&[], 2025)).await.unwrap();

    assert_ne!(first, second);
    assert_eq!(repo.list_by_year(2025).await.unwrap().len(), 2);
}

#[tokio::test]
async fn empty_likes_and_comments_are_accepted() {
    let repo = repo();
    repo.submit(submission(&[], 2025)).await.unwrap();

    let recorded = repo.list_by_year(2025).await.unwrap();
    assert!(recorded[0].liked_snacks.is_empty());
    assert!(recorded[0].comments.is_empty());
}

#[tokio::test]
async fn liked_ids_are_not_checked_against_the_catalog() {
    // Weak references: a liked id may point at a snack that never existed
    // or was deleted after the fact.
    let repo = repo();
    repo.submit(submission(&["no-such-snack"], 2025))
        .await
        .unwrap();

    let recorded = repo.list_by_year(2025).await.unwrap();
    assert_eq!(recorded[0].liked_snacks, vec!["no-such-snack"]);
}

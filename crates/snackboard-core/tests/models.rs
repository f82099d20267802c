//! Wire-shape checks for the persisted document models.

use snackboard_core::models::feedback::Feedback;
use snackboard_core::models::snack::{Snack, SnackPatch};

#[test]
fn snack_round_trips_camel_case_fields() {
    let json = serde_json::json!({
        "id": "hot-cheetos",
        "name": "Hot Cheetos!!",
        "category": "chips",
        "imageUrl": "https://cdn/hc.png",
        "yearsOffered": [2024, 2025],
        "createdAt": "2025-01-05T12:00:00Z",
    });

    let snack: Snack = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(snack.image_url, "https://cdn/hc.png");
    assert_eq!(snack.years_offered, vec![2024, 2025]);

    assert_eq!(serde_json::to_value(&snack).unwrap(), json);
}

#[test]
fn patch_serializes_only_supplied_fields() {
    let patch = SnackPatch {
        category: Some("ramen".to_string()),
        ..SnackPatch::default()
    };
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        serde_json::json!({"category": "ramen"})
    );
}

#[test]
fn feedback_uses_camel_case_liked_snacks() {
    let json = serde_json::json!({
        "id": "b2c9e8a0-0000-4000-8000-000000000000",
        "likedSnacks": ["hot-cheetos"],
        "comments": "",
        "year": 2025,
        "timestamp": "2025-01-05T12:00:00Z",
    });
    let feedback: Feedback = serde_json::from_value(json).unwrap();
    assert_eq!(feedback.liked_snacks, vec!["hot-cheetos"]);
    assert_eq!(feedback.year, 2025);
}

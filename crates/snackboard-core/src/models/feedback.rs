use serde::{Deserialize, Serialize};

/// A submission as persisted in the `feedback` collection.
///
/// Immutable after creation — there is no update or delete for feedback.
/// `liked_snacks` holds snack ids by value; nothing enforces that the
/// referenced snacks still exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub liked_snacks: Vec<String>,
    pub comments: String,
    pub year: i32,
    pub timestamp: jiff::Timestamp,
}

/// What an attendee submits: liked snack ids (may be empty), free-text
/// comments (may be empty), and the feedback year. The document id and
/// server timestamp are assigned at write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    pub liked_snacks: Vec<String>,
    pub comments: String,
    pub year: i32,
}

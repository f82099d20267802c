use serde_json::Value;
use uuid::Uuid;

use snackboard_core::collections::{field, FEEDBACK};
use snackboard_core::models::feedback::{Feedback, FeedbackSubmission};
use snackboard_store::document::{server_timestamp, Document};
use snackboard_store::filter::Filter;
use snackboard_store::store::SharedStore;

use crate::error::RepoError;

/// Submission and retrieval over the `feedback` collection. Feedback is
/// write-once: no update or delete exists.
#[derive(Clone)]
pub struct FeedbackRepository {
    store: SharedStore,
}

impl FeedbackRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Record one submission and return its id.
    ///
    /// Ids are store-generated UUIDs, so concurrent submissions cannot
    /// collide. The liked snack ids are taken as-is — they are weak
    /// references and nothing checks that the snacks still exist. The
    /// `timestamp` field is assigned by the store.
    pub async fn submit(&self, submission: FeedbackSubmission) -> Result<String, RepoError> {
        let id = Uuid::new_v4().to_string();
        let Value::Object(mut fields) = serde_json::to_value(&submission)? else {
            unreachable!("a submission always serializes to an object");
        };
        fields.insert(field::TIMESTAMP.to_string(), server_timestamp());

        self.store.set_document(FEEDBACK, &id, fields).await?;
        tracing::debug!(%id, year = submission.year, "recorded feedback");
        Ok(id)
    }

    /// All feedback recorded for `year`. Unordered.
    pub async fn list_by_year(&self, year: i32) -> Result<Vec<Feedback>, RepoError> {
        let filter = Filter::field_equals(field::YEAR, year);
        let documents = self.store.get_documents(FEEDBACK, Some(&filter)).await?;
        documents.into_iter().map(decode_feedback).collect()
    }
}

fn decode_feedback(document: Document) -> Result<Feedback, RepoError> {
    let Document { id, mut fields } = document;
    fields.insert("id".to_string(), Value::String(id.clone()));
    serde_json::from_value(Value::Object(fields)).map_err(|source| RepoError::Decode {
        collection: FEEDBACK.to_string(),
        id,
        source,
    })
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::document::{Document, Fields};
use crate::error::StoreError;
use crate::filter::{Filter, Patch};

/// The generic client interface to the external document database.
///
/// Collections hold schema-flexible documents addressed by string id. Every
/// operation is one independent request; there is no atomicity spanning
/// documents, no retry, and no cancellation beyond dropping the future.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents in a collection, optionally filtered. Result ordering
    /// is store-defined and not guaranteed stable.
    async fn get_documents(
        &self,
        collection: &str,
        filter: Option<&Filter>,
    ) -> Result<Vec<Document>, StoreError>;

    /// Create-or-replace: succeeds whether or not a document exists at `id`,
    /// fully overwriting any prior content. Server-timestamp sentinels in
    /// `fields` are resolved to the store's current time.
    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: Fields,
    ) -> Result<(), StoreError>;

    /// Merge `patch.fields` into the document and apply `patch.transforms`
    /// atomically. Fails with [`StoreError::NotFound`] if no document exists
    /// at `id`.
    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        patch: Patch,
    ) -> Result<(), StoreError>;

    /// Remove the document. Idempotent: deleting a missing id is not an
    /// error.
    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}

pub type SharedStore = Arc<dyn DocumentStore>;

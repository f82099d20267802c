//! In-memory backend.
//!
//! One async `RwLock` over the whole store: every operation is a single
//! critical section, which gives the same per-document atomicity the
//! external store promises. Used by the server binary and by tests.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::document::{is_server_timestamp, Document, Fields};
use crate::error::StoreError;
use crate::filter::{Filter, Patch};
use crate::store::DocumentStore;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Fields>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn resolve_server_timestamps(fields: &mut Fields) {
    let now = jiff::Timestamp::now();
    for value in fields.values_mut() {
        if is_server_timestamp(value) {
            *value = Value::String(now.to_string());
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get_documents(
        &self,
        collection: &str,
        filter: Option<&Filter>,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(documents
            .iter()
            .filter(|(_, fields)| filter.is_none_or(|f| f.matches(fields)))
            .map(|(id, fields)| Document {
                id: id.clone(),
                fields: fields.clone(),
            })
            .collect())
    }

    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        mut fields: Fields,
    ) -> Result<(), StoreError> {
        resolve_server_timestamps(&mut fields);

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);

        tracing::debug!(collection, id, "set document");
        Ok(())
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        mut patch: Patch,
    ) -> Result<(), StoreError> {
        resolve_server_timestamps(&mut patch.fields);

        let mut collections = self.collections.write().await;
        let document = collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;

        for (field, value) in patch.fields {
            document.insert(field, value);
        }
        for transform in &patch.transforms {
            transform.apply(document);
        }

        tracing::debug!(collection, id, "update document");
        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        if let Some(documents) = collections.get_mut(collection) {
            documents.remove(id);
        }

        tracing::debug!(collection, id, "delete document");
        Ok(())
    }
}

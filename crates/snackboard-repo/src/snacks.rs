use serde_json::Value;

use snackboard_core::collections::{field, SNACKS};
use snackboard_core::ids::sanitize_id;
use snackboard_core::models::snack::{collapse_years, Snack, SnackDraft, SnackPatch};
use snackboard_core::validate::{validate_draft, validate_patch};
use snackboard_store::document::{server_timestamp, Document};
use snackboard_store::filter::{FieldTransform, Filter, Patch};
use snackboard_store::store::SharedStore;

use crate::error::RepoError;

/// Catalog operations over the `snacks` collection.
#[derive(Clone)]
pub struct SnackRepository {
    store: SharedStore,
}

impl SnackRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All snacks offered in `year`. Unordered; the store decides.
    pub async fn list_by_year(&self, year: i32) -> Result<Vec<Snack>, RepoError> {
        let filter = Filter::array_contains(field::YEARS_OFFERED, year);
        let documents = self.store.get_documents(SNACKS, Some(&filter)).await?;
        documents.into_iter().map(decode_snack).collect()
    }

    /// The whole catalog, admin view only.
    pub async fn list_all(&self) -> Result<Vec<Snack>, RepoError> {
        let documents = self.store.get_documents(SNACKS, None).await?;
        documents.into_iter().map(decode_snack).collect()
    }

    /// Create a snack, returning its derived id.
    ///
    /// The id comes from the sanitized name; the write is create-or-replace,
    /// so a name that sanitizes to an existing id overwrites that document.
    /// `createdAt` is assigned by the store.
    pub async fn create(&self, mut draft: SnackDraft) -> Result<String, RepoError> {
        validate_draft(&draft)?;
        draft.years_offered = collapse_years(draft.years_offered);

        let id = sanitize_id(&draft.name);
        let Value::Object(mut fields) = serde_json::to_value(&draft)? else {
            unreachable!("a draft always serializes to an object");
        };
        fields.insert(field::CREATED_AT.to_string(), server_timestamp());

        self.store.set_document(SNACKS, &id, fields).await?;
        tracing::debug!(%id, "created snack");
        Ok(id)
    }

    /// Merge the supplied fields into an existing snack. The id and
    /// `createdAt` are never touched, even when the name changes.
    pub async fn update(&self, id: &str, mut patch: SnackPatch) -> Result<(), RepoError> {
        validate_patch(&patch)?;
        if let Some(years) = patch.years_offered.take() {
            patch.years_offered = Some(collapse_years(years));
        }

        let Value::Object(fields) = serde_json::to_value(&patch)? else {
            unreachable!("a patch always serializes to an object");
        };

        self.store
            .update_document(SNACKS, id, Patch::fields(fields))
            .await?;
        Ok(())
    }

    /// Remove a snack. Deleting an id that is already gone succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), RepoError> {
        self.store.delete_document(SNACKS, id).await?;
        Ok(())
    }

    /// Add `year` to the snack's offered set if absent, remove it if
    /// present — one atomic store-side transform, so concurrent toggles of
    /// different years cannot lose each other's writes.
    pub async fn toggle_year(&self, snack: &Snack, year: i32) -> Result<(), RepoError> {
        let transform = if snack.years_offered.contains(&year) {
            FieldTransform::array_remove(field::YEARS_OFFERED, year)
        } else {
            FieldTransform::array_union(field::YEARS_OFFERED, year)
        };

        self.store
            .update_document(SNACKS, &snack.id, Patch::transform(transform))
            .await?;
        Ok(())
    }
}

fn decode_snack(document: Document) -> Result<Snack, RepoError> {
    let Document { id, mut fields } = document;
    fields.insert("id".to_string(), Value::String(id.clone()));
    serde_json::from_value(Value::Object(fields)).map_err(|source| RepoError::Decode {
        collection: SNACKS.to_string(),
        id,
        source,
    })
}

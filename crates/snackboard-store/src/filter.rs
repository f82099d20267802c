use serde_json::Value;

use crate::document::Fields;

/// Query predicate for [`crate::store::DocumentStore::get_documents`].
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches documents whose field equals the value.
    FieldEquals { field: String, value: Value },
    /// Matches documents whose array field includes the value.
    ArrayContains { field: String, value: Value },
}

impl Filter {
    pub fn field_equals(field: &str, value: impl Into<Value>) -> Filter {
        Filter::FieldEquals {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn array_contains(field: &str, value: impl Into<Value>) -> Filter {
        Filter::ArrayContains {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn matches(&self, fields: &Fields) -> bool {
        match self {
            Filter::FieldEquals { field, value } => fields.get(field) == Some(value),
            Filter::ArrayContains { field, value } => match fields.get(field) {
                Some(Value::Array(items)) => items.contains(value),
                _ => false,
            },
        }
    }
}

/// Atomic store-side mutation of an array field, applied under the store's
/// per-document atomicity. Two clients mutating the same array field do not
/// lose each other's writes the way client-side read-modify-write would.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldTransform {
    /// Append the value unless an equal element is already present.
    ArrayUnion { field: String, value: Value },
    /// Remove every element equal to the value.
    ArrayRemove { field: String, value: Value },
}

impl FieldTransform {
    pub fn array_union(field: &str, value: impl Into<Value>) -> FieldTransform {
        FieldTransform::ArrayUnion {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn array_remove(field: &str, value: impl Into<Value>) -> FieldTransform {
        FieldTransform::ArrayRemove {
            field: field.to_string(),
            value: value.into(),
        }
    }

    /// Apply the transform to a document's fields. A missing or non-array
    /// field is treated as an empty array.
    pub fn apply(&self, fields: &mut Fields) {
        match self {
            FieldTransform::ArrayUnion { field, value } => {
                let entry = fields
                    .entry(field.clone())
                    .or_insert_with(|| Value::Array(Vec::new()));
                if !matches!(entry, Value::Array(_)) {
                    *entry = Value::Array(Vec::new());
                }
                if let Value::Array(items) = entry {
                    if !items.contains(value) {
                        items.push(value.clone());
                    }
                }
            }
            FieldTransform::ArrayRemove { field, value } => {
                if let Some(Value::Array(items)) = fields.get_mut(field) {
                    items.retain(|item| item != value);
                }
            }
        }
    }
}

/// A partial write: plain field merges plus atomic transforms. Fields not
/// named are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    pub fields: Fields,
    pub transforms: Vec<FieldTransform>,
}

impl Patch {
    pub fn fields(fields: Fields) -> Patch {
        Patch {
            fields,
            transforms: Vec::new(),
        }
    }

    pub fn transform(transform: FieldTransform) -> Patch {
        Patch {
            fields: Fields::new(),
            transforms: vec![transform],
        }
    }
}

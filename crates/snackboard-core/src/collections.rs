//! Collection and field name conventions.
//!
//! Pure string constants — these define the canonical layout of documents
//! in the snackboard store.

pub const SNACKS: &str = "snacks";
pub const FEEDBACK: &str = "feedback";

/// Field names the repositories address directly; everything else rides on
/// the models' serde shapes.
pub mod field {
    pub const YEARS_OFFERED: &str = "yearsOffered";
    pub const CREATED_AT: &str = "createdAt";
    pub const YEAR: &str = "year";
    pub const TIMESTAMP: &str = "timestamp";
}

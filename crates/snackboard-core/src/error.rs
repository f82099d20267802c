use thiserror::Error;

/// Typed rejection returned by [`crate::validate`] before anything is
/// dispatched to the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("name '{0}' does not yield a usable id")]
    UnusableName(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("malformed image url: {0}")]
    MalformedImageUrl(String),
}

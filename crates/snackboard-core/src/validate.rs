//! Shared validation for both snack mutation paths.
//!
//! Both create and update run through here before anything is dispatched to
//! the store, so malformed input is rejected with a typed error instead of
//! relying on the store to refuse it.

use crate::error::ValidationError;
use crate::ids::sanitize_id;
use crate::models::snack::{SnackDraft, SnackPatch};

pub fn validate_draft(draft: &SnackDraft) -> Result<(), ValidationError> {
    validate_name(&draft.name)?;
    validate_category(&draft.category)?;
    validate_image_url(&draft.image_url)
}

pub fn validate_patch(patch: &SnackPatch) -> Result<(), ValidationError> {
    if let Some(name) = &patch.name {
        validate_name(name)?;
    }
    if let Some(category) = &patch.category {
        validate_category(category)?;
    }
    if let Some(image_url) = &patch.image_url {
        validate_image_url(image_url)?;
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if sanitize_id(name).is_empty() {
        return Err(ValidationError::UnusableName(name.to_string()));
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<(), ValidationError> {
    category.parse::<crate::categories::Category>().map(|_| ())
}

// Image urls are either absolute http(s) urls or site-relative paths; an
// empty string means "no image yet" and is allowed.
fn validate_image_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty()
        || url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with('/')
    {
        Ok(())
    } else {
        Err(ValidationError::MalformedImageUrl(url.to_string()))
    }
}

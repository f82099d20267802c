//! Snack id derivation.
//!
//! A snack's document id is derived from its name at creation time and never
//! re-derived afterwards, so renames leave the id untouched and `name` is a
//! display field from then on.

/// Derive a document id from a snack name.
///
/// Lowercases, strips everything that is not ASCII alphanumeric, whitespace,
/// or a hyphen, collapses whitespace runs and hyphen runs to a single hyphen,
/// and trims leading/trailing hyphens. Idempotent, so an already-derived id
/// passes through unchanged.
///
/// Two names that sanitize to the same id address the same document; creation
/// is create-or-replace, so the later write wins.
pub fn sanitize_id(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut id = String::with_capacity(lowered.len());

    for c in lowered.chars() {
        if c.is_ascii_alphanumeric() {
            id.push(c);
        } else if (c.is_whitespace() || c == '-') && !id.ends_with('-') {
            id.push('-');
        }
        // every other character is dropped
    }

    id.trim_matches('-').to_string()
}

use uuid::Uuid;

/// Generates a random identifier for resources created with PUT.
///
/// The value is a version 4 UUID in its canonical hyphenated lowercase form
/// (`8-4-4-4-12` hex digits), which is safe to use as a path segment.
///
/// # Examples
/// ```
/// use fiskaly_client::utils::id::generate_id;
/// let id = generate_id();
/// assert_eq!(id.len(), 36);
/// ```
#[must_use]
pub fn generate_id() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Returns the caller supplied id, or a freshly generated one when absent or blank
#[must_use]
pub fn id_or_generate(id: Option<&str>) -> String {
    match id {
        Some(id) if !id.trim().is_empty() => id.to_string(),
        _ => generate_id(),
    }
}

//! Field rules shared by the global document schemas.

use validator::ValidationError;

/// Required text must contain something other than whitespace, the same
/// rule the contact form applies to its required fields.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

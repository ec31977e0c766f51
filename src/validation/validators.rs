//! Custom validators for common validation patterns
//!
//! These validators extend the `validator` crate with rules the derive
//! attributes cannot express.

use validator::ValidationError;

/// Validates that a string contains at least one non-whitespace character
///
/// A length bound alone accepts strings made entirely of spaces; pair it
/// with this validator for name-like fields.
///
/// # Example
///
/// ```rust,no_run
/// use rollcall::validation::validate_not_blank;
/// use validator::Validate;
///
/// #[derive(Validate)]
/// struct Request {
///     #[validate(length(min = 1, max = 50), custom = "validate_not_blank")]
///     first_name: String,
/// }
/// ```
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some(std::borrow::Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

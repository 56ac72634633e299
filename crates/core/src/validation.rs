//! Input normalisation for form payloads and list filters.

use crate::{ClinicError, ClinicResult};
use clinic_types::NonEmptyText;

/// Trims `value` and rejects it if nothing is left.
///
/// # Errors
///
/// Returns [`ClinicError::InvalidInput`] naming `field` if the value is blank.
pub(crate) fn required_text(field: &str, value: &str) -> ClinicResult<NonEmptyText> {
    NonEmptyText::new(value)
        .map_err(|_| ClinicError::InvalidInput(format!("{field} cannot be empty")))
}

/// A trimmed, case-insensitive substring filter. An empty filter matches everything.
#[derive(Clone, Debug)]
pub(crate) struct TextFilter(Option<String>);

impl TextFilter {
    pub(crate) fn new(raw: &str) -> Self {
        let needle = raw.trim();
        if needle.is_empty() {
            Self(None)
        } else {
            Self(Some(needle.to_lowercase()))
        }
    }

    pub(crate) fn matches(&self, haystack: &str) -> bool {
        match &self.0 {
            None => true,
            Some(needle) => haystack.to_lowercase().contains(needle.as_str()),
        }
    }
}

//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Services never read process-wide environment variables while
//! handling a request.

use crate::constants::DEFAULT_MAX_ITEMS_PER_PAGE;
use crate::{ClinicError, ClinicResult};
use clinic_types::Pagination;
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    max_items_per_page: u32,
    seed_file: Option<PathBuf>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::InvalidInput`] if `max_items_per_page` is zero.
    pub fn new(max_items_per_page: u32, seed_file: Option<PathBuf>) -> ClinicResult<Self> {
        if max_items_per_page == 0 {
            return Err(ClinicError::InvalidInput(
                "max_items_per_page must be at least 1".into(),
            ));
        }

        Ok(Self {
            max_items_per_page,
            seed_file,
        })
    }

    pub fn max_items_per_page(&self) -> u32 {
        self.max_items_per_page
    }

    pub fn seed_file(&self) -> Option<&Path> {
        self.seed_file.as_deref()
    }

    /// Validates a requested page window against the configured page-size cap.
    pub fn pagination(&self, items_per_page: u32, page: u32) -> ClinicResult<Pagination> {
        Ok(Pagination::new(
            items_per_page,
            page,
            self.max_items_per_page,
        )?)
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            max_items_per_page: DEFAULT_MAX_ITEMS_PER_PAGE,
            seed_file: None,
        }
    }
}

/// Parse the page-size cap from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_MAX_ITEMS_PER_PAGE`].
pub fn max_items_per_page_from_env_value(value: Option<String>) -> ClinicResult<u32> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_MAX_ITEMS_PER_PAGE),
        Some(v) => match v.parse::<u32>() {
            Ok(parsed) if parsed > 0 => Ok(parsed),
            _ => Err(ClinicError::InvalidInput(format!(
                "CLINIC_MAX_ITEMS_PER_PAGE must be a positive integer, got '{v}'"
            ))),
        },
    }
}

/// Resolve the optional seed file path. Empty values mean "no seed file".
pub fn seed_file_from_env_value(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

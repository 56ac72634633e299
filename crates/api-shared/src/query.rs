//! Defaults and lenient field parsing for list requests.
//!
//! List requests arrive either as JSON or as URL query strings. Query strings carry every value
//! as text, so an id filter may show up as `statusId=`, `statusId=null` or `statusId=3`.

use serde::{Deserialize, Deserializer};

/// Page size used when a list request omits `itemsPerPage`.
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;

/// Pages are 1-based.
pub const FIRST_PAGE: u32 = 1;

pub(crate) fn default_items_per_page() -> u32 {
    DEFAULT_ITEMS_PER_PAGE
}

pub(crate) fn default_page() -> u32 {
    FIRST_PAGE
}

/// Deserialises a nullable id filter.
///
/// `null`, a missing field, an empty string and the literal text `null` all mean "no filter".
pub(crate) fn optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) => {
            let text = text.trim();
            if text.is_empty() || text == "null" {
                return Ok(None);
            }
            text.parse::<i64>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid id filter: '{text}'")))
        }
    }
}

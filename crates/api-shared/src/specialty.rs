//! Specialty contracts.
//!
//! Specialties are the medical specialties a doctor practises. Doctors embed the resolved
//! [`Specialty`] values on read and reference them by bare id on write.

use crate::query::{default_items_per_page, default_page};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Specialty {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetSpecialtyListRequest {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
    /// Case-insensitive substring filter; empty matches everything.
    #[serde(default)]
    pub name: String,
}

impl Default for GetSpecialtyListRequest {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            page: default_page(),
            name: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GetSpecialtyListResponse {
    pub total: u64,
    pub items: Vec<Specialty>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SpecialtyForm {
    pub name: String,
}

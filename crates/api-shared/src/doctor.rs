//! Doctor contracts.

use crate::query::{default_items_per_page, default_page, optional_id};
use crate::{Specialty, Status};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A doctor as returned on read paths.
///
/// Unlike [`crate::Patient`], a doctor carries only the resolved `status` and no raw
/// `statusId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub status: Status,
    /// Ordered; may be empty.
    pub specialty: Vec<Specialty>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetDoctorListRequest {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
    /// Case-insensitive substring filter; empty matches everything.
    #[serde(default)]
    pub name: String,
    /// `null` means any status.
    #[serde(default, deserialize_with = "optional_id")]
    pub status_id: Option<i64>,
    /// `null` means any specialty.
    #[serde(default, deserialize_with = "optional_id")]
    pub specialty_id: Option<i64>,
}

impl Default for GetDoctorListRequest {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            page: default_page(),
            name: String::new(),
            status_id: None,
            specialty_id: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GetDoctorListResponse {
    pub total: u64,
    pub items: Vec<Doctor>,
}

/// Create/update body for a doctor.
///
/// `specialty` references specialties by bare id, never by embedded object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DoctorForm {
    pub name: String,
    pub status_id: Option<i64>,
    #[serde(default)]
    pub specialty: Vec<i64>,
}

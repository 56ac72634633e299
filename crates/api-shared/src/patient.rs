//! Patient contracts.
//!
//! A patient carries both the raw `statusId` and the resolved `status`. The server always
//! resolves `status` from `statusId`, so the two never disagree on read paths.

use crate::query::{default_items_per_page, default_page, optional_id};
use crate::Status;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub document_number: String,
    pub status_id: i64,
    pub status: Status,
    pub birth_date: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetPatientListRequest {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
    /// Case-insensitive substring filter; empty matches everything.
    #[serde(default)]
    pub name: String,
    /// Case-insensitive substring filter; empty matches everything.
    #[serde(default)]
    pub document_number: String,
    /// `null` means any status.
    #[serde(default, deserialize_with = "optional_id")]
    pub status_id: Option<i64>,
}

impl Default for GetPatientListRequest {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            page: default_page(),
            name: String::new(),
            document_number: String::new(),
            status_id: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GetPatientListResponse {
    pub total: u64,
    pub items: Vec<Patient>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatientForm {
    pub name: String,
    pub document_number: String,
    pub phone_number: String,
    pub birth_date: String,
    pub status_id: Option<i64>,
}

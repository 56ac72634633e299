//! Status contracts.
//!
//! A status is a named lookup value (for example "Active" or "On leave") attached to doctors
//! and patients.

use crate::query::{default_items_per_page, default_page};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Status {
    pub id: i64,
    pub name: String,
}

/// Status lists are paginated only; there are no filters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetStatusListRequest {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
}

impl Default for GetStatusListRequest {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            page: default_page(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GetStatusListResponse {
    pub total: u64,
    pub items: Vec<Status>,
}

/// Body accepted when creating a status.
///
/// `scheduleDuration` is optional, so a plain [`StatusForm`] body is also a valid create body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateStatusRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_duration: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct StatusForm {
    pub name: String,
}

impl From<StatusForm> for CreateStatusRequest {
    fn from(form: StatusForm) -> Self {
        Self {
            name: form.name,
            schedule_duration: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_round_trips_through_json() {
        let status = Status {
            id: 7,
            name: "Active".into(),
        };
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value, json!({ "id": 7, "name": "Active" }));

        let back: Status = serde_json::from_value(value).unwrap();
        assert_eq!(back, status);
    }

    #[test]
    fn status_form_rejects_id() {
        let err = serde_json::from_value::<StatusForm>(json!({ "id": 1, "name": "Active" }))
            .expect_err("id must not be accepted on a form");
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn status_form_body_is_a_valid_create_request() {
        let request: CreateStatusRequest =
            serde_json::from_value(json!({ "name": "Active" })).unwrap();
        assert_eq!(request.name, "Active");
        assert_eq!(request.schedule_duration, None);

        let with_duration: CreateStatusRequest =
            serde_json::from_value(json!({ "name": "Booked", "scheduleDuration": "00:30" }))
                .unwrap();
        assert_eq!(with_duration.schedule_duration.as_deref(), Some("00:30"));
    }

    #[test]
    fn create_request_rejects_id() {
        assert!(serde_json::from_value::<CreateStatusRequest>(json!({
            "id": 3,
            "name": "Active",
        }))
        .is_err());
    }

    #[test]
    fn list_request_defaults_when_fields_missing() {
        let request: GetStatusListRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request, GetStatusListRequest::default());
        assert_eq!(request.items_per_page, 10);
        assert_eq!(request.page, 1);

        let explicit: GetStatusListRequest =
            serde_json::from_value(json!({ "itemsPerPage": 25, "page": 3 })).unwrap();
        assert_eq!(explicit.items_per_page, 25);
        assert_eq!(explicit.page, 3);
    }
}

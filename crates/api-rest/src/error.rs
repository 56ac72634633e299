//! HTTP error mapping.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use clinic_core::ClinicError;
use serde::Serialize;
use utoipa::ToSchema;

/// Body returned for every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Always `"error"`.
    pub status: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Clinic(#[from] ClinicError),
    #[error(transparent)]
    Json(#[from] JsonRejection),
    #[error(transparent)]
    Query(#[from] QueryRejection),
    #[error(transparent)]
    Path(#[from] PathRejection),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Clinic(err) => match err {
                ClinicError::InvalidInput(_)
                | ClinicError::Pagination(_)
                | ClinicError::UnknownReference { .. } => StatusCode::BAD_REQUEST,
                ClinicError::NotFound { .. } => StatusCode::NOT_FOUND,
                ClinicError::Conflict(_) => StatusCode::CONFLICT,
                ClinicError::SeedRead(_) | ClinicError::SeedParse(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Json(rejection) => rejection.status(),
            ApiError::Query(rejection) => rejection.status(),
            ApiError::Path(rejection) => rejection.status(),
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Clinic(err) => err.to_string(),
            ApiError::Json(rejection) => rejection.body_text(),
            ApiError::Query(rejection) => rejection.body_text(),
            ApiError::Path(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {:?}", self);
        } else {
            tracing::debug!("request rejected ({}): {}", status, self);
        }

        let body = ErrorBody {
            status: "error".into(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

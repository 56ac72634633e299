//! `/patients` handlers.

use crate::error::{ApiResult, ErrorBody};
use crate::AppState;
use api_shared::{GetPatientListRequest, GetPatientListResponse, Patient, PatientForm};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;

#[utoipa::path(
    get,
    path = "/patients",
    params(GetPatientListRequest),
    responses(
        (status = 200, description = "Page of patients", body = GetPatientListResponse),
        (status = 400, description = "Invalid page request or filter", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn list_patients(
    State(state): State<AppState>,
    query: Result<Query<GetPatientListRequest>, QueryRejection>,
) -> ApiResult<Json<GetPatientListResponse>> {
    let Query(req) = query?;
    Ok(Json(state.services.patients.list(&req)?))
}

#[utoipa::path(
    get,
    path = "/patients/{id}",
    params(("id" = i64, Path, description = "Patient id")),
    responses(
        (status = 200, description = "Patient found", body = Patient),
        (status = 404, description = "Patient not found", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn get_patient(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Patient>> {
    let Path(id) = id?;
    Ok(Json(state.services.patients.get(id)?))
}

#[utoipa::path(
    post,
    path = "/patients",
    request_body = PatientForm,
    responses(
        (status = 201, description = "Patient created", body = Patient),
        (status = 400, description = "Blank name or unknown status", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn create_patient(
    State(state): State<AppState>,
    body: Result<Json<PatientForm>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Patient>)> {
    let Json(form) = body?;
    let patient = state.services.patients.create(form)?;
    Ok((StatusCode::CREATED, Json(patient)))
}

#[utoipa::path(
    put,
    path = "/patients/{id}",
    params(("id" = i64, Path, description = "Patient id")),
    request_body = PatientForm,
    responses(
        (status = 200, description = "Patient updated", body = Patient),
        (status = 400, description = "Blank name or unknown status", body = ErrorBody),
        (status = 404, description = "Patient not found", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn update_patient(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<PatientForm>, JsonRejection>,
) -> ApiResult<Json<Patient>> {
    let Path(id) = id?;
    let Json(form) = body?;
    Ok(Json(state.services.patients.update(id, form)?))
}

#[utoipa::path(
    delete,
    path = "/patients/{id}",
    params(("id" = i64, Path, description = "Patient id")),
    responses(
        (status = 204, description = "Patient deleted"),
        (status = 404, description = "Patient not found", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn delete_patient(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.services.patients.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

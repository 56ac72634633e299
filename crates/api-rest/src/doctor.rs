//! `/doctors` handlers.

use crate::error::{ApiResult, ErrorBody};
use crate::AppState;
use api_shared::{Doctor, DoctorForm, GetDoctorListRequest, GetDoctorListResponse};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;

#[utoipa::path(
    get,
    path = "/doctors",
    params(GetDoctorListRequest),
    responses(
        (status = 200, description = "Page of doctors", body = GetDoctorListResponse),
        (status = 400, description = "Invalid page request or filter", body = ErrorBody)
    )
)]
/// List doctors.
///
/// `statusId` and `specialtyId` may be omitted, empty or `null` to match any value.
#[axum::debug_handler]
pub(crate) async fn list_doctors(
    State(state): State<AppState>,
    query: Result<Query<GetDoctorListRequest>, QueryRejection>,
) -> ApiResult<Json<GetDoctorListResponse>> {
    let Query(req) = query?;
    Ok(Json(state.services.doctors.list(&req)?))
}

#[utoipa::path(
    get,
    path = "/doctors/{id}",
    params(("id" = i64, Path, description = "Doctor id")),
    responses(
        (status = 200, description = "Doctor found", body = Doctor),
        (status = 404, description = "Doctor not found", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn get_doctor(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Doctor>> {
    let Path(id) = id?;
    Ok(Json(state.services.doctors.get(id)?))
}

#[utoipa::path(
    post,
    path = "/doctors",
    request_body = DoctorForm,
    responses(
        (status = 201, description = "Doctor created", body = Doctor),
        (status = 400, description = "Blank name or unknown reference", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn create_doctor(
    State(state): State<AppState>,
    body: Result<Json<DoctorForm>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Doctor>)> {
    let Json(form) = body?;
    let doctor = state.services.doctors.create(form)?;
    Ok((StatusCode::CREATED, Json(doctor)))
}

#[utoipa::path(
    put,
    path = "/doctors/{id}",
    params(("id" = i64, Path, description = "Doctor id")),
    request_body = DoctorForm,
    responses(
        (status = 200, description = "Doctor updated", body = Doctor),
        (status = 400, description = "Blank name or unknown reference", body = ErrorBody),
        (status = 404, description = "Doctor not found", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn update_doctor(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<DoctorForm>, JsonRejection>,
) -> ApiResult<Json<Doctor>> {
    let Path(id) = id?;
    let Json(form) = body?;
    Ok(Json(state.services.doctors.update(id, form)?))
}

#[utoipa::path(
    delete,
    path = "/doctors/{id}",
    params(("id" = i64, Path, description = "Doctor id")),
    responses(
        (status = 204, description = "Doctor deleted"),
        (status = 404, description = "Doctor not found", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn delete_doctor(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.services.doctors.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

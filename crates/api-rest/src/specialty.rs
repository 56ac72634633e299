//! `/specialties` handlers.

use crate::error::{ApiResult, ErrorBody};
use crate::AppState;
use api_shared::{GetSpecialtyListRequest, GetSpecialtyListResponse, Specialty, SpecialtyForm};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;

#[utoipa::path(
    get,
    path = "/specialties",
    params(GetSpecialtyListRequest),
    responses(
        (status = 200, description = "Page of specialties", body = GetSpecialtyListResponse),
        (status = 400, description = "Invalid page request", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn list_specialties(
    State(state): State<AppState>,
    query: Result<Query<GetSpecialtyListRequest>, QueryRejection>,
) -> ApiResult<Json<GetSpecialtyListResponse>> {
    let Query(req) = query?;
    Ok(Json(state.services.specialties.list(&req)?))
}

#[utoipa::path(
    get,
    path = "/specialties/{id}",
    params(("id" = i64, Path, description = "Specialty id")),
    responses(
        (status = 200, description = "Specialty found", body = Specialty),
        (status = 404, description = "Specialty not found", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn get_specialty(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Specialty>> {
    let Path(id) = id?;
    Ok(Json(state.services.specialties.get(id)?))
}

#[utoipa::path(
    post,
    path = "/specialties",
    request_body = SpecialtyForm,
    responses(
        (status = 201, description = "Specialty created", body = Specialty),
        (status = 400, description = "Blank name", body = ErrorBody),
        (status = 409, description = "Name already in use", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn create_specialty(
    State(state): State<AppState>,
    body: Result<Json<SpecialtyForm>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Specialty>)> {
    let Json(form) = body?;
    let specialty = state.services.specialties.create(form)?;
    Ok((StatusCode::CREATED, Json(specialty)))
}

#[utoipa::path(
    put,
    path = "/specialties/{id}",
    params(("id" = i64, Path, description = "Specialty id")),
    request_body = SpecialtyForm,
    responses(
        (status = 200, description = "Specialty renamed", body = Specialty),
        (status = 404, description = "Specialty not found", body = ErrorBody),
        (status = 409, description = "Name already in use", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn update_specialty(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<SpecialtyForm>, JsonRejection>,
) -> ApiResult<Json<Specialty>> {
    let Path(id) = id?;
    let Json(form) = body?;
    Ok(Json(state.services.specialties.update(id, form)?))
}

#[utoipa::path(
    delete,
    path = "/specialties/{id}",
    params(("id" = i64, Path, description = "Specialty id")),
    responses(
        (status = 204, description = "Specialty deleted"),
        (status = 404, description = "Specialty not found", body = ErrorBody),
        (status = 409, description = "Specialty still assigned to doctors", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn delete_specialty(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.services.specialties.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

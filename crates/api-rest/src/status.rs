//! `/statuses` handlers.

use crate::error::{ApiResult, ErrorBody};
use crate::AppState;
use api_shared::{CreateStatusRequest, GetStatusListRequest, GetStatusListResponse, Status, StatusForm};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;

#[utoipa::path(
    get,
    path = "/statuses",
    params(GetStatusListRequest),
    responses(
        (status = 200, description = "Page of statuses", body = GetStatusListResponse),
        (status = 400, description = "Invalid page request", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn list_statuses(
    State(state): State<AppState>,
    query: Result<Query<GetStatusListRequest>, QueryRejection>,
) -> ApiResult<Json<GetStatusListResponse>> {
    let Query(req) = query?;
    Ok(Json(state.services.statuses.list(&req)?))
}

#[utoipa::path(
    get,
    path = "/statuses/{id}",
    params(("id" = i64, Path, description = "Status id")),
    responses(
        (status = 200, description = "Status found", body = Status),
        (status = 404, description = "Status not found", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn get_status(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Status>> {
    let Path(id) = id?;
    Ok(Json(state.services.statuses.get(id)?))
}

#[utoipa::path(
    post,
    path = "/statuses",
    request_body = CreateStatusRequest,
    responses(
        (status = 201, description = "Status created", body = Status),
        (status = 400, description = "Blank name", body = ErrorBody),
        (status = 409, description = "Name already in use", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody)
    )
)]
/// Create a status.
///
/// The body is a status form, optionally carrying a `scheduleDuration`. Any `id` in the body is
/// rejected; ids are assigned by the server.
#[axum::debug_handler]
pub(crate) async fn create_status(
    State(state): State<AppState>,
    body: Result<Json<CreateStatusRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Status>)> {
    let Json(req) = body?;
    let status = state.services.statuses.create(req)?;
    Ok((StatusCode::CREATED, Json(status)))
}

#[utoipa::path(
    put,
    path = "/statuses/{id}",
    params(("id" = i64, Path, description = "Status id")),
    request_body = StatusForm,
    responses(
        (status = 200, description = "Status renamed", body = Status),
        (status = 404, description = "Status not found", body = ErrorBody),
        (status = 409, description = "Name already in use", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn update_status(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<StatusForm>, JsonRejection>,
) -> ApiResult<Json<Status>> {
    let Path(id) = id?;
    let Json(form) = body?;
    Ok(Json(state.services.statuses.update(id, form)?))
}

#[utoipa::path(
    delete,
    path = "/statuses/{id}",
    params(("id" = i64, Path, description = "Status id")),
    responses(
        (status = 204, description = "Status deleted"),
        (status = 404, description = "Status not found", body = ErrorBody),
        (status = 409, description = "Status still referenced", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub(crate) async fn delete_status(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    state.services.statuses.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

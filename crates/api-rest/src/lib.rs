//! # API REST
//!
//! REST API implementation for the clinic administration service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Uses `api-shared` for the wire contracts and `clinic-core` for the services behind them.

#![warn(rust_2018_idioms)]

mod doctor;
pub mod error;
mod patient;
mod specialty;
mod status;

#[cfg(test)]
mod tests;

use api_shared::{
    CreateStatusRequest, Doctor, DoctorForm, GetDoctorListResponse, GetPatientListResponse,
    GetSpecialtyListResponse, GetStatusListResponse, HealthRes, HealthService, Patient,
    PatientForm, Specialty, SpecialtyForm, Status, StatusForm,
};
use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use clinic_core::ClinicServices;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::{ApiError, ApiResult, ErrorBody};

/// Application state for the REST API server
///
/// Shared by every handler. The services are cheap to clone and all point at the same store.
#[derive(Clone)]
pub struct AppState {
    services: ClinicServices,
}

impl AppState {
    pub fn new(services: ClinicServices) -> Self {
        Self { services }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        status::list_statuses,
        status::get_status,
        status::create_status,
        status::update_status,
        status::delete_status,
        specialty::list_specialties,
        specialty::get_specialty,
        specialty::create_specialty,
        specialty::update_specialty,
        specialty::delete_specialty,
        doctor::list_doctors,
        doctor::get_doctor,
        doctor::create_doctor,
        doctor::update_doctor,
        doctor::delete_doctor,
        patient::list_patients,
        patient::get_patient,
        patient::create_patient,
        patient::update_patient,
        patient::delete_patient,
    ),
    components(schemas(
        HealthRes,
        ErrorBody,
        Status,
        GetStatusListResponse,
        CreateStatusRequest,
        StatusForm,
        Specialty,
        GetSpecialtyListResponse,
        SpecialtyForm,
        Doctor,
        GetDoctorListResponse,
        DoctorForm,
        Patient,
        GetPatientListResponse,
        PatientForm,
    ))
)]
pub struct ApiDoc;

/// Builds the REST application: API routes, Swagger UI and permissive CORS.
///
/// The OpenAPI document is served at `/api-docs/openapi.json` and the Swagger UI at
/// `/swagger-ui`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/statuses",
            get(status::list_statuses).post(status::create_status),
        )
        .route(
            "/statuses/:id",
            get(status::get_status)
                .put(status::update_status)
                .delete(status::delete_status),
        )
        .route(
            "/specialties",
            get(specialty::list_specialties).post(specialty::create_specialty),
        )
        .route(
            "/specialties/:id",
            get(specialty::get_specialty)
                .put(specialty::update_specialty)
                .delete(specialty::delete_specialty),
        )
        .route(
            "/doctors",
            get(doctor::list_doctors).post(doctor::create_doctor),
        )
        .route(
            "/doctors/:id",
            get(doctor::get_doctor)
                .put(doctor::update_doctor)
                .delete(doctor::delete_doctor),
        )
        .route(
            "/patients",
            get(patient::list_patients).post(patient::create_patient),
        )
        .route(
            "/patients/:id",
            get(patient::get_patient)
                .put(patient::update_patient)
                .delete(patient::delete_patient),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

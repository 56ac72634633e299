//! # API Shared
//!
//! Wire contracts for the clinic administration API.
//!
//! Contains:
//! - Entities (`Status`, `Specialty`, `Doctor`, `Patient`)
//! - List envelopes (`Get*ListRequest` / `Get*ListResponse`)
//! - Form payloads used for create and update bodies (`*Form`, `CreateStatusRequest`)
//! - Shared services like `HealthService`
//!
//! Every type serialises with camelCase field names and derives `utoipa::ToSchema` so the
//! REST layer can publish it in the OpenAPI document. Form payloads never carry an `id`; the
//! identity of the record being updated travels in the request path.

pub mod doctor;
pub mod health;
pub mod patient;
mod query;
pub mod specialty;
pub mod status;

pub use doctor::{Doctor, DoctorForm, GetDoctorListRequest, GetDoctorListResponse};
pub use health::{HealthRes, HealthService};
pub use patient::{GetPatientListRequest, GetPatientListResponse, Patient, PatientForm};
pub use query::{DEFAULT_ITEMS_PER_PAGE, FIRST_PAGE};
pub use specialty::{GetSpecialtyListRequest, GetSpecialtyListResponse, Specialty, SpecialtyForm};
pub use status::{CreateStatusRequest, GetStatusListRequest, GetStatusListResponse, Status, StatusForm};

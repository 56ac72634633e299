//! Constants used throughout the clinic core crate.

/// Upper bound on `itemsPerPage` when no explicit cap is configured.
pub const DEFAULT_MAX_ITEMS_PER_PAGE: u32 = 100;

/// Entity names used in error messages and log lines.
pub const STATUS_ENTITY: &str = "status";
pub const SPECIALTY_ENTITY: &str = "specialty";
pub const DOCTOR_ENTITY: &str = "doctor";
pub const PATIENT_ENTITY: &str = "patient";

/// Field names reported when a foreign key does not resolve.
pub const STATUS_ID_FIELD: &str = "statusId";
pub const SPECIALTY_FIELD: &str = "specialty";

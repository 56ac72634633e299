//! Per-entity services.
//!
//! Each service shares the same [`crate::CoreConfig`] and [`crate::ClinicStore`] and exposes
//! the list/get/create/update/delete operations for one record type.

pub mod doctor;
pub mod patient;
pub mod specialty;
pub mod status;

#[cfg(test)]
pub(crate) mod test_support;

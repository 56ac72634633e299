//! # Clinic Core
//!
//! Core business logic for the clinic administration service.
//!
//! This crate owns the in-memory record store and the per-entity services:
//! - Status and specialty lookup tables
//! - Doctors, with an embedded status and an ordered specialty list
//! - Patients, with a status reference resolved on every read
//! - Optional YAML seed files used to preload the store
//!
//! **No API concerns**: HTTP servers, routing and CLI parsing belong in `api-rest`,
//! `clinic-cli` and the `clinic-run` binary.

pub mod config;
pub mod constants;
pub mod error;
pub mod repositories;
pub mod seed;
pub mod store;

mod validation;

pub use config::{max_items_per_page_from_env_value, seed_file_from_env_value, CoreConfig};
pub use error::{ClinicError, ClinicResult};
pub use repositories::doctor::DoctorService;
pub use repositories::patient::PatientService;
pub use repositories::specialty::SpecialtyService;
pub use repositories::status::StatusService;
pub use seed::Seed;
pub use store::{ClinicStore, StoreCounts};

use std::sync::Arc;

/// The full set of services sharing one configuration and one store.
#[derive(Clone, Debug)]
pub struct ClinicServices {
    pub statuses: StatusService,
    pub specialties: SpecialtyService,
    pub doctors: DoctorService,
    pub patients: PatientService,
}

impl ClinicServices {
    pub fn new(cfg: Arc<CoreConfig>, store: Arc<ClinicStore>) -> Self {
        Self {
            statuses: StatusService::new(cfg.clone(), store.clone()),
            specialties: SpecialtyService::new(cfg.clone(), store.clone()),
            doctors: DoctorService::new(cfg.clone(), store.clone()),
            patients: PatientService::new(cfg, store),
        }
    }
}

//! YAML seed files.
//!
//! A seed file preloads the store with lookup values and records, typically for a demo or a
//! development environment:
//!
//! ```yaml
//! statuses:
//!   - id: 1
//!     name: Active
//!   - id: 2
//!     name: Booked
//!     scheduleDuration: "00:30"
//! specialties:
//!   - id: 1
//!     name: Cardiology
//! doctors:
//!   - id: 1
//!     name: Dr. Ana Souza
//!     statusId: 1
//!     specialty: [1]
//! patients:
//!   - id: 1
//!     name: Maria Lima
//!     phoneNumber: "+55 11 5555-0000"
//!     documentNumber: "123.456.789-00"
//!     statusId: 1
//!     birthDate: "1988-04-12"
//! ```
//!
//! Records carry explicit ids. Parsing is strict: unknown keys and wrong types are rejected
//! with the path of the failing field.

use crate::constants::{DOCTOR_ENTITY, PATIENT_ENTITY, SPECIALTY_ENTITY, STATUS_ENTITY};
use crate::store::{DoctorRecord, PatientRecord, SpecialtyRecord, StatusRecord, Tables};
use crate::validation::required_text;
use crate::{ClinicError, ClinicResult, ClinicStore, CoreConfig};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Parsed, not yet validated, seed document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Seed {
    #[serde(default)]
    pub statuses: Vec<SeedStatus>,
    #[serde(default)]
    pub specialties: Vec<SeedSpecialty>,
    #[serde(default)]
    pub doctors: Vec<SeedDoctor>,
    #[serde(default)]
    pub patients: Vec<SeedPatient>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedStatus {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub schedule_duration: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedSpecialty {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedDoctor {
    pub id: i64,
    pub name: String,
    pub status_id: i64,
    #[serde(default)]
    pub specialty: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedPatient {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    pub document_number: String,
    pub status_id: i64,
    pub birth_date: String,
}

impl Seed {
    /// Parse a seed document from YAML text.
    ///
    /// This uses `serde_path_to_error` to surface the path (e.g. `doctors[0].statusId`) of the
    /// failing field when the YAML does not match the seed schema.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::SeedParse`] if the YAML is malformed, has unknown keys or has a
    /// field of the wrong type.
    pub fn parse(yaml_text: &str) -> ClinicResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

        match serde_path_to_error::deserialize::<_, Seed>(deserializer) {
            Ok(seed) => Ok(seed),
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                Err(ClinicError::SeedParse(format!(
                    "schema mismatch at {path}: {source}"
                )))
            }
        }
    }

    /// Read and parse a seed file.
    pub fn read(path: &Path) -> ClinicResult<Self> {
        let text = fs::read_to_string(path).map_err(ClinicError::SeedRead)?;
        Self::parse(&text)
    }

    /// Validates the seed and builds a store from it.
    ///
    /// Statuses and specialties are loaded first so doctors and patients can be checked
    /// against them. Each table's next id is one past its largest seeded id.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError` if:
    /// - an id is not positive or is repeated within its table,
    /// - a name is blank or a lookup name is repeated,
    /// - a doctor or patient references an unknown status or specialty.
    pub fn into_store(self) -> ClinicResult<ClinicStore> {
        let mut tables = Tables::default();

        for status in self.statuses {
            let id = seed_id(STATUS_ENTITY, status.id)?;
            let name = required_text("statuses.name", &status.name)?;
            tables.ensure_status_name_free(&name, None)?;
            let schedule_duration = status
                .schedule_duration
                .as_deref()
                .map(|raw| required_text("statuses.scheduleDuration", raw))
                .transpose()?;
            let inserted = tables.statuses.insert_with_id(
                id,
                StatusRecord {
                    name,
                    schedule_duration,
                },
            );
            ensure_inserted(inserted, STATUS_ENTITY, id)?;
        }

        for specialty in self.specialties {
            let id = seed_id(SPECIALTY_ENTITY, specialty.id)?;
            let name = required_text("specialties.name", &specialty.name)?;
            tables.ensure_specialty_name_free(&name, None)?;
            let inserted = tables
                .specialties
                .insert_with_id(id, SpecialtyRecord { name });
            ensure_inserted(inserted, SPECIALTY_ENTITY, id)?;
        }

        for doctor in self.doctors {
            let id = seed_id(DOCTOR_ENTITY, doctor.id)?;
            let record = DoctorRecord {
                name: required_text("doctors.name", &doctor.name)?,
                status_id: tables.require_status(Some(doctor.status_id))?,
                specialty_ids: tables.require_specialties(&doctor.specialty)?,
            };
            let inserted = tables.doctors.insert_with_id(id, record);
            ensure_inserted(inserted, DOCTOR_ENTITY, id)?;
        }

        for patient in self.patients {
            let id = seed_id(PATIENT_ENTITY, patient.id)?;
            let record = PatientRecord {
                name: required_text("patients.name", &patient.name)?,
                phone_number: patient.phone_number.trim().to_string(),
                document_number: patient.document_number.trim().to_string(),
                status_id: tables.require_status(Some(patient.status_id))?,
                birth_date: patient.birth_date.trim().to_string(),
            };
            let inserted = tables.patients.insert_with_id(id, record);
            ensure_inserted(inserted, PATIENT_ENTITY, id)?;
        }

        Ok(ClinicStore::from_tables(tables))
    }
}

fn seed_id(entity: &str, id: i64) -> ClinicResult<i64> {
    if id < 1 {
        return Err(ClinicError::InvalidInput(format!(
            "{entity} ids must be positive, got {id}"
        )));
    }
    Ok(id)
}

fn ensure_inserted(inserted: bool, entity: &str, id: i64) -> ClinicResult<()> {
    if inserted {
        Ok(())
    } else {
        Err(ClinicError::InvalidInput(format!(
            "duplicate {entity} id {id} in seed"
        )))
    }
}

impl ClinicStore {
    /// Builds the store for a process: seeded from the configured seed file, or empty.
    pub fn from_config(cfg: &CoreConfig) -> ClinicResult<Self> {
        match cfg.seed_file() {
            Some(path) => {
                let store = Seed::read(path)?.into_store()?;
                let counts = store.counts();
                tracing::info!(
                    "loaded seed {}: {} statuses, {} specialties, {} doctors, {} patients",
                    path.display(),
                    counts.statuses,
                    counts.specialties,
                    counts.doctors,
                    counts.patients
                );
                Ok(store)
            }
            None => Ok(ClinicStore::new()),
        }
    }
}

//! Patient management.
//!
//! `statusId` on the form is authoritative. The embedded `status` is resolved from it on every
//! read, so `Patient.statusId` and `Patient.status.id` always agree.
//!
//! `documentNumber` is expected to identify a patient, but uniqueness is not enforced here.

use crate::constants::PATIENT_ENTITY;
use crate::store::{PatientRecord, Tables};
use crate::validation::{required_text, TextFilter};
use crate::{ClinicError, ClinicResult, ClinicStore, CoreConfig};
use api_shared::{GetPatientListRequest, GetPatientListResponse, Patient, PatientForm};
use std::sync::Arc;

/// Service for managing patients.
#[derive(Clone, Debug)]
pub struct PatientService {
    cfg: Arc<CoreConfig>,
    store: Arc<ClinicStore>,
}

impl PatientService {
    /// Creates a new instance of PatientService.
    pub fn new(cfg: Arc<CoreConfig>, store: Arc<ClinicStore>) -> Self {
        Self { cfg, store }
    }

    /// Lists patients matching every supplied filter, in ascending id order.
    ///
    /// `name` and `documentNumber` are case-insensitive substring filters; `statusId` is exact.
    pub fn list(&self, req: &GetPatientListRequest) -> ClinicResult<GetPatientListResponse> {
        let pagination = self.cfg.pagination(req.items_per_page, req.page)?;
        let name_filter = TextFilter::new(&req.name);
        let document_filter = TextFilter::new(&req.document_number);
        let tables = self.store.read();

        let matching = tables
            .patients
            .iter()
            .filter(|(_, record)| {
                name_filter.matches(record.name.as_str())
                    && document_filter.matches(&record.document_number)
                    && req.status_id.map_or(true, |id| record.status_id == id)
            })
            .filter_map(|(id, record)| tables.patient_view(id, record));
        let (total, items) = pagination.apply(matching);

        Ok(GetPatientListResponse { total, items })
    }

    pub fn get(&self, id: i64) -> ClinicResult<Patient> {
        let tables = self.store.read();
        tables
            .patients
            .get(id)
            .and_then(|record| tables.patient_view(id, record))
            .ok_or(ClinicError::NotFound {
                entity: PATIENT_ENTITY,
                id,
            })
    }

    /// Creates a patient from a form.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError` if the name is blank or `statusId` is null or unknown.
    pub fn create(&self, form: PatientForm) -> ClinicResult<Patient> {
        let mut tables = self.store.write();
        let record = record_from_form(&tables, form)?;

        let id = tables.patients.insert(record.clone())?;
        tracing::info!("created patient {}", id);

        resolved(&tables, id, &record)
    }

    pub fn update(&self, id: i64, form: PatientForm) -> ClinicResult<Patient> {
        let mut tables = self.store.write();
        if tables.patients.get(id).is_none() {
            return Err(ClinicError::NotFound {
                entity: PATIENT_ENTITY,
                id,
            });
        }
        let record = record_from_form(&tables, form)?;

        if let Some(existing) = tables.patients.get_mut(id) {
            *existing = record.clone();
        }
        tracing::info!("updated patient {}", id);

        resolved(&tables, id, &record)
    }

    pub fn delete(&self, id: i64) -> ClinicResult<()> {
        let mut tables = self.store.write();
        tables.patients.remove(id).ok_or(ClinicError::NotFound {
            entity: PATIENT_ENTITY,
            id,
        })?;
        tracing::info!("deleted patient {}", id);
        Ok(())
    }
}

fn record_from_form(tables: &Tables, form: PatientForm) -> ClinicResult<PatientRecord> {
    let name = required_text("name", &form.name)?;
    let status_id = tables.require_status(form.status_id)?;

    Ok(PatientRecord {
        name,
        phone_number: form.phone_number.trim().to_string(),
        document_number: form.document_number.trim().to_string(),
        status_id,
        birth_date: form.birth_date.trim().to_string(),
    })
}

fn resolved(tables: &Tables, id: i64, record: &PatientRecord) -> ClinicResult<Patient> {
    tables
        .patient_view(id, record)
        .ok_or(ClinicError::NotFound {
            entity: PATIENT_ENTITY,
            id,
        })
}

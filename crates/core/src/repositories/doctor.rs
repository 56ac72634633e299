//! Doctor management.
//!
//! Doctor rows store the status id and the ordered specialty ids taken from [`DoctorForm`].
//! Read paths embed the resolved [`api_shared::Status`] and [`api_shared::Specialty`] values.

use crate::constants::DOCTOR_ENTITY;
use crate::store::{DoctorRecord, Tables};
use crate::validation::{required_text, TextFilter};
use crate::{ClinicError, ClinicResult, ClinicStore, CoreConfig};
use api_shared::{Doctor, DoctorForm, GetDoctorListRequest, GetDoctorListResponse};
use std::sync::Arc;

/// Service for managing doctors.
#[derive(Clone, Debug)]
pub struct DoctorService {
    cfg: Arc<CoreConfig>,
    store: Arc<ClinicStore>,
}

impl DoctorService {
    pub fn new(cfg: Arc<CoreConfig>, store: Arc<ClinicStore>) -> Self {
        Self { cfg, store }
    }

    /// Lists doctors matching every supplied filter, in ascending id order.
    ///
    /// - `name`: case-insensitive substring; empty matches everything
    /// - `statusId`: exact match; `None` matches everything
    /// - `specialtyId`: the doctor lists that specialty; `None` matches everything
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::Pagination`] if the requested page window is invalid.
    pub fn list(&self, req: &GetDoctorListRequest) -> ClinicResult<GetDoctorListResponse> {
        let pagination = self.cfg.pagination(req.items_per_page, req.page)?;
        let name_filter = TextFilter::new(&req.name);
        let tables = self.store.read();

        let matching = tables
            .doctors
            .iter()
            .filter(|(_, record)| {
                name_filter.matches(record.name.as_str())
                    && req.status_id.map_or(true, |id| record.status_id == id)
                    && req
                        .specialty_id
                        .map_or(true, |id| record.specialty_ids.contains(&id))
            })
            .filter_map(|(id, record)| tables.doctor_view(id, record));
        let (total, items) = pagination.apply(matching);

        Ok(GetDoctorListResponse { total, items })
    }

    pub fn get(&self, id: i64) -> ClinicResult<Doctor> {
        let tables = self.store.read();
        tables
            .doctors
            .get(id)
            .and_then(|record| tables.doctor_view(id, record))
            .ok_or(ClinicError::NotFound {
                entity: DOCTOR_ENTITY,
                id,
            })
    }

    /// Creates a doctor from a form.
    ///
    /// # Errors
    ///
    /// Returns `ClinicError` if:
    /// - the name is blank,
    /// - `statusId` is null or unknown,
    /// - any specialty id is unknown.
    pub fn create(&self, form: DoctorForm) -> ClinicResult<Doctor> {
        let mut tables = self.store.write();
        let record = record_from_form(&tables, form)?;

        let id = tables.doctors.insert(record.clone())?;
        tracing::info!("created doctor {} ({})", id, record.name);

        resolved(&tables, id, &record)
    }

    /// Replaces a doctor's name, status and specialty list.
    pub fn update(&self, id: i64, form: DoctorForm) -> ClinicResult<Doctor> {
        let mut tables = self.store.write();
        if tables.doctors.get(id).is_none() {
            return Err(ClinicError::NotFound {
                entity: DOCTOR_ENTITY,
                id,
            });
        }
        let record = record_from_form(&tables, form)?;

        if let Some(existing) = tables.doctors.get_mut(id) {
            *existing = record.clone();
        }
        tracing::info!("updated doctor {} ({})", id, record.name);

        resolved(&tables, id, &record)
    }

    pub fn delete(&self, id: i64) -> ClinicResult<()> {
        let mut tables = self.store.write();
        tables.doctors.remove(id).ok_or(ClinicError::NotFound {
            entity: DOCTOR_ENTITY,
            id,
        })?;
        tracing::info!("deleted doctor {}", id);
        Ok(())
    }
}

fn record_from_form(tables: &Tables, form: DoctorForm) -> ClinicResult<DoctorRecord> {
    let name = required_text("name", &form.name)?;
    let status_id = tables.require_status(form.status_id)?;
    let specialty_ids = tables.require_specialties(&form.specialty)?;

    Ok(DoctorRecord {
        name,
        status_id,
        specialty_ids,
    })
}

fn resolved(tables: &Tables, id: i64, record: &DoctorRecord) -> ClinicResult<Doctor> {
    tables
        .doctor_view(id, record)
        .ok_or(ClinicError::NotFound {
            entity: DOCTOR_ENTITY,
            id,
        })
}

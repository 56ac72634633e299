//! Specialty lookup management.

use crate::constants::SPECIALTY_ENTITY;
use crate::store::SpecialtyRecord;
use crate::validation::{required_text, TextFilter};
use crate::{ClinicError, ClinicResult, ClinicStore, CoreConfig};
use api_shared::{GetSpecialtyListRequest, GetSpecialtyListResponse, Specialty, SpecialtyForm};
use std::sync::Arc;

/// Service for managing medical specialties.
#[derive(Clone, Debug)]
pub struct SpecialtyService {
    cfg: Arc<CoreConfig>,
    store: Arc<ClinicStore>,
}

impl SpecialtyService {
    pub fn new(cfg: Arc<CoreConfig>, store: Arc<ClinicStore>) -> Self {
        Self { cfg, store }
    }

    pub fn list(&self, req: &GetSpecialtyListRequest) -> ClinicResult<GetSpecialtyListResponse> {
        let pagination = self.cfg.pagination(req.items_per_page, req.page)?;
        let name_filter = TextFilter::new(&req.name);
        let tables = self.store.read();

        let matching = tables
            .specialties
            .iter()
            .filter(|(_, record)| name_filter.matches(record.name.as_str()))
            .map(|(id, record)| Specialty {
                id,
                name: record.name.to_string(),
            });
        let (total, items) = pagination.apply(matching);

        Ok(GetSpecialtyListResponse { total, items })
    }

    pub fn get(&self, id: i64) -> ClinicResult<Specialty> {
        self.store
            .read()
            .specialty_view(id)
            .ok_or(ClinicError::NotFound {
                entity: SPECIALTY_ENTITY,
                id,
            })
    }

    pub fn create(&self, form: SpecialtyForm) -> ClinicResult<Specialty> {
        let name = required_text("name", &form.name)?;

        let mut tables = self.store.write();
        tables.ensure_specialty_name_free(&name, None)?;
        let id = tables
            .specialties
            .insert(SpecialtyRecord { name: name.clone() })?;
        tracing::info!("created specialty {} ({})", id, name);

        Ok(Specialty {
            id,
            name: name.into_string(),
        })
    }

    pub fn update(&self, id: i64, form: SpecialtyForm) -> ClinicResult<Specialty> {
        let name = required_text("name", &form.name)?;

        let mut tables = self.store.write();
        if tables.specialties.get(id).is_none() {
            return Err(ClinicError::NotFound {
                entity: SPECIALTY_ENTITY,
                id,
            });
        }
        tables.ensure_specialty_name_free(&name, Some(id))?;

        if let Some(record) = tables.specialties.get_mut(id) {
            record.name = name.clone();
        }
        tracing::info!("updated specialty {} ({})", id, name);

        Ok(Specialty {
            id,
            name: name.into_string(),
        })
    }

    /// Deletes a specialty that no doctor lists.
    pub fn delete(&self, id: i64) -> ClinicResult<()> {
        let mut tables = self.store.write();
        if tables.specialties.get(id).is_none() {
            return Err(ClinicError::NotFound {
                entity: SPECIALTY_ENTITY,
                id,
            });
        }
        if tables.specialty_in_use(id) {
            return Err(ClinicError::Conflict(format!(
                "specialty {id} is still assigned to doctors"
            )));
        }

        tables.specialties.remove(id);
        tracing::info!("deleted specialty {}", id);
        Ok(())
    }
}

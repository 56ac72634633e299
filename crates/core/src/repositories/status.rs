//! Status lookup management.
//!
//! Statuses are referenced by doctors and patients through `statusId`. A status that is still
//! referenced cannot be deleted.

use crate::constants::STATUS_ENTITY;
use crate::store::StatusRecord;
use crate::validation::required_text;
use crate::{ClinicError, ClinicResult, ClinicStore, CoreConfig};
use api_shared::{CreateStatusRequest, GetStatusListRequest, GetStatusListResponse, Status, StatusForm};
use std::sync::Arc;

/// Service for managing status lookup values.
#[derive(Clone, Debug)]
pub struct StatusService {
    cfg: Arc<CoreConfig>,
    store: Arc<ClinicStore>,
}

impl StatusService {
    pub fn new(cfg: Arc<CoreConfig>, store: Arc<ClinicStore>) -> Self {
        Self { cfg, store }
    }

    /// Lists statuses in ascending id order, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::Pagination`] if the requested page window is invalid.
    pub fn list(&self, req: &GetStatusListRequest) -> ClinicResult<GetStatusListResponse> {
        let pagination = self.cfg.pagination(req.items_per_page, req.page)?;
        let tables = self.store.read();

        let (total, items) = pagination.apply(tables.statuses.iter().map(|(id, record)| Status {
            id,
            name: record.name.to_string(),
        }));

        Ok(GetStatusListResponse { total, items })
    }

    pub fn get(&self, id: i64) -> ClinicResult<Status> {
        self.store.read().status_view(id).ok_or(ClinicError::NotFound {
            entity: STATUS_ENTITY,
            id,
        })
    }

    /// Creates a status.
    ///
    /// `scheduleDuration` is optional. When supplied it must not be blank; it is kept beside
    /// the status and can be read back with [`StatusService::schedule_duration`].
    ///
    /// # Errors
    ///
    /// Returns `ClinicError` if:
    /// - the name or a supplied schedule duration is blank,
    /// - another status already uses the name (case-insensitive).
    pub fn create(&self, req: CreateStatusRequest) -> ClinicResult<Status> {
        let name = required_text("name", &req.name)?;
        let schedule_duration = req
            .schedule_duration
            .as_deref()
            .map(|raw| required_text("scheduleDuration", raw))
            .transpose()?;

        let mut tables = self.store.write();
        tables.ensure_status_name_free(&name, None)?;

        let id = tables.statuses.insert(StatusRecord {
            name: name.clone(),
            schedule_duration,
        })?;
        tracing::info!("created status {} ({})", id, name);

        Ok(Status {
            id,
            name: name.into_string(),
        })
    }

    pub fn update(&self, id: i64, form: StatusForm) -> ClinicResult<Status> {
        let name = required_text("name", &form.name)?;

        let mut tables = self.store.write();
        if tables.statuses.get(id).is_none() {
            return Err(ClinicError::NotFound {
                entity: STATUS_ENTITY,
                id,
            });
        }
        tables.ensure_status_name_free(&name, Some(id))?;

        if let Some(record) = tables.statuses.get_mut(id) {
            record.name = name.clone();
        }
        tracing::info!("updated status {} ({})", id, name);

        Ok(Status {
            id,
            name: name.into_string(),
        })
    }

    /// Deletes a status that no doctor or patient references.
    pub fn delete(&self, id: i64) -> ClinicResult<()> {
        let mut tables = self.store.write();
        if tables.statuses.get(id).is_none() {
            return Err(ClinicError::NotFound {
                entity: STATUS_ENTITY,
                id,
            });
        }
        if tables.status_in_use(id) {
            return Err(ClinicError::Conflict(format!(
                "status {id} is still assigned to doctors or patients"
            )));
        }

        tables.statuses.remove(id);
        tracing::info!("deleted status {}", id);
        Ok(())
    }

    /// Returns the schedule duration recorded when the status was created, if any.
    pub fn schedule_duration(&self, id: i64) -> ClinicResult<Option<String>> {
        let tables = self.store.read();
        let record = tables.statuses.get(id).ok_or(ClinicError::NotFound {
            entity: STATUS_ENTITY,
            id,
        })?;
        Ok(record.schedule_duration.as_ref().map(|d| d.to_string()))
    }
}

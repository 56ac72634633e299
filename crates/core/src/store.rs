//! In-memory record tables.
//!
//! Records keep foreign keys (`status_id`, `specialty_ids`) rather than embedded copies. The
//! embedded `status`/`specialty` values on [`Doctor`] and [`Patient`] are resolved at read
//! time, so renaming a status is immediately visible on every record that references it.
//!
//! All tables live behind one `RwLock`. Reads take the shared lock; every mutation takes the
//! exclusive lock for its whole check-then-write step so reference checks and id allocation
//! cannot interleave.

use crate::constants::{SPECIALTY_FIELD, STATUS_ID_FIELD};
use crate::{ClinicError, ClinicResult};
use api_shared::{Doctor, Patient, Specialty, Status};
use clinic_types::NonEmptyText;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
pub(crate) struct StatusRecord {
    pub name: NonEmptyText,
    pub schedule_duration: Option<NonEmptyText>,
}

#[derive(Clone, Debug)]
pub(crate) struct SpecialtyRecord {
    pub name: NonEmptyText,
}

#[derive(Clone, Debug)]
pub(crate) struct DoctorRecord {
    pub name: NonEmptyText,
    pub status_id: i64,
    pub specialty_ids: Vec<i64>,
}

#[derive(Clone, Debug)]
pub(crate) struct PatientRecord {
    pub name: NonEmptyText,
    pub phone_number: String,
    pub document_number: String,
    pub status_id: i64,
    pub birth_date: String,
}

/// Rows keyed by id, iterated in ascending id order.
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Clone, Debug)]
pub(crate) struct Table<R> {
    rows: BTreeMap<i64, R>,
    /// `None` once `i64::MAX` has been handed out.
    next_id: Option<i64>,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: Some(1),
        }
    }
}

impl<R> Table<R> {
    /// Stores `record` under a freshly allocated id.
    ///
    /// # Errors
    ///
    /// Returns [`ClinicError::Conflict`] once every positive id has been allocated.
    pub(crate) fn insert(&mut self, record: R) -> ClinicResult<i64> {
        let id = self
            .next_id
            .ok_or_else(|| ClinicError::Conflict("id space exhausted".into()))?;
        self.next_id = id.checked_add(1);
        self.rows.insert(id, record);
        Ok(id)
    }

    /// Stores `record` under a caller-chosen id. Returns `false` if the id is taken.
    ///
    /// Later allocations continue after the largest id seen; seeding `i64::MAX` exhausts the
    /// table.
    pub(crate) fn insert_with_id(&mut self, id: i64, record: R) -> bool {
        if self.rows.contains_key(&id) {
            return false;
        }
        self.rows.insert(id, record);
        self.next_id = match (self.next_id, id.checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };
        true
    }

    pub(crate) fn get(&self, id: i64) -> Option<&R> {
        self.rows.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: i64) -> Option<&mut R> {
        self.rows.get_mut(&id)
    }

    pub(crate) fn remove(&mut self, id: i64) -> Option<R> {
        self.rows.remove(&id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (i64, &R)> {
        self.rows.iter().map(|(id, row)| (*id, row))
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Tables {
    pub statuses: Table<StatusRecord>,
    pub specialties: Table<SpecialtyRecord>,
    pub doctors: Table<DoctorRecord>,
    pub patients: Table<PatientRecord>,
}

impl Tables {
    pub(crate) fn status_view(&self, id: i64) -> Option<Status> {
        self.statuses.get(id).map(|record| Status {
            id,
            name: record.name.to_string(),
        })
    }

    pub(crate) fn specialty_view(&self, id: i64) -> Option<Specialty> {
        self.specialties.get(id).map(|record| Specialty {
            id,
            name: record.name.to_string(),
        })
    }

    /// Resolves a doctor row into its wire shape.
    ///
    /// Returns `None` (and logs) if the row's status has vanished. Specialties that no longer
    /// exist are skipped.
    pub(crate) fn doctor_view(&self, id: i64, record: &DoctorRecord) -> Option<Doctor> {
        let Some(status) = self.status_view(record.status_id) else {
            tracing::warn!(
                "doctor {} references missing status {}",
                id,
                record.status_id
            );
            return None;
        };

        let specialty = record
            .specialty_ids
            .iter()
            .filter_map(|specialty_id| {
                let resolved = self.specialty_view(*specialty_id);
                if resolved.is_none() {
                    tracing::warn!(
                        "doctor {} references missing specialty {}",
                        id,
                        specialty_id
                    );
                }
                resolved
            })
            .collect();

        Some(Doctor {
            id,
            name: record.name.to_string(),
            status,
            specialty,
        })
    }

    /// Resolves a patient row into its wire shape; `statusId` always equals `status.id`.
    pub(crate) fn patient_view(&self, id: i64, record: &PatientRecord) -> Option<Patient> {
        let Some(status) = self.status_view(record.status_id) else {
            tracing::warn!(
                "patient {} references missing status {}",
                id,
                record.status_id
            );
            return None;
        };

        Some(Patient {
            id,
            name: record.name.to_string(),
            phone_number: record.phone_number.clone(),
            document_number: record.document_number.clone(),
            status_id: status.id,
            status,
            birth_date: record.birth_date.clone(),
        })
    }

    /// Checks that a form's `statusId` is present and names an existing status.
    pub(crate) fn require_status(&self, status_id: Option<i64>) -> ClinicResult<i64> {
        let status_id = status_id
            .ok_or_else(|| ClinicError::InvalidInput(format!("{STATUS_ID_FIELD} is required")))?;

        if self.statuses.get(status_id).is_none() {
            return Err(ClinicError::UnknownReference {
                field: STATUS_ID_FIELD,
                id: status_id,
            });
        }
        Ok(status_id)
    }

    /// Checks every specialty id and drops repeats, keeping first-seen order.
    pub(crate) fn require_specialties(&self, specialty_ids: &[i64]) -> ClinicResult<Vec<i64>> {
        let mut resolved: Vec<i64> = Vec::with_capacity(specialty_ids.len());
        for &specialty_id in specialty_ids {
            if self.specialties.get(specialty_id).is_none() {
                return Err(ClinicError::UnknownReference {
                    field: SPECIALTY_FIELD,
                    id: specialty_id,
                });
            }
            if !resolved.contains(&specialty_id) {
                resolved.push(specialty_id);
            }
        }
        Ok(resolved)
    }

    pub(crate) fn status_in_use(&self, status_id: i64) -> bool {
        self.doctors.iter().any(|(_, d)| d.status_id == status_id)
            || self.patients.iter().any(|(_, p)| p.status_id == status_id)
    }

    pub(crate) fn specialty_in_use(&self, specialty_id: i64) -> bool {
        self.doctors
            .iter()
            .any(|(_, d)| d.specialty_ids.contains(&specialty_id))
    }

    /// Rejects a status name already used by another status (case-insensitive).
    pub(crate) fn ensure_status_name_free(
        &self,
        name: &NonEmptyText,
        except_id: Option<i64>,
    ) -> ClinicResult<()> {
        let taken = self
            .statuses
            .iter()
            .any(|(id, s)| Some(id) != except_id && s.name.eq_ignore_case(name.as_str()));
        if taken {
            return Err(ClinicError::Conflict(format!(
                "a status named '{name}' already exists"
            )));
        }
        Ok(())
    }

    /// Rejects a specialty name already used by another specialty (case-insensitive).
    pub(crate) fn ensure_specialty_name_free(
        &self,
        name: &NonEmptyText,
        except_id: Option<i64>,
    ) -> ClinicResult<()> {
        let taken = self
            .specialties
            .iter()
            .any(|(id, s)| Some(id) != except_id && s.name.eq_ignore_case(name.as_str()));
        if taken {
            return Err(ClinicError::Conflict(format!(
                "a specialty named '{name}' already exists"
            )));
        }
        Ok(())
    }
}

/// Row counts per table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct StoreCounts {
    pub statuses: usize,
    pub specialties: usize,
    pub doctors: usize,
    pub patients: usize,
}

/// Shared, lock-guarded record store used by every service.
#[derive(Debug, Default)]
pub struct ClinicStore {
    tables: RwLock<Tables>,
}

impl ClinicStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_tables(tables: Tables) -> Self {
        Self {
            tables: RwLock::new(tables),
        }
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write()
    }

    pub fn counts(&self) -> StoreCounts {
        let tables = self.read();
        StoreCounts {
            statuses: tables.statuses.len(),
            specialties: tables.specialties.len(),
            doctors: tables.doctors.len(),
            patients: tables.patients.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> NonEmptyText {
        NonEmptyText::new(value).unwrap()
    }

    #[test]
    fn ids_are_never_reused() {
        let mut table: Table<&str> = Table::default();
        assert_eq!(table.insert("a").unwrap(), 1);
        assert_eq!(table.insert("b").unwrap(), 2);
        table.remove(2);
        assert_eq!(table.insert("c").unwrap(), 3);
    }

    #[test]
    fn explicit_ids_advance_the_allocator() {
        let mut table: Table<&str> = Table::default();
        assert!(table.insert_with_id(10, "a"));
        assert!(!table.insert_with_id(10, "dup"));
        assert_eq!(table.insert("b").unwrap(), 11);
        assert!(table.insert_with_id(4, "low"));
        assert_eq!(table.insert("c").unwrap(), 12);
    }

    #[test]
    fn largest_explicit_id_exhausts_the_allocator() {
        let mut table: Table<&str> = Table::default();
        assert!(table.insert_with_id(i64::MAX, "last"));
        assert!(matches!(table.insert("next"), Err(ClinicError::Conflict(_))));
        assert!(table.insert_with_id(3, "still fine"));
        assert!(matches!(table.insert("next"), Err(ClinicError::Conflict(_))));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn allocator_hands_out_max_id_then_stops() {
        let mut table: Table<&str> = Table::default();
        assert!(table.insert_with_id(i64::MAX - 1, "a"));
        assert_eq!(table.insert("b").unwrap(), i64::MAX);
        assert!(matches!(table.insert("c"), Err(ClinicError::Conflict(_))));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn require_specialties_collapses_repeats_in_order() {
        let mut tables = Tables::default();
        let a = tables
            .specialties
            .insert(SpecialtyRecord { name: text("A") })
            .unwrap();
        let b = tables
            .specialties
            .insert(SpecialtyRecord { name: text("B") })
            .unwrap();

        assert_eq!(tables.require_specialties(&[b, a, b]).unwrap(), vec![b, a]);
        assert!(matches!(
            tables.require_specialties(&[a, 99]),
            Err(ClinicError::UnknownReference { id: 99, .. })
        ));
    }

    #[test]
    fn require_status_rejects_null_and_unknown() {
        let mut tables = Tables::default();
        let active = tables
            .statuses
            .insert(StatusRecord {
                name: text("Active"),
                schedule_duration: None,
            })
            .unwrap();

        assert_eq!(tables.require_status(Some(active)).unwrap(), active);
        assert!(matches!(
            tables.require_status(None),
            Err(ClinicError::InvalidInput(_))
        ));
        assert!(matches!(
            tables.require_status(Some(42)),
            Err(ClinicError::UnknownReference { id: 42, .. })
        ));
    }

    #[test]
    fn patient_view_keeps_status_id_in_sync() {
        let mut tables = Tables::default();
        let status_id = tables
            .statuses
            .insert(StatusRecord {
                name: text("Active"),
                schedule_duration: None,
            })
            .unwrap();
        let record = PatientRecord {
            name: text("Maria"),
            phone_number: String::new(),
            document_number: "1".into(),
            status_id,
            birth_date: "1990-01-01".into(),
        };

        let patient = tables.patient_view(5, &record).unwrap();
        assert_eq!(patient.status_id, patient.status.id);
        assert_eq!(patient.status.name, "Active");
    }
}

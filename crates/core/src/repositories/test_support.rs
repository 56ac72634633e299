use crate::{ClinicServices, ClinicStore, CoreConfig};
use api_shared::{CreateStatusRequest, SpecialtyForm};
use std::sync::Arc;

pub(crate) struct TestServices {
    pub store: Arc<ClinicStore>,
    pub statuses: crate::StatusService,
    pub specialties: crate::SpecialtyService,
    pub doctors: crate::DoctorService,
    pub patients: crate::PatientService,
}

pub(crate) fn services() -> TestServices {
    services_with_cap(crate::constants::DEFAULT_MAX_ITEMS_PER_PAGE)
}

pub(crate) fn services_with_cap(max_items_per_page: u32) -> TestServices {
    let cfg = Arc::new(CoreConfig::new(max_items_per_page, None).expect("valid config"));
    let store = Arc::new(ClinicStore::new());
    let ClinicServices {
        statuses,
        specialties,
        doctors,
        patients,
    } = ClinicServices::new(cfg, store.clone());

    TestServices {
        store,
        statuses,
        specialties,
        doctors,
        patients,
    }
}

pub(crate) fn status_request(name: &str) -> CreateStatusRequest {
    CreateStatusRequest {
        name: name.into(),
        schedule_duration: None,
    }
}

pub(crate) fn specialty_form(name: &str) -> SpecialtyForm {
    SpecialtyForm { name: name.into() }
}

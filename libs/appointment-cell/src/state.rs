use std::sync::Arc;

use doctor_cell::services::DoctorRegistry;
use shared_config::AppConfig;

use crate::services::AppointmentStore;

/// Everything the appointment handlers share for the life of the process.
#[derive(Debug, Clone)]
pub struct AppointmentState {
    pub config: Arc<AppConfig>,
    pub registry: Arc<DoctorRegistry>,
    pub store: Arc<AppointmentStore>,
}

impl AppointmentState {
    pub fn new(config: Arc<AppConfig>, registry: Arc<DoctorRegistry>, store: Arc<AppointmentStore>) -> Self {
        Self { config, registry, store }
    }
}

use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use tracing::{debug, warn};
use uuid::Uuid;

use shared_config::BookingPolicy;

use crate::models::{Appointment, AppointmentError};

/// Append-only, process-lifetime appointment list.
///
/// Every operation runs inside one critical section, so a conflict check
/// and the append that follows it cannot interleave with another booking.
#[derive(Debug, Default)]
pub struct AppointmentStore {
    appointments: Mutex<Vec<Appointment>>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Appointment>> {
        // The list is append-only, so a panic mid-push cannot leave it torn.
        self.appointments
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Appends without any check.
    pub fn append(&self, appointment: Appointment) -> Appointment {
        let mut appointments = self.lock();
        debug!(
            "Appending appointment {} for doctor {} on {} at {}",
            appointment.id, appointment.doctor_id, appointment.date, appointment.time
        );
        appointments.push(appointment.clone());
        appointment
    }

    /// Appends only if no active appointment already holds the same
    /// doctor, date and time.
    pub fn insert_if_free(&self, appointment: Appointment) -> Result<Appointment, AppointmentError> {
        let mut appointments = self.lock();

        if appointment.status.is_active()
            && appointments
                .iter()
                .any(|existing| existing.occupies(&appointment.doctor_id, appointment.date, &appointment.time))
        {
            warn!(
                "Rejecting double booking for doctor {} on {} at {}",
                appointment.doctor_id, appointment.date, appointment.time
            );
            return Err(AppointmentError::ConflictDetected);
        }

        appointments.push(appointment.clone());
        Ok(appointment)
    }

    pub fn submit(&self, appointment: Appointment, policy: BookingPolicy) -> Result<Appointment, AppointmentError> {
        match policy {
            BookingPolicy::Strict => self.insert_if_free(appointment),
            BookingPolicy::Permissive => Ok(self.append(appointment)),
        }
    }

    /// All appointments for the doctor, any status, insertion order.
    pub fn for_doctor(&self, doctor_id: &str) -> Vec<Appointment> {
        self.lock()
            .iter()
            .filter(|apt| apt.doctor_id == doctor_id)
            .cloned()
            .collect()
    }

    pub fn for_doctor_on(&self, doctor_id: &str, date: NaiveDate) -> Vec<Appointment> {
        self.lock()
            .iter()
            .filter(|apt| apt.doctor_id == doctor_id && apt.date == date)
            .cloned()
            .collect()
    }

    pub fn for_patient(&self, patient_id: &str) -> Vec<Appointment> {
        self.lock()
            .iter()
            .filter(|apt| apt.patient_id == patient_id)
            .cloned()
            .collect()
    }

    pub fn get(&self, appointment_id: Uuid) -> Option<Appointment> {
        self.lock().iter().find(|apt| apt.id == appointment_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

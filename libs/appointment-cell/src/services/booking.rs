use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info, warn};
use uuid::Uuid;

use doctor_cell::models::Doctor;
use doctor_cell::services::DoctorRegistry;
use shared_config::BookingPolicy;
use shared_models::auth::User;

use crate::models::{
    catalog_slot, Appointment, AppointmentError, AppointmentStatus, AvailableSlot, BookAppointmentRequest,
};
use crate::services::availability::{available_slots, weekday_abbreviation};
use crate::services::store::AppointmentStore;
use crate::state::AppointmentState;

pub struct BookingService {
    registry: Arc<DoctorRegistry>,
    store: Arc<AppointmentStore>,
    policy: BookingPolicy,
}

impl BookingService {
    pub fn new(state: &AppointmentState) -> Self {
        Self::with_parts(state.registry.clone(), state.store.clone(), state.config.booking_policy)
    }

    pub fn with_parts(registry: Arc<DoctorRegistry>, store: Arc<AppointmentStore>, policy: BookingPolicy) -> Self {
        Self { registry, store, policy }
    }

    fn doctor(&self, doctor_id: &str) -> Result<&Doctor, AppointmentError> {
        self.registry.get(doctor_id).ok_or(AppointmentError::DoctorNotFound)
    }

    /// Open slots for the doctor on `date`; no date yields no slots.
    pub fn available_slots(&self, doctor_id: &str, date: Option<NaiveDate>) -> Result<Vec<AvailableSlot>, AppointmentError> {
        let doctor = self.doctor(doctor_id)?;
        let existing = match date {
            Some(date) => self.store.for_doctor_on(doctor_id, date),
            None => Vec::new(),
        };

        Ok(available_slots(doctor, date, &existing))
    }

    /// Books a slot on behalf of `user`.
    ///
    /// Under the strict policy the request is re-validated against the
    /// registry and the slot is claimed atomically in the store. The
    /// permissive policy appends whatever was submitted.
    pub fn book(
        &self,
        user: &User,
        request: BookAppointmentRequest,
        today: NaiveDate,
    ) -> Result<Appointment, AppointmentError> {
        debug!(
            "Booking request from {} for doctor {} on {} at {}",
            user.id, request.doctor_id, request.date, request.time
        );

        let reason = request.reason.trim();
        if reason.is_empty() {
            return Err(AppointmentError::ValidationError("Reason for visit is required".to_string()));
        }
        if request.time.trim().is_empty() {
            return Err(AppointmentError::ValidationError("Time slot is required".to_string()));
        }

        if self.policy == BookingPolicy::Strict {
            self.validate(&request, today)?;
        }

        let appointment = Appointment::new(
            request.doctor_id,
            user.id.clone(),
            request.date,
            request.time,
            reason,
            AppointmentStatus::Confirmed,
        );

        let appointment = self.store.submit(appointment, self.policy)?;

        info!(
            "Appointment {} booked: doctor {} on {} at {} for patient {}",
            appointment.id, appointment.doctor_id, appointment.date, appointment.time, appointment.patient_id
        );

        Ok(appointment)
    }

    fn validate(&self, request: &BookAppointmentRequest, today: NaiveDate) -> Result<(), AppointmentError> {
        let doctor = self.doctor(&request.doctor_id)?;

        if request.date < today {
            warn!("Rejecting booking for past date {}", request.date);
            return Err(AppointmentError::InvalidTime(format!("{} is in the past", request.date)));
        }

        if !doctor.works_on(request.date.weekday()) {
            return Err(AppointmentError::DoctorNotAvailable {
                weekday: weekday_abbreviation(request.date).to_string(),
            });
        }

        if catalog_slot(&request.time).is_none() {
            return Err(AppointmentError::InvalidTime(format!(
                "'{}' is not a standard slot",
                request.time
            )));
        }

        Ok(())
    }

    pub fn appointments_for_doctor(&self, doctor_id: &str) -> Result<Vec<Appointment>, AppointmentError> {
        self.doctor(doctor_id)?;
        Ok(self.store.for_doctor(doctor_id))
    }

    pub fn appointments_for_patient(&self, patient_id: &str) -> Vec<Appointment> {
        self.store.for_patient(patient_id)
    }

    /// Only the patient who booked the appointment may read it.
    pub fn get_appointment(&self, appointment_id: Uuid, user: &User) -> Result<Appointment, AppointmentError> {
        let appointment = self.store.get(appointment_id).ok_or(AppointmentError::NotFound)?;

        if appointment.patient_id != user.id {
            warn!("User {} tried to read appointment {}", user.id, appointment_id);
            return Err(AppointmentError::Unauthorized);
        }

        Ok(appointment)
    }
}

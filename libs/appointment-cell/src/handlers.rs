use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use shared_models::auth::User;
use shared_models::error::AppError;

use crate::models::{Appointment, AppointmentListResponse, AvailableSlotsResponse, BookAppointmentRequest};
use crate::services::{weekday_abbreviation, BookingService};
use crate::state::AppointmentState;

#[derive(Debug, Default, Deserialize)]
pub struct SlotQuery {
    pub date: Option<String>,
}

impl SlotQuery {
    /// An empty `date` means nothing has been picked yet.
    pub fn parsed_date(&self) -> Result<Option<NaiveDate>, AppError> {
        match self.date.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| AppError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", raw))),
        }
    }
}

// ==============================================================================
// PUBLIC HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<AppointmentState>>,
    Path(doctor_id): Path<String>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let date = query.parsed_date()?;
    let booking_service = BookingService::new(&state);

    let slots = booking_service.available_slots(&doctor_id, date)?;

    Ok(Json(AvailableSlotsResponse {
        doctor_id,
        date,
        weekday: date.map(|d| weekday_abbreviation(d).to_string()),
        total: slots.len(),
        slots,
    }))
}

// ==============================================================================
// AUTHENTICATED HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppointmentState>>,
    Extension(user): Extension<User>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    let booking_service = BookingService::new(&state);
    let today = Utc::now().date_naive();

    let appointment = booking_service.book(&user, request, today)?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

#[axum::debug_handler]
pub async fn get_my_appointments(
    State(state): State<Arc<AppointmentState>>,
    Extension(user): Extension<User>,
) -> Result<Json<AppointmentListResponse>, AppError> {
    debug!("Listing appointments for patient {}", user.id);

    let booking_service = BookingService::new(&state);

    Ok(Json(booking_service.appointments_for_patient(&user.id).into()))
}

#[axum::debug_handler]
pub async fn get_doctor_appointments(
    State(state): State<Arc<AppointmentState>>,
    Extension(user): Extension<User>,
    Path(doctor_id): Path<String>,
) -> Result<Json<AppointmentListResponse>, AppError> {
    debug!("User {} listing appointments for doctor {}", user.id, doctor_id);

    let booking_service = BookingService::new(&state);
    let appointments = booking_service.appointments_for_doctor(&doctor_id)?;

    Ok(Json(appointments.into()))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<AppointmentState>>,
    Extension(user): Extension<User>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Appointment>, AppError> {
    let booking_service = BookingService::new(&state);
    let appointment = booking_service.get_appointment(appointment_id, &user)?;

    Ok(Json(appointment))
}

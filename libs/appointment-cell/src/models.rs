// libs/appointment-cell/src/models.rs
use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use shared_models::error::AppError;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_id: String,
    pub patient_id: String,
    pub date: NaiveDate,
    /// Slot label exactly as it appears in the catalog, e.g. "09:00 AM".
    pub time: String,
    pub reason: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn new(
        doctor_id: impl Into<String>,
        patient_id: impl Into<String>,
        date: NaiveDate,
        time: impl Into<String>,
        reason: impl Into<String>,
        status: AppointmentStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            doctor_id: doctor_id.into(),
            patient_id: patient_id.into(),
            date,
            time: time.into(),
            reason: reason.into(),
            status,
            created_at: Utc::now(),
        }
    }

    /// True when this appointment holds the (doctor, date, time) slot.
    pub fn occupies(&self, doctor_id: &str, date: NaiveDate, time: &str) -> bool {
        self.status.is_active() && self.doctor_id == doctor_id && self.date == date && self.time == time
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn is_active(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "PENDING"),
            AppointmentStatus::Confirmed => write!(f, "CONFIRMED"),
            AppointmentStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

// ==============================================================================
// SLOT CATALOG
// ==============================================================================

pub const SLOT_DURATION_MINUTES: i64 = 30;

/// A standard daily slot. Bookings are matched on `label`; the start time
/// is only informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: &'static str,
    pub hour: u32,
    pub minute: u32,
}

impl TimeSlot {
    const fn new(label: &'static str, hour: u32, minute: u32) -> Self {
        Self { label, hour, minute }
    }

    pub fn start_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn end_time(&self) -> NaiveTime {
        self.start_time() + Duration::minutes(SLOT_DURATION_MINUTES)
    }
}

// Morning block, lunch gap 12:00-14:00, afternoon block.
pub const STANDARD_SLOTS: [TimeSlot; 14] = [
    TimeSlot::new("09:00 AM", 9, 0),
    TimeSlot::new("09:30 AM", 9, 30),
    TimeSlot::new("10:00 AM", 10, 0),
    TimeSlot::new("10:30 AM", 10, 30),
    TimeSlot::new("11:00 AM", 11, 0),
    TimeSlot::new("11:30 AM", 11, 30),
    TimeSlot::new("02:00 PM", 14, 0),
    TimeSlot::new("02:30 PM", 14, 30),
    TimeSlot::new("03:00 PM", 15, 0),
    TimeSlot::new("03:30 PM", 15, 30),
    TimeSlot::new("04:00 PM", 16, 0),
    TimeSlot::new("04:30 PM", 16, 30),
    TimeSlot::new("05:00 PM", 17, 0),
    TimeSlot::new("05:30 PM", 17, 30),
];

pub fn catalog_slot(label: &str) -> Option<&'static TimeSlot> {
    STANDARD_SLOTS.iter().find(|slot| slot.label == label)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailableSlot {
    pub time: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_minutes: i64,
}

impl From<&TimeSlot> for AvailableSlot {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            time: slot.label.to_string(),
            start_time: slot.start_time(),
            end_time: slot.end_time(),
            duration_minutes: SLOT_DURATION_MINUTES,
        }
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub doctor_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotsResponse {
    pub doctor_id: String,
    pub date: Option<NaiveDate>,
    pub weekday: Option<String>,
    pub slots: Vec<AvailableSlot>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentListResponse {
    pub appointments: Vec<Appointment>,
    pub total: usize,
}

impl From<Vec<Appointment>> for AppointmentListResponse {
    fn from(appointments: Vec<Appointment>) -> Self {
        Self {
            total: appointments.len(),
            appointments,
        }
    }
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("Doctor does not see patients on {weekday}")]
    DoctorNotAvailable { weekday: String },

    #[error("Invalid appointment time: {0}")]
    InvalidTime(String),

    #[error("Appointment conflicts with existing booking")]
    ConflictDetected,

    #[error("Unauthorized access to appointment")]
    Unauthorized,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound | AppointmentError::DoctorNotFound => AppError::NotFound(err.to_string()),
            AppointmentError::DoctorNotAvailable { .. } | AppointmentError::ConflictDetected => {
                AppError::Conflict(err.to_string())
            }
            AppointmentError::InvalidTime(_) | AppointmentError::ValidationError(_) => {
                AppError::ValidationError(err.to_string())
            }
            AppointmentError::Unauthorized => AppError::Forbidden(err.to_string()),
        }
    }
}

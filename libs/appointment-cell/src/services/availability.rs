use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use doctor_cell::models::Doctor;

use crate::models::{Appointment, AvailableSlot, STANDARD_SLOTS};

/// Three-letter weekday name from the proleptic Gregorian calendar.
pub fn weekday_abbreviation(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Labels already taken for the doctor on `date`. Cancelled bookings never count.
pub fn booked_times<'a>(doctor_id: &str, date: NaiveDate, appointments: &'a [Appointment]) -> HashSet<&'a str> {
    appointments
        .iter()
        .filter(|apt| apt.doctor_id == doctor_id && apt.date == date && apt.status.is_active())
        .map(|apt| apt.time.as_str())
        .collect()
}

/// Bookable slots for `doctor` on `date`, in catalog order.
///
/// Returns nothing when no date is given or the doctor does not work that
/// weekday. Otherwise every catalog slot whose label is not held by an
/// active appointment is offered; matching is exact label equality.
pub fn available_slots(doctor: &Doctor, date: Option<NaiveDate>, appointments: &[Appointment]) -> Vec<AvailableSlot> {
    let Some(date) = date else {
        return Vec::new();
    };

    if !doctor.works_on(date.weekday()) {
        debug!(
            "Doctor {} does not work on {} ({})",
            doctor.id,
            weekday_abbreviation(date),
            date
        );
        return Vec::new();
    }

    let booked = booked_times(&doctor.id, date, appointments);

    let slots: Vec<AvailableSlot> = STANDARD_SLOTS
        .iter()
        .filter(|slot| !booked.contains(slot.label))
        .map(AvailableSlot::from)
        .collect();

    debug!(
        "Doctor {} has {} open slots on {} ({} booked)",
        doctor.id,
        slots.len(),
        date,
        booked.len()
    );

    slots
}

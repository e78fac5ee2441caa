use tracing::debug;

use crate::models::{Doctor, DoctorSearchFilters};

/// Stable filter over the directory: every criterion must hold, input order is kept.
pub fn filter_doctors(doctors: &[Doctor], filters: &DoctorSearchFilters) -> Vec<Doctor> {
    let matched: Vec<Doctor> = doctors
        .iter()
        .filter(|doctor| filters.matches(doctor))
        .cloned()
        .collect();

    debug!(
        "Doctor search matched {} of {} (specialty: {:?}, location: {:?}, min_rating: {})",
        matched.len(),
        doctors.len(),
        filters.specialty,
        filters.location,
        filters.min_rating
    );

    matched
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use shared_models::error::AppError;

use crate::models::{Doctor, DoctorError, DoctorSearchFilters, DoctorSearchResponse, Location, Specialty};
use crate::services::DoctorRegistry;

#[derive(Debug, Default, Deserialize)]
pub struct DoctorSearchQuery {
    pub specialty: Option<String>,
    pub location: Option<String>,
    pub min_rating: Option<String>,
}

impl DoctorSearchQuery {
    /// Empty strings mean "any", as the directory's select boxes submit them.
    pub fn into_filters(self) -> Result<DoctorSearchFilters, DoctorError> {
        let specialty = non_empty(self.specialty)
            .map(|s| s.parse::<Specialty>())
            .transpose()?;
        let location = non_empty(self.location)
            .map(|l| l.parse::<Location>())
            .transpose()?;

        let min_rating = non_empty(self.min_rating)
            .map(|r| {
                r.trim()
                    .parse::<f32>()
                    .map_err(|_| DoctorError::MalformedRating(r.clone()))
            })
            .transpose()?
            .unwrap_or(0.0);

        DoctorSearchFilters::new(specialty, location, min_rating)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[axum::debug_handler]
pub async fn search_doctors(
    State(registry): State<Arc<DoctorRegistry>>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<DoctorSearchResponse>, AppError> {
    let filters = query.into_filters()?;
    let doctors = registry.search(&filters);

    Ok(Json(DoctorSearchResponse {
        total: doctors.len(),
        doctors,
        filters_applied: !filters.is_unfiltered(),
    }))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(registry): State<Arc<DoctorRegistry>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Doctor>, AppError> {
    debug!("Fetching doctor {}", doctor_id);

    let doctor = registry.get(&doctor_id).cloned().ok_or(DoctorError::NotFound)?;

    Ok(Json(doctor))
}

pub async fn list_specialties() -> Json<Value> {
    let specialties: Vec<&str> = Specialty::ALL.iter().map(Specialty::as_str).collect();
    Json(json!({ "specialties": specialties }))
}

pub async fn list_locations() -> Json<Value> {
    let locations: Vec<&str> = Location::ALL.iter().map(Location::as_str).collect();
    Json(json!({ "locations": locations }))
}

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: Specialty,
    pub location: Location,
    pub experience_years: u32,
    pub rating: f32,
    pub review_count: u32,
    pub image_url: String,
    pub about: String,
    pub consultation_fee: u32,
    /// Weekdays on which the doctor accepts appointments, serialized as "Mon", "Tue", ...
    pub availability: Vec<Weekday>,
    pub hospital_affiliation: String,
}

impl Doctor {
    pub fn works_on(&self, weekday: Weekday) -> bool {
        self.availability.contains(&weekday)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Specialty {
    Cardiologist,
    Dermatologist,
    Neurologist,
    Orthopedist,
    Pediatrician,
    #[serde(rename = "General Physician")]
    GeneralPhysician,
    #[serde(rename = "Vascular Surgeon")]
    VascularSurgeon,
    Proctologist,
}

impl Specialty {
    pub const ALL: [Specialty; 8] = [
        Specialty::Cardiologist,
        Specialty::Dermatologist,
        Specialty::Neurologist,
        Specialty::Orthopedist,
        Specialty::Pediatrician,
        Specialty::GeneralPhysician,
        Specialty::VascularSurgeon,
        Specialty::Proctologist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Cardiologist => "Cardiologist",
            Specialty::Dermatologist => "Dermatologist",
            Specialty::Neurologist => "Neurologist",
            Specialty::Orthopedist => "Orthopedist",
            Specialty::Pediatrician => "Pediatrician",
            Specialty::GeneralPhysician => "General Physician",
            Specialty::VascularSurgeon => "Vascular Surgeon",
            Specialty::Proctologist => "Proctologist",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialty {
    type Err = DoctorError;

    // Exact match against the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specialty::ALL
            .iter()
            .copied()
            .find(|specialty| specialty.as_str() == s)
            .ok_or_else(|| DoctorError::UnknownSpecialty(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Location {
    #[serde(rename = "Pune, MH")]
    Pune,
    #[serde(rename = "Mumbai, MH")]
    Mumbai,
    #[serde(rename = "Delhi, NCR")]
    Delhi,
    #[serde(rename = "Bangalore, KA")]
    Bangalore,
    #[serde(rename = "Hyderabad, TS")]
    Hyderabad,
    #[serde(rename = "Chennai, TN")]
    Chennai,
    #[serde(rename = "Kolkata, WB")]
    Kolkata,
}

impl Location {
    pub const ALL: [Location; 7] = [
        Location::Pune,
        Location::Mumbai,
        Location::Delhi,
        Location::Bangalore,
        Location::Hyderabad,
        Location::Chennai,
        Location::Kolkata,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Pune => "Pune, MH",
            Location::Mumbai => "Mumbai, MH",
            Location::Delhi => "Delhi, NCR",
            Location::Bangalore => "Bangalore, KA",
            Location::Hyderabad => "Hyderabad, TS",
            Location::Chennai => "Chennai, TN",
            Location::Kolkata => "Kolkata, WB",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = DoctorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .iter()
            .copied()
            .find(|location| location.as_str() == s)
            .ok_or_else(|| DoctorError::UnknownLocation(s.to_string()))
    }
}

/// Criteria for the doctor directory. `None` matches every value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DoctorSearchFilters {
    pub specialty: Option<Specialty>,
    pub location: Option<Location>,
    pub min_rating: f32,
}

impl DoctorSearchFilters {
    pub fn new(specialty: Option<Specialty>, location: Option<Location>, min_rating: f32) -> Result<Self, DoctorError> {
        if !min_rating.is_finite() || !(0.0..=5.0).contains(&min_rating) {
            return Err(DoctorError::InvalidRating(min_rating));
        }

        Ok(Self {
            specialty,
            location,
            min_rating,
        })
    }

    pub fn is_unfiltered(&self) -> bool {
        self.specialty.is_none() && self.location.is_none() && self.min_rating <= 0.0
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        let specialty_matches = self.specialty.map_or(true, |s| doctor.specialty == s);
        let location_matches = self.location.map_or(true, |l| doctor.location == l);
        let rating_matches = doctor.rating >= self.min_rating;

        specialty_matches && location_matches && rating_matches
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorSearchResponse {
    pub doctors: Vec<Doctor>,
    pub total: usize,
    pub filters_applied: bool,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,

    #[error("Unknown specialty: {0}")]
    UnknownSpecialty(String),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Minimum rating must be between 0 and 5, got {0}")]
    InvalidRating(f32),

    #[error("Minimum rating is not a number: {0}")]
    MalformedRating(String),
}

impl From<DoctorError> for shared_models::error::AppError {
    fn from(err: DoctorError) -> Self {
        use shared_models::error::AppError;

        match err {
            DoctorError::NotFound => AppError::NotFound(err.to_string()),
            DoctorError::UnknownSpecialty(_)
            | DoctorError::UnknownLocation(_)
            | DoctorError::InvalidRating(_)
            | DoctorError::MalformedRating(_) => AppError::ValidationError(err.to_string()),
        }
    }
}

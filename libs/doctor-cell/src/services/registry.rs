use chrono::Weekday;
use tracing::{debug, info};

use crate::models::{Doctor, DoctorSearchFilters, Location, Specialty};
use crate::services::search::filter_doctors;

/// Read-only doctor directory, seeded once at construction.
#[derive(Debug, Clone, Default)]
pub struct DoctorRegistry {
    doctors: Vec<Doctor>,
}

impl DoctorRegistry {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        info!("Doctor registry seeded with {} doctors", doctors.len());
        Self { doctors }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding the six sample doctors.
    pub fn with_mock_doctors() -> Self {
        Self::new(mock_doctors())
    }

    pub fn all(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    pub fn get(&self, doctor_id: &str) -> Option<&Doctor> {
        let doctor = self.doctors.iter().find(|d| d.id == doctor_id);
        if doctor.is_none() {
            debug!("Doctor not found: {}", doctor_id);
        }
        doctor
    }

    pub fn search(&self, filters: &DoctorSearchFilters) -> Vec<Doctor> {
        filter_doctors(&self.doctors, filters)
    }
}

pub fn mock_doctors() -> Vec<Doctor> {
    use Weekday::*;

    vec![
        Doctor {
            id: "1".to_string(),
            name: "Dr. Anjali Desai".to_string(),
            specialty: Specialty::VascularSurgeon,
            location: Location::Pune,
            experience_years: 12,
            rating: 4.8,
            review_count: 124,
            image_url: "https://picsum.photos/id/64/300/300".to_string(),
            about: "Dr. Desai specializes in minimally invasive treatments for varicose veins and spider veins. With over a decade of experience, she is a leading vascular specialist in Pune.".to_string(),
            consultation_fee: 1500,
            availability: vec![Mon, Tue, Thu, Fri],
            hospital_affiliation: "Avish Vascular Institute".to_string(),
        },
        Doctor {
            id: "2".to_string(),
            name: "Dr. Rajesh Kumar".to_string(),
            specialty: Specialty::Cardiologist,
            location: Location::Mumbai,
            experience_years: 20,
            rating: 4.9,
            review_count: 310,
            image_url: "https://picsum.photos/id/91/300/300".to_string(),
            about: "Dr. Kumar is a board-certified cardiologist focusing on preventative cardiology and heart failure management. He is affiliated with Apollo Hospitals.".to_string(),
            consultation_fee: 2000,
            availability: vec![Mon, Wed, Fri],
            hospital_affiliation: "Apollo Heart Center".to_string(),
        },
        Doctor {
            id: "3".to_string(),
            name: "Dr. Sarah Lee".to_string(),
            specialty: Specialty::Dermatologist,
            location: Location::Bangalore,
            experience_years: 8,
            rating: 4.7,
            review_count: 89,
            image_url: "https://picsum.photos/id/65/300/300".to_string(),
            about: "Expert in cosmetic and medical dermatology. Dr. Lee provides comprehensive skin care solutions ranging from acne treatment to laser therapies.".to_string(),
            consultation_fee: 1200,
            availability: vec![Tue, Thu, Sat],
            hospital_affiliation: "Bangalore Skin Clinic".to_string(),
        },
        Doctor {
            id: "4".to_string(),
            name: "Dr. Vikram Patel".to_string(),
            specialty: Specialty::Proctologist,
            location: Location::Pune,
            experience_years: 15,
            rating: 4.6,
            review_count: 205,
            image_url: "https://picsum.photos/id/1005/300/300".to_string(),
            about: "Specializing in laser treatments for piles, fissures, and fistulas. Dr. Patel ensures a pain-free and quick recovery process.".to_string(),
            consultation_fee: 1000,
            availability: vec![Mon, Tue, Wed, Thu, Fri],
            hospital_affiliation: "Hexa Health Partner Clinic".to_string(),
        },
        Doctor {
            id: "5".to_string(),
            name: "Dr. Priya Sharma".to_string(),
            specialty: Specialty::Pediatrician,
            location: Location::Delhi,
            experience_years: 10,
            rating: 4.9,
            review_count: 150,
            image_url: "https://picsum.photos/id/342/300/300".to_string(),
            about: "Dedicated to the health and well-being of children from infancy through adolescence. Compassionate care is her hallmark.".to_string(),
            consultation_fee: 800,
            availability: vec![Mon, Wed, Sat],
            hospital_affiliation: "Max Super Speciality Hospital".to_string(),
        },
        Doctor {
            id: "6".to_string(),
            name: "Dr. James Wilson".to_string(),
            specialty: Specialty::Orthopedist,
            location: Location::Hyderabad,
            experience_years: 25,
            rating: 4.5,
            review_count: 400,
            image_url: "https://picsum.photos/id/203/300/300".to_string(),
            about: "Senior orthopedic surgeon specializing in joint replacement and sports injuries. Internationally trained specialist.".to_string(),
            consultation_fee: 2500,
            availability: vec![Tue, Thu],
            hospital_affiliation: "KIMS Hospitals".to_string(),
        },
    ]
}

use std::sync::Arc;

use assert_matches::assert_matches;
use axum::extract::{Path, Query, State};

use doctor_cell::handlers::*;
use doctor_cell::services::DoctorRegistry;
use shared_models::error::AppError;

fn registry() -> Arc<DoctorRegistry> {
    Arc::new(DoctorRegistry::with_mock_doctors())
}

fn query(specialty: &str, location: &str, min_rating: Option<&str>) -> DoctorSearchQuery {
    DoctorSearchQuery {
        specialty: Some(specialty.to_string()),
        location: Some(location.to_string()),
        min_rating: min_rating.map(str::to_string),
    }
}

#[tokio::test]
async fn test_search_without_criteria() {
    let response = search_doctors(State(registry()), Query(DoctorSearchQuery::default()))
        .await
        .unwrap()
        .0;

    assert_eq!(response.total, 6);
    assert!(!response.filters_applied);
}

#[tokio::test]
async fn test_search_treats_empty_strings_as_any() {
    let response = search_doctors(State(registry()), Query(query("", "", None)))
        .await
        .unwrap()
        .0;

    assert_eq!(response.total, 6);
    assert!(!response.filters_applied);
}

#[tokio::test]
async fn test_search_treats_empty_rating_as_any() {
    let response = search_doctors(State(registry()), Query(query("", "", Some(""))))
        .await
        .unwrap()
        .0;

    assert_eq!(response.total, 6);
    assert!(!response.filters_applied);
}

#[tokio::test]
async fn test_search_rejects_non_numeric_rating() {
    let result = search_doctors(State(registry()), Query(query("", "", Some("high")))).await;
    assert_matches!(result, Err(AppError::ValidationError(msg)) if msg.contains("high"));
}

#[tokio::test]
async fn test_search_cardiologist_scenario() {
    let response = search_doctors(State(registry()), Query(query("Cardiologist", "", Some("4.5"))))
        .await
        .unwrap()
        .0;

    assert!(response.filters_applied);
    assert_eq!(response.total, 1);
    assert_eq!(response.doctors[0].name, "Dr. Rajesh Kumar");
}

#[tokio::test]
async fn test_search_with_no_matches() {
    let response = search_doctors(State(registry()), Query(query("Neurologist", "Kolkata, WB", None)))
        .await
        .unwrap()
        .0;

    assert!(response.filters_applied);
    assert_eq!(response.total, 0);
    assert!(response.doctors.is_empty());
}

#[tokio::test]
async fn test_search_rejects_unknown_specialty() {
    let result = search_doctors(State(registry()), Query(query("Astrologer", "", None))).await;
    assert_matches!(result, Err(AppError::ValidationError(_)));
}

#[tokio::test]
async fn test_search_rejects_negative_rating() {
    let result = search_doctors(State(registry()), Query(query("", "", Some("-0.5")))).await;
    assert_matches!(result, Err(AppError::ValidationError(_)));
}

#[tokio::test]
async fn test_get_doctor() {
    let doctor = get_doctor(State(registry()), Path("3".to_string())).await.unwrap().0;
    assert_eq!(doctor.name, "Dr. Sarah Lee");
}

#[tokio::test]
async fn test_get_unknown_doctor() {
    let result = get_doctor(State(registry()), Path("99".to_string())).await;
    assert_matches!(result, Err(AppError::NotFound(msg)) if msg == "Doctor not found");
}

#[tokio::test]
async fn test_list_enumerations() {
    let specialties = list_specialties().await.0;
    assert_eq!(specialties["specialties"].as_array().unwrap().len(), 8);
    assert_eq!(specialties["specialties"][5], "General Physician");

    let locations = list_locations().await.0;
    assert_eq!(locations["locations"].as_array().unwrap().len(), 7);
    assert_eq!(locations["locations"][0], "Pune, MH");
}

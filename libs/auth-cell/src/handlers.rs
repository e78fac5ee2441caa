use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Json, State},
    http::{HeaderMap, Request},
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use doctor_cell::models::{Location, Specialty};
use shared_models::auth::{SessionResponse, User, UserRole};
use shared_models::error::AppError;
use shared_utils::extractor::{extract_bearer_token, extract_user};
use shared_utils::session::SessionStore;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DoctorRegistrationRequest {
    pub name: String,
    pub email: String,
    pub specialty: String,
    pub location: String,
    pub license_number: String,
}

pub async fn login(
    State(sessions): State<Arc<SessionStore>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    debug!("Mock login for {}", request.email);

    let session = sessions.login(&request.name, &request.email, request.role.unwrap_or_default())?;

    Ok(Json(session))
}

/// Accepts the registration and signs the applicant in as a doctor.
/// The directory itself is not modified.
pub async fn register_doctor(
    State(sessions): State<Arc<SessionStore>>,
    Json(request): Json<DoctorRegistrationRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let specialty: Specialty = request.specialty.parse()?;
    let location: Location = request.location.parse()?;

    if request.license_number.trim().is_empty() {
        return Err(AppError::ValidationError("License number is required".to_string()));
    }

    let session = sessions.login(&request.name, &request.email, UserRole::Doctor)?;

    info!(
        "Doctor registration submitted by {} ({} in {}), pending verification",
        session.user.email, specialty, location
    );

    Ok(Json(session))
}

pub async fn logout(
    State(sessions): State<Arc<SessionStore>>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let token = extract_bearer_token(&headers)?;
    let logged_out = sessions.logout(&token);

    Ok(Json(json!({ "logged_out": logged_out })))
}

pub async fn me(request: Request<Body>) -> Result<Json<User>, AppError> {
    let user = extract_user(&request)?;
    Ok(Json(user))
}

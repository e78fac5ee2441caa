use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::DoctorRegistry;

pub fn doctor_routes(registry: Arc<DoctorRegistry>) -> Router {
    // The directory is public; booking lives in the appointment cell.
    Router::new()
        .route("/search", get(handlers::search_doctors))
        .route("/specialties", get(handlers::list_specialties))
        .route("/locations", get(handlers::list_locations))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .with_state(registry)
}

use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use appointment_cell::{AppointmentState, AppointmentStore};
use auth_cell::router::auth_routes;
use doctor_cell::router::doctor_routes;
use doctor_cell::services::DoctorRegistry;
use shared_config::AppConfig;
use shared_utils::session::SessionStore;

/// Seeds the registry and wires every cell. Dropping the router ends the session state.
pub fn create_router(config: Arc<AppConfig>) -> Router {
    let registry = Arc::new(if config.seed_mock_doctors {
        DoctorRegistry::with_mock_doctors()
    } else {
        DoctorRegistry::empty()
    });
    let store = Arc::new(AppointmentStore::new());
    let sessions = Arc::new(SessionStore::new());

    let appointment_state = Arc::new(AppointmentState::new(config, registry.clone(), store));

    Router::new()
        .route("/", get(|| async { "Clinic booking API is running!" }))
        .nest("/auth", auth_routes(sessions.clone()))
        .nest("/doctors", doctor_routes(registry))
        .nest("/appointments", appointment_routes(appointment_state, sessions))
}

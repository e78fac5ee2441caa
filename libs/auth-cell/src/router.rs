use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_utils::extractor::auth_middleware;
use shared_utils::session::SessionStore;

use crate::handlers;

pub fn auth_routes(sessions: Arc<SessionStore>) -> Router {
    let public_routes = Router::new()
        .route("/login", post(handlers::login))
        .route("/register-doctor", post(handlers::register_doctor));

    let protected_routes = Router::new()
        .route("/logout", post(handlers::logout))
        .route("/me", get(handlers::me))
        .layer(middleware::from_fn_with_state(sessions.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(sessions)
}

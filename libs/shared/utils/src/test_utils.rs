use std::sync::Arc;

use axum::http::{HeaderMap, HeaderValue};

use shared_config::{AppConfig, BookingPolicy};
use shared_models::auth::{SessionResponse, User, UserRole};

use crate::session::SessionStore;

pub struct TestConfig {
    pub booking_policy: BookingPolicy,
    pub seed_mock_doctors: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            booking_policy: BookingPolicy::Strict,
            seed_mock_doctors: true,
        }
    }
}

impl TestConfig {
    pub fn permissive() -> Self {
        Self {
            booking_policy: BookingPolicy::Permissive,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            booking_policy: self.booking_policy,
            seed_mock_doctors: self.seed_mock_doctors,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl Default for TestUser {
    fn default() -> Self {
        Self {
            name: "Test Patient".to_string(),
            email: "patient@example.com".to_string(),
            role: UserRole::Patient,
        }
    }
}

impl TestUser {
    pub fn new(name: &str, email: &str, role: UserRole) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            role,
        }
    }

    pub fn patient(email: &str) -> Self {
        Self::new("Test Patient", email, UserRole::Patient)
    }

    pub fn doctor(email: &str) -> Self {
        Self::new("Dr. Test", email, UserRole::Doctor)
    }

    /// A detached identity with a fixed id, for tests that bypass the session store.
    pub fn to_user(&self, id: &str) -> User {
        User {
            id: id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }

    pub fn login(&self, sessions: &SessionStore) -> SessionResponse {
        sessions
            .login(&self.name, &self.email, self.role)
            .expect("test user has a name and email")
    }
}

pub fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "authorization",
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("token is a valid header value"),
    );
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::default().to_app_config();
        assert_eq!(config.booking_policy, BookingPolicy::Strict);
        assert!(config.seed_mock_doctors);

        let permissive = TestConfig::permissive().to_app_config();
        assert_eq!(permissive.booking_policy, BookingPolicy::Permissive);
    }

    #[test]
    fn test_user_creation() {
        let user = TestUser::doctor("doc@example.com");
        let model = user.to_user("doc-1");
        assert_eq!(model.id, "doc-1");
        assert_eq!(model.role, UserRole::Doctor);
    }

    #[test]
    fn test_login_through_store() {
        let sessions = SessionStore::new();
        let session = TestUser::default().login(&sessions);
        assert_eq!(sessions.current_user(&session.token), Some(session.user));

        let headers = bearer_headers(&session.token);
        assert!(headers.get("authorization").is_some());
    }
}

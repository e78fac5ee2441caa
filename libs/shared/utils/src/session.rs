use std::collections::HashMap;
use std::sync::RwLock;

use rand::{distributions::Alphanumeric, Rng};
use tracing::{debug, info};
use uuid::Uuid;

use shared_models::auth::{SessionResponse, User, UserRole};
use shared_models::error::AppError;

const USER_ID_LENGTH: usize = 9;

/// In-memory mock sessions keyed by bearer token.
///
/// Logging in fabricates a fresh identity for whatever name and email were
/// submitted. Nothing is verified and nothing outlives the process.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, User>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&self, name: &str, email: &str, role: UserRole) -> Result<SessionResponse, AppError> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() {
            return Err(AppError::ValidationError("Name is required".to_string()));
        }
        if email.is_empty() {
            return Err(AppError::ValidationError("Email is required".to_string()));
        }

        let user = User {
            id: generate_user_id(),
            name: name.to_string(),
            email: email.to_string(),
            role,
        };
        let token = Uuid::new_v4().simple().to_string();

        self.sessions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(token.clone(), user.clone());

        info!(
            "Mock login for {} as {} (user {}, {} active sessions)",
            user.email,
            user.role,
            user.id,
            self.active_sessions()
        );

        Ok(SessionResponse { token, user })
    }

    /// Drops the session. Returns whether the token was known.
    pub fn logout(&self, token: &str) -> bool {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(token);

        if let Some(user) = &removed {
            debug!("Session ended for user {}", user.id);
        }

        removed.is_some()
    }

    pub fn current_user(&self, token: &str) -> Option<User> {
        self.sessions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(token)
            .cloned()
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

fn generate_user_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(USER_ID_LENGTH)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

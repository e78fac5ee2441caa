use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};

use shared_models::auth::User;
use shared_models::error::AppError;

use crate::session::SessionStore;

pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AppError> {
    let auth_header = headers
        .get("Authorization")
        .ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::Auth("Invalid authorization header format".to_string()))?;

    match auth_value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AppError::Auth("Invalid authorization header format".to_string())),
    }
}

// Resolves the bearer token against the mock session store.
pub async fn auth_middleware(
    State(sessions): State<Arc<SessionStore>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(request.headers())?;

    let user = sessions
        .current_user(&token)
        .ok_or_else(|| AppError::Auth("Session not found or expired".to_string()))?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

pub fn extract_user<B>(request: &Request<B>) -> Result<User, AppError> {
    request
        .extensions()
        .get::<User>()
        .cloned()
        .ok_or_else(|| AppError::Auth("User not found in request extensions".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc123"));
        assert_eq!(extract_bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn test_extract_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert_matches!(
            extract_bearer_token(&headers),
            Err(AppError::Auth(msg)) if msg == "Missing authorization header"
        );
    }

    #[test]
    fn test_extract_bearer_token_without_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("abc123"));
        assert_matches!(extract_bearer_token(&headers), Err(AppError::Auth(_)));

        headers.insert("authorization", HeaderValue::from_static("Bearer    "));
        assert_matches!(extract_bearer_token(&headers), Err(AppError::Auth(_)));
    }

    #[test]
    fn test_extract_user_from_extensions() {
        let mut request = Request::new(());
        assert_matches!(extract_user(&request), Err(AppError::Auth(_)));

        let user = User {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            role: Default::default(),
        };
        request.extensions_mut().insert(user.clone());
        assert_eq!(extract_user(&request).unwrap(), user);
    }
}

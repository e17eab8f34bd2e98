//! Authentication endpoint.

use super::error::ApiError;
use super::http::ApiClient;
use super::transport::Method;
use super::types::{LoginRequest, Session};

/// Exchange credentials for a session via `POST /auth/login`.
///
/// # Errors
///
/// Propagates [`ApiError`] unchanged; a 401 carries the backend message.
pub async fn login(api: &ApiClient, credentials: &LoginRequest) -> Result<Session, ApiError> {
    api.send_json(Method::Post, "/auth/login", credentials).await
}

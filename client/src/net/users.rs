//! User account endpoints: registration, verification, profile CRUD, roles.
//!
//! Register/verify/resend answer with plain text confirmations rather than JSON.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::error::ApiError;
use super::http::{ApiClient, path_segment};
use super::transport::Method;
use super::types::{ResendVerificationRequest, User, UserRequest, UserRole, VerifyRegistrationRequest};

fn role_path(id: i64, role: UserRole) -> String {
    format!("/users/{id}/role?role={}", role.as_str())
}

/// `POST /users` (owner-side direct create, no verification).
///
/// # Errors
///
/// Propagates [`ApiError`].
pub async fn save(api: &ApiClient, user: &UserRequest) -> Result<User, ApiError> {
    api.send_json(Method::Post, "/users", user).await
}

/// Start self-registration; the backend emails a verification code.
///
/// # Errors
///
/// Propagates [`ApiError`] (409 when the email is taken).
pub async fn register(api: &ApiClient, user: &UserRequest) -> Result<String, ApiError> {
    api.send_text(Method::Post, "/users/register", user).await
}

/// Confirm a registration with the emailed code.
///
/// # Errors
///
/// Propagates [`ApiError`] (400 on a wrong or expired code).
pub async fn verify(api: &ApiClient, request: &VerifyRegistrationRequest) -> Result<String, ApiError> {
    api.send_text(Method::Post, "/users/verify", request).await
}

/// Ask for a fresh verification code.
///
/// # Errors
///
/// Propagates [`ApiError`].
pub async fn resend_verification(api: &ApiClient, request: &ResendVerificationRequest) -> Result<String, ApiError> {
    api.send_text(Method::Post, "/users/resend-verification", request).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn update(api: &ApiClient, id: i64, user: &UserRequest) -> Result<User, ApiError> {
    api.send_json(Method::Put, &format!("/users/{id}"), user).await
}

/// Change a user's role; the role travels as a query parameter, not a body.
///
/// # Errors
///
/// Propagates [`ApiError`] (403 for non-owners).
pub async fn update_role(api: &ApiClient, id: i64, role: UserRole) -> Result<User, ApiError> {
    api.send_empty_json(Method::Patch, &role_path(id, role)).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn find_all(api: &ApiClient) -> Result<Vec<User>, ApiError> {
    api.get_json("/users").await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn find_by_id(api: &ApiClient, id: i64) -> Result<User, ApiError> {
    api.get_json(&format!("/users/{id}")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn find_by_email(api: &ApiClient, email: &str) -> Result<User, ApiError> {
    api.get_json(&format!("/users/email/{}", path_segment(email))).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn delete_by_id(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.send_empty(Method::Delete, &format!("/users/{id}")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn exists_by_email(api: &ApiClient, email: &str) -> Result<bool, ApiError> {
    api.get_json(&format!("/users/exists/{}", path_segment(email))).await
}

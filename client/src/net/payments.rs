//! Payment endpoints.
//!
//! The intent's client secret goes straight to the external payment provider;
//! it is never logged.

#[cfg(test)]
#[path = "payments_test.rs"]
mod payments_test;

use super::error::ApiError;
use super::http::ApiClient;
use super::transport::Method;
use super::types::{CreatePaymentIntentRequest, Payment, PaymentIntent, PaymentStatus};

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn create_payment_intent(
    api: &ApiClient,
    request: &CreatePaymentIntentRequest,
) -> Result<PaymentIntent, ApiError> {
    api.send_json(Method::Post, "/payments/intent", request).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn get_payment_by_id(api: &ApiClient, id: i64) -> Result<Payment, ApiError> {
    api.get_json(&format!("/payments/{id}")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn get_payments_by_user_id(api: &ApiClient, user_id: i64) -> Result<Vec<Payment>, ApiError> {
    api.get_json(&format!("/payments/user/{user_id}")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn get_payments_by_order_id(api: &ApiClient, order_id: i64) -> Result<Vec<Payment>, ApiError> {
    api.get_json(&format!("/payments/order/{order_id}")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn get_all_payments(api: &ApiClient) -> Result<Vec<Payment>, ApiError> {
    api.get_json("/payments").await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn get_payments_by_status(api: &ApiClient, status: PaymentStatus) -> Result<Vec<Payment>, ApiError> {
    api.get_json(&format!("/payments/status/{}", status.as_str())).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn delete_payment(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.send_empty(Method::Delete, &format!("/payments/{id}")).await
}

/// Status tags as the backend lists them.
///
/// # Errors
///
/// Propagates [`ApiError`].
pub async fn payment_statuses(api: &ApiClient) -> Result<Vec<String>, ApiError> {
    api.get_json("/payments/payment-statuses").await
}

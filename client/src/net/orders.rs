//! Order endpoints. Status transitions are owner-only `POST` actions.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use super::error::ApiError;
use super::http::ApiClient;
use super::transport::Method;
use super::types::{Order, OrderRequest, OrderStatus};

/// Turn the caller's cart into an order shipped to `address`.
///
/// # Errors
///
/// Propagates [`ApiError`] (400 on an empty cart).
pub async fn place_order(api: &ApiClient, request: &OrderRequest) -> Result<Order, ApiError> {
    api.send_json(Method::Post, "/orders", request).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn get_order_by_id(api: &ApiClient, id: i64) -> Result<Order, ApiError> {
    api.get_json(&format!("/orders/{id}")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn get_all_orders(api: &ApiClient) -> Result<Vec<Order>, ApiError> {
    api.get_json("/orders").await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn get_orders_by_user_id(api: &ApiClient, user_id: i64) -> Result<Vec<Order>, ApiError> {
    api.get_json(&format!("/orders/user/{user_id}")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn get_orders_by_status(api: &ApiClient, status: OrderStatus) -> Result<Vec<Order>, ApiError> {
    api.get_json(&format!("/orders/status/{}", status.as_str())).await
}

async fn transition(api: &ApiClient, id: i64, action: &str) -> Result<Order, ApiError> {
    api.send_empty_json(Method::Post, &format!("/orders/{id}/{action}")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn confirm_order(api: &ApiClient, id: i64) -> Result<Order, ApiError> {
    transition(api, id, "confirm").await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn ship_order(api: &ApiClient, id: i64) -> Result<Order, ApiError> {
    transition(api, id, "ship").await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn deliver_order(api: &ApiClient, id: i64) -> Result<Order, ApiError> {
    transition(api, id, "deliver").await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn cancel_order(api: &ApiClient, id: i64) -> Result<Order, ApiError> {
    transition(api, id, "cancel").await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn delete_order(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.send_empty(Method::Delete, &format!("/orders/{id}")).await
}

//! Cart and cart-item endpoints.
//!
//! A user owns at most one cart. [`ensure_cart`] hides the "no cart yet" 404
//! from pages that just want to add something.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use super::error::ApiError;
use super::http::ApiClient;
use super::transport::Method;
use super::types::{Cart, CartItem, CartItemRequest, CartRequest};

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn create_cart(api: &ApiClient, user_id: i64) -> Result<Cart, ApiError> {
    api.send_json(Method::Post, "/carts", &CartRequest { user_id }).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn get_cart_by_id(api: &ApiClient, id: i64) -> Result<Cart, ApiError> {
    api.get_json(&format!("/carts/{id}")).await
}

/// # Errors
///
/// Propagates [`ApiError`]; 404 when the user has no cart yet.
pub async fn get_cart_by_user_id(api: &ApiClient, user_id: i64) -> Result<Cart, ApiError> {
    api.get_json(&format!("/carts/user/{user_id}")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn delete_cart(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.send_empty(Method::Delete, &format!("/carts/{id}")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn add_item(api: &ApiClient, item: &CartItemRequest) -> Result<CartItem, ApiError> {
    api.send_json(Method::Post, "/cart-items", item).await
}

/// Replace an item's quantity. The backend answers 204 when the item was
/// removed (quantity zero), which maps to `None`.
///
/// # Errors
///
/// Propagates [`ApiError`].
pub async fn update_item(api: &ApiClient, id: i64, item: &CartItemRequest) -> Result<Option<CartItem>, ApiError> {
    api.send_optional_json(Method::Put, &format!("/cart-items/{id}"), item).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn get_item_by_id(api: &ApiClient, id: i64) -> Result<CartItem, ApiError> {
    api.get_json(&format!("/cart-items/{id}")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn get_items_by_cart_id(api: &ApiClient, cart_id: i64) -> Result<Vec<CartItem>, ApiError> {
    api.get_json(&format!("/cart-items/cart/{cart_id}")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn remove_item(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.send_empty(Method::Delete, &format!("/cart-items/{id}")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn clear_cart(api: &ApiClient, cart_id: i64) -> Result<(), ApiError> {
    api.send_empty(Method::Delete, &format!("/cart-items/cart/{cart_id}")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn increase_quantity(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.send_empty(Method::Patch, &format!("/cart-items/{id}/increase")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn decrease_quantity(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.send_empty(Method::Patch, &format!("/cart-items/{id}/decrease")).await
}

/// Fetch the user's cart, creating an empty one on 404.
///
/// # Errors
///
/// Any error other than 404 is returned as-is.
pub async fn ensure_cart(api: &ApiClient, user_id: i64) -> Result<Cart, ApiError> {
    match get_cart_by_user_id(api, user_id).await {
        Ok(cart) => Ok(cart),
        Err(e) if e.is_not_found() => create_cart(api, user_id).await,
        Err(e) => Err(e),
    }
}

/// Put one unit of an artwork into the user's cart.
///
/// # Errors
///
/// Propagates [`ApiError`] from either step.
pub async fn add_artwork(api: &ApiClient, user_id: i64, artwork_id: i64) -> Result<CartItem, ApiError> {
    let cart = ensure_cart(api, user_id).await?;
    add_item(api, &CartItemRequest { cart_id: cart.id, artwork_id, quantity: 1 }).await
}

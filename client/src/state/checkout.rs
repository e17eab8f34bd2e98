//! Checkout: place the order, then open a payment intent for it.
//!
//! The intent's client secret is handed to the external payment provider and
//! is never logged or persisted.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{CreatePaymentIntentRequest, Order, OrderRequest, PaymentIntent};
use crate::net::{orders, payments};

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("Shipping address is required.")]
    MissingAddress,
    #[error("{0}")]
    Order(ApiError),
    /// The order exists; only the payment hand-off failed.
    #[error("Order #{order_id} was placed but payment could not be started: {source}")]
    Payment { order_id: i64, source: ApiError },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutOutcome {
    pub order: Order,
    pub intent: PaymentIntent,
}

/// # Errors
///
/// `MissingAddress` before any request; `Order` when placing fails (no
/// payment is attempted); `Payment` when only the intent fails.
pub async fn checkout(api: &ApiClient, address: &str, currency: &str) -> Result<CheckoutOutcome, CheckoutError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(CheckoutError::MissingAddress);
    }
    let order = orders::place_order(api, &OrderRequest { address: address.to_owned() })
        .await
        .map_err(CheckoutError::Order)?;
    let request = CreatePaymentIntentRequest { order_id: order.id, currency: currency.to_owned() };
    let intent = payments::create_payment_intent(api, &request)
        .await
        .map_err(|source| CheckoutError::Payment { order_id: order.id, source })?;
    Ok(CheckoutOutcome { order, intent })
}

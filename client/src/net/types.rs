//! Shared wire DTOs for the storefront/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON shapes (camelCase field names,
//! SCREAMING_SNAKE_CASE enum tags) so serde round-trips stay lossless. The
//! backend owns every invariant; nothing here validates beyond parsing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================
// Auth
// =============================================================

/// Credentials posted to `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Authenticated session returned by `/auth/login` and persisted client-side.
///
/// Never mutated in place: login replaces it wholesale, logout drops it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Bearer token attached to every outgoing request.
    pub token: String,
    /// Backend user identifier.
    pub user_id: i64,
    pub email: String,
    pub role: UserRole,
}

/// Account role as issued by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    #[default]
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_OWNER")]
    Owner,
}

impl UserRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "ROLE_USER",
            Self::Owner => "ROLE_OWNER",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================
// Users
// =============================================================

/// A user record as returned by the `/users` endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_no: String,
    pub address: String,
    pub role: UserRole,
}

/// Payload for user creation, registration and profile updates.
///
/// `password` is optional on update; `None` is omitted from the JSON body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRegistrationRequest {
    pub email: String,
    pub code: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendVerificationRequest {
    pub email: String,
}

// =============================================================
// Artworks
// =============================================================

/// Closed set of artwork category tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArtCategory {
    Painting,
    Drawing,
    DigitalArt,
    Photography,
    Sculpture,
    Print,
    Illustration,
    MixedMedia,
    Craft,
    #[default]
    Other,
}

impl ArtCategory {
    /// Every category in backend declaration order.
    pub const ALL: [Self; 10] = [
        Self::Painting,
        Self::Drawing,
        Self::DigitalArt,
        Self::Photography,
        Self::Sculpture,
        Self::Print,
        Self::Illustration,
        Self::MixedMedia,
        Self::Craft,
        Self::Other,
    ];

    /// Wire tag, also used as the `/artworks/category/{tag}` path segment.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Painting => "PAINTING",
            Self::Drawing => "DRAWING",
            Self::DigitalArt => "DIGITAL_ART",
            Self::Photography => "PHOTOGRAPHY",
            Self::Sculpture => "SCULPTURE",
            Self::Print => "PRINT",
            Self::Illustration => "ILLUSTRATION",
            Self::MixedMedia => "MIXED_MEDIA",
            Self::Craft => "CRAFT",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for ArtCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the ten category tags.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown art category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ArtCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// An artwork as persisted by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: ArtCategory,
    #[serde(default)]
    pub label: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub img_url: Option<String>,
}

/// JSON part of the artwork create/update multipart body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtworkRequest {
    pub title: String,
    pub description: String,
    pub category: ArtCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub price: f64,
}

/// A binary image selected in the browser, ready to be sent as a form part.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

// =============================================================
// Cart
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRequest {
    pub user_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub cart_items: Vec<CartItem>,
    #[serde(default)]
    pub total_items: i64,
    #[serde(default)]
    pub total_price: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    pub cart_id: i64,
    pub artwork_id: i64,
    pub quantity: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i64,
    pub cart_id: i64,
    pub artwork_id: i64,
    pub quantity: i64,
}

// =============================================================
// Orders
// =============================================================

/// Order lifecycle status; transitions are enforced by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 5] = [Self::Pending, Self::Confirmed, Self::Shipped, Self::Delivered, Self::Cancelled];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known order or payment status tag.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_owned()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub artwork_id: i64,
    pub artwork_title: String,
    #[serde(default)]
    pub artwork_img_url: Option<String>,
    pub quantity: i64,
    pub price_at_purchase: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total_price: f64,
    pub address: String,
    pub status: OrderStatus,
    /// ISO-8601 local timestamp as emitted by the backend.
    pub ordered_at: String,
}

// =============================================================
// Payments
// =============================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Success,
    Failed,
}

impl PaymentStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Success, Self::Failed];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_owned()))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub method: Option<String>,
    pub status: PaymentStatus,
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    pub order_id: i64,
    /// ISO currency code, e.g. `"USD"`.
    pub currency: String,
}

/// Handle for the external payment provider. The secret is never logged.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub client_secret: String,
}

impl fmt::Debug for PaymentIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentIntent").field("client_secret", &"<redacted>").finish()
    }
}

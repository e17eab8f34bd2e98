//! Networking: HTTP adapter plus one module per backend resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves bytes, `http` adds base URL, bearer token and JSON
//! handling, and the resource modules (`auth`, `users`, `artworks`, `cart`,
//! `orders`, `payments`) expose one async function per endpoint. `types`
//! defines the shared wire schema.

pub mod artworks;
pub mod auth;
pub mod cart;
pub mod error;
pub mod http;
pub mod orders;
pub mod payments;
#[cfg(test)]
pub mod test_support;
pub mod transport;
pub mod types;
pub mod users;

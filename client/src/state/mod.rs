//! Client-side state and flow models.
//!
//! DESIGN
//! ======
//! Everything here is plain Rust driven by the pages: auth lifecycle,
//! persisted session, and the multi-step flows (registration, artwork form,
//! checkout). Only `auth` touches Leptos signals.

pub mod artwork_form;
pub mod auth;
pub mod checkout;
pub mod dashboard;
pub mod feed;
pub mod registration;
pub mod session;

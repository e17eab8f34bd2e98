//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod artwork;
pub mod cart;
pub mod checkout;
pub mod dashboard;
pub mod feed;
pub mod login;
pub mod orders;
pub mod profile;
pub mod register;

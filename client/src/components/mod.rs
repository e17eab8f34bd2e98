//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome, artwork cards and forms, and the
//! owner dashboard tabs. They read the auth context and call services
//! directly; routing stays in `pages`.

pub mod art_card;
pub mod art_form_overlay;
pub mod art_overlay;
pub mod artworks_tab;
pub mod choose;
pub mod navbar;
pub mod orders_tab;
pub mod payments_tab;
pub mod tabs;
pub mod users_tab;
pub mod verification;

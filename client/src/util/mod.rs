//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, file input,
//! component lifetime) from page and component logic.

pub mod auth;
pub mod dialog;
pub mod file;
pub mod format;
pub mod mount_guard;
pub mod storage;

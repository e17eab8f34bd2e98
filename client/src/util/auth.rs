//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Member pages (cart, checkout, orders, profile) apply identical
//! unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthContext, AuthState};

/// True once storage has been read and nobody is signed in.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    *state == AuthState::Anonymous
}

/// Redirect to `/login` whenever auth has resolved and no user is present.
pub fn install_unauth_redirect<F>(auth: AuthContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.state.with(should_redirect_unauth) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthContext`] is provided once at the app root. Route guards, the navbar
//! and member pages read [`AuthState`] from it; login and logout go through it
//! so the signal and persisted storage never drift apart.
//!
//! LIFECYCLE
//! =========
//! `Uninitialized` during SSR and the first hydrated render, `Loading` while
//! storage is read, then `Authenticated` or `Anonymous`. Reading storage only
//! after hydration keeps server and client markup identical.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::SessionStore;
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{LoginRequest, Session, UserRole};
use crate::util::storage::StorageError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Uninitialized,
    Loading,
    Authenticated(Session),
    Anonymous,
}

impl AuthState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_owner(&self) -> bool {
        self.session().is_some_and(|s| s.role == UserRole::Owner)
    }

    /// True once storage has been read.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Authenticated(_) | Self::Anonymous)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("could not save session: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Inline text for the login form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message("Login failed"),
            Self::Storage(_) => "Login failed: session could not be saved".to_owned(),
        }
    }
}

/// Resolve the persisted session. Corrupt storage is cleared, never fatal.
pub fn restore(store: &SessionStore) -> AuthState {
    match store.current_user() {
        Ok(Some(session)) => AuthState::Authenticated(session),
        Ok(None) => AuthState::Anonymous,
        Err(e) => {
            leptos::logging::warn!("auth: {e}; clearing stored session");
            store.clear();
            AuthState::Anonymous
        }
    }
}

/// Authenticate and persist the resulting session.
///
/// On failure the previously persisted session is left exactly as it was.
///
/// # Errors
///
/// [`AuthError::Api`] when the backend rejects the credentials or is
/// unreachable, [`AuthError::Storage`] when the session cannot be saved.
pub async fn login(api: &ApiClient, credentials: &LoginRequest) -> Result<Session, AuthError> {
    let session = crate::net::auth::login(api, credentials).await?;
    api.session().persist(&session)?;
    Ok(session)
}

pub fn logout(store: &SessionStore) -> AuthState {
    store.clear();
    AuthState::Anonymous
}

/// App-wide auth handle. `Copy`, so closures capture it freely.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    api: StoredValue<ApiClient>,
}

impl AuthContext {
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: RwSignal::new(AuthState::Uninitialized),
            api: StoredValue::new(api),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Read storage once. Later calls are no-ops.
    pub fn initialize(&self) {
        if self.state.get_untracked() != AuthState::Uninitialized {
            return;
        }
        self.state.set(AuthState::Loading);
        let api = self.api();
        self.state.set(restore(api.session()));
    }

    /// # Errors
    ///
    /// See [`login`]; the signal is only touched on success.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session, AuthError> {
        let api = self.api();
        let session = login(&api, credentials).await?;
        self.state.set(AuthState::Authenticated(session.clone()));
        Ok(session)
    }

    pub fn logout(&self) {
        let api = self.api();
        self.state.set(logout(api.session()));
    }

    /// Tracked read of the current session.
    pub fn session(&self) -> Option<Session> {
        self.state.with(|s| s.session().cloned())
    }

    pub fn is_owner(&self) -> bool {
        self.state.with(AuthState::is_owner)
    }
}

use futures::executor::block_on;

use super::*;
use crate::net::test_support;
use crate::net::transport::Method;
use crate::state::session::{TOKEN_KEY, USER_KEY};
use crate::util::storage::KeyValueStorage;

// =============================================================
// Helpers
// =============================================================

const SESSION_JSON: &str = r#"{"token":"tok-1","userId":3,"email":"ada@example.com","role":"ROLE_USER"}"#;

fn credentials() -> LoginRequest {
    LoginRequest { email: "ada@example.com".to_owned(), password: "secret".to_owned() }
}

fn owner_session() -> Session {
    Session {
        token: "tok-o".to_owned(),
        user_id: 1,
        email: "owner@example.com".to_owned(),
        role: UserRole::Owner,
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn derived_flags_follow_state() {
    assert!(!AuthState::Uninitialized.is_resolved());
    assert!(!AuthState::Loading.is_resolved());
    assert!(AuthState::Anonymous.is_resolved());
    assert!(!AuthState::Anonymous.is_authenticated());

    let owner = AuthState::Authenticated(owner_session());
    assert!(owner.is_resolved());
    assert!(owner.is_authenticated());
    assert!(owner.is_owner());
    assert_eq!(owner.session().map(|s| s.user_id), Some(1));
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_empty_storage_is_anonymous() {
    let (_, api) = test_support::client();
    assert_eq!(restore(api.session()), AuthState::Anonymous);
}

#[test]
fn restore_corrupt_user_clears_storage() {
    let storage = std::sync::Arc::new(crate::util::storage::MemoryStorage::new());
    storage.set(TOKEN_KEY, "tok-1").unwrap();
    storage.set(USER_KEY, "{{{").unwrap();
    let store = SessionStore::new(storage.clone());

    assert_eq!(restore(&store), AuthState::Anonymous);
    assert_eq!(storage.get(USER_KEY), None);
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn restore_valid_session_is_authenticated() {
    let (_, api) = test_support::client();
    api.session().persist(&owner_session()).unwrap();
    assert_eq!(restore(api.session()), AuthState::Authenticated(owner_session()));
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_persists_both_keys() {
    let (stub, api) = test_support::client();
    stub.respond(200, SESSION_JSON);

    let session = block_on(login(&api, &credentials())).unwrap();
    assert_eq!(session.token, "tok-1");
    assert_eq!(api.session().token().as_deref(), Some("tok-1"));
    assert_eq!(api.session().current_user(), Ok(Some(session)));

    let req = stub.last();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, test_support::url("/auth/login"));
}

#[test]
fn failed_login_leaves_previous_session() {
    let (stub, api) = test_support::client();
    api.session().persist(&owner_session()).unwrap();
    stub.respond(401, r#"{"status":401,"message":"Invalid email or password"}"#);

    let err = block_on(login(&api, &credentials())).unwrap_err();
    assert_eq!(err.user_message(), "Invalid email or password");
    assert_eq!(api.session().current_user(), Ok(Some(owner_session())));
}

#[test]
fn failed_login_without_message_uses_fallback() {
    let (stub, api) = test_support::client();
    stub.fail(ApiError::Transport("offline".to_owned()));

    let err = block_on(login(&api, &credentials())).unwrap_err();
    assert_eq!(err.user_message(), "Login failed");
    assert_eq!(api.session().current_user(), Ok(None));
}

#[test]
fn login_then_logout_ends_anonymous_and_empty() {
    let (stub, api) = test_support::client();
    stub.respond(200, SESSION_JSON);

    block_on(login(&api, &credentials())).unwrap();
    assert_eq!(logout(api.session()), AuthState::Anonymous);
    assert_eq!(api.session().current_user(), Ok(None));
    assert_eq!(api.session().token(), None);
}

#[test]
fn logout_twice_is_harmless() {
    let (_, api) = test_support::client();
    assert_eq!(logout(api.session()), AuthState::Anonymous);
    assert_eq!(logout(api.session()), AuthState::Anonymous);
}

// =============================================================
// AuthContext
// =============================================================

#[test]
fn context_initialize_runs_once() {
    let (_, api) = test_support::client();
    api.session().persist(&owner_session()).unwrap();
    let auth = AuthContext::new(api.clone());

    assert_eq!(auth.state.get_untracked(), AuthState::Uninitialized);
    auth.initialize();
    assert!(auth.state.get_untracked().is_owner());

    api.session().clear();
    auth.initialize();
    assert!(auth.state.get_untracked().is_owner());
}

#[test]
fn context_failed_login_keeps_state() {
    let (stub, api) = test_support::client();
    api.session().persist(&owner_session()).unwrap();
    let auth = AuthContext::new(api);
    auth.initialize();
    stub.respond(401, "");

    assert!(block_on(auth.login(&credentials())).is_err());
    assert_eq!(auth.state.get_untracked(), AuthState::Authenticated(owner_session()));
}

#[test]
fn context_login_logout_sequence() {
    let (stub, api) = test_support::client();
    let auth = AuthContext::new(api.clone());
    auth.initialize();
    assert_eq!(auth.state.get_untracked(), AuthState::Anonymous);

    stub.respond(200, SESSION_JSON);
    block_on(auth.login(&credentials())).unwrap();
    assert!(auth.state.get_untracked().is_authenticated());

    auth.logout();
    assert_eq!(auth.state.get_untracked(), AuthState::Anonymous);
    assert_eq!(api.session().current_user(), Ok(None));
}

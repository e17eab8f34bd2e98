use super::*;
use crate::net::types::{Session, UserRole};

#[test]
fn should_redirect_unauth_when_resolved_and_anonymous() {
    assert!(should_redirect_unauth(&AuthState::Anonymous));
}

#[test]
fn should_not_redirect_while_unresolved() {
    assert!(!should_redirect_unauth(&AuthState::Uninitialized));
    assert!(!should_redirect_unauth(&AuthState::Loading));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let state = AuthState::Authenticated(Session {
        token: "t".to_owned(),
        user_id: 1,
        email: "a@example.com".to_owned(),
        role: UserRole::User,
    });
    assert!(!should_redirect_unauth(&state));
}

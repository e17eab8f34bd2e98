use futures::executor::block_on;

use super::*;
use crate::net::test_support;
use crate::net::users;

// =============================================================
// Helpers
// =============================================================

fn filled() -> RegistrationWizard {
    let mut wizard = RegistrationWizard::new();
    let draft = wizard.draft_mut().unwrap();
    draft.first_name = "Ada".to_owned();
    draft.last_name = "Lovelace".to_owned();
    draft.email = " ada@example.com ".to_owned();
    draft.phone_no = "555-0100".to_owned();
    draft.address = "1 Main St".to_owned();
    draft.password = "secret".to_owned();
    wizard
}

fn at_verify() -> RegistrationWizard {
    let mut wizard = filled();
    wizard.begin_register().unwrap();
    wizard.finish_register(Ok("Code sent".to_owned()));
    wizard
}

fn bad_code() -> ApiError {
    ApiError::from_status(400, r#"{"status":400,"message":"Invalid verification code"}"#)
}

// =============================================================
// Register step
// =============================================================

#[test]
fn blank_field_blocks_register() {
    let mut wizard = RegistrationWizard::new();
    wizard.draft_mut().unwrap().first_name = "Ada".to_owned();

    assert_eq!(wizard.begin_register(), None);
    assert_eq!(wizard.error.as_deref(), Some("Last name is required."));
    assert!(!wizard.is_busy(WizardAction::Register));
}

#[test]
fn register_request_is_trimmed() {
    let mut wizard = filled();
    let request = wizard.begin_register().unwrap();
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.password.as_deref(), Some("secret"));
    assert!(wizard.is_busy(WizardAction::Register));
}

#[test]
fn second_begin_register_is_blocked_while_in_flight() {
    let mut wizard = filled();
    assert!(wizard.begin_register().is_some());
    assert!(wizard.begin_register().is_none());
}

#[test]
fn register_failure_keeps_draft_and_shows_server_message() {
    let mut wizard = filled();
    wizard.begin_register().unwrap();
    wizard.finish_register(Err(ApiError::from_status(409, r#"{"message":"Email already registered"}"#)));

    assert!(matches!(wizard.step(), WizardStep::Register(d) if d.first_name == "Ada"));
    assert_eq!(wizard.error.as_deref(), Some("Email already registered"));
    assert!(!wizard.is_busy(WizardAction::Register));
}

#[test]
fn register_failure_without_message_uses_fallback() {
    let mut wizard = filled();
    wizard.begin_register().unwrap();
    wizard.finish_register(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(wizard.error.as_deref(), Some(REGISTER_FAILED));
}

#[test]
fn register_success_moves_to_verify() {
    let wizard = at_verify();
    assert!(matches!(wizard.step(), WizardStep::Verify(_)));
    assert_eq!(wizard.message.as_deref(), Some("Code sent"));
    assert_eq!(wizard.email(), Some("ada@example.com"));
}

// =============================================================
// Verify step
// =============================================================

#[test]
fn verify_not_offered_on_register_step() {
    let mut wizard = filled();
    assert_eq!(wizard.begin_verify("123456"), None);
    assert_eq!(wizard.begin_resend(), None);
}

#[test]
fn wrong_code_stays_on_verify_with_email() {
    let mut wizard = at_verify();
    let request = wizard.begin_verify("000000").unwrap();
    assert_eq!(request.email, "ada@example.com");

    wizard.finish_verify(Err(bad_code()));
    assert!(matches!(wizard.step(), WizardStep::Verify(_)));
    assert_eq!(wizard.email(), Some("ada@example.com"));
    assert_eq!(wizard.error.as_deref(), Some("Invalid verification code"));
}

#[test]
fn expired_code_shows_backend_text() {
    let mut wizard = at_verify();
    wizard.begin_verify("123456").unwrap();

    wizard.finish_verify(Err(ApiError::from_status(400, "Invalid or expired verification code.")));
    assert!(matches!(wizard.step(), WizardStep::Verify(_)));
    assert_eq!(wizard.error.as_deref(), Some("Invalid or expired verification code."));
}

#[test]
fn empty_code_is_rejected_locally() {
    let mut wizard = at_verify();
    assert_eq!(wizard.begin_verify("   "), None);
    assert!(wizard.error.is_some());
}

#[test]
fn correct_code_reaches_success_and_drops_draft() {
    let mut wizard = at_verify();
    wizard.begin_verify("123456").unwrap();
    wizard.finish_verify(Ok("Account verified".to_owned()));

    assert_eq!(wizard.step(), &WizardStep::Success);
    assert_eq!(wizard.email(), None);
    assert_eq!(wizard.begin_verify("123456"), None);
}

#[test]
fn resend_only_changes_text() {
    let mut wizard = at_verify();
    let request = wizard.begin_resend().unwrap();
    assert_eq!(request.email, "ada@example.com");
    assert!(wizard.begin_resend().is_none());

    wizard.finish_resend(Err(ApiError::Transport("offline".to_owned())));
    assert!(matches!(wizard.step(), WizardStep::Verify(_)));
    assert_eq!(wizard.error.as_deref(), Some(RESEND_FAILED));

    wizard.begin_resend().unwrap();
    wizard.finish_resend(Ok("New code sent".to_owned()));
    assert_eq!(wizard.message.as_deref(), Some("New code sent"));
    assert_eq!(wizard.error, None);
}

#[test]
fn resend_and_verify_guards_are_independent() {
    let mut wizard = at_verify();
    assert!(wizard.begin_resend().is_some());
    assert!(wizard.begin_verify("123456").is_some());
}

// =============================================================
// End to end against the stub backend
// =============================================================

#[test]
fn register_then_correct_code_reaches_success() {
    let (stub, api) = test_support::client();
    stub.respond(200, "Verification code sent");
    stub.respond(400, r#"{"status":400,"message":"Invalid verification code"}"#);
    stub.respond(200, "Account verified");

    let mut wizard = filled();
    let request = wizard.begin_register().unwrap();
    wizard.finish_register(block_on(users::register(&api, &request)));
    assert!(matches!(wizard.step(), WizardStep::Verify(_)));

    let request = wizard.begin_verify("000000").unwrap();
    wizard.finish_verify(block_on(users::verify(&api, &request)));
    assert!(matches!(wizard.step(), WizardStep::Verify(_)));
    assert_eq!(wizard.error.as_deref(), Some("Invalid verification code"));

    let request = wizard.begin_verify("123456").unwrap();
    wizard.finish_verify(block_on(users::verify(&api, &request)));
    assert_eq!(wizard.step(), &WizardStep::Success);
    assert_eq!(stub.count(), 3);
}

#[test]
fn service_layer_does_not_deduplicate() {
    let (stub, api) = test_support::client();
    let mut wizard = filled();
    let request = wizard.begin_register().unwrap();

    block_on(users::register(&api, &request)).unwrap();
    block_on(users::register(&api, &request)).unwrap();
    assert_eq!(stub.count(), 2);
    assert!(wizard.begin_register().is_none());
}

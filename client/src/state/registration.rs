//! Registration and email-verification wizard.
//!
//! DESIGN
//! ======
//! The step is a closed enum carrying its own payload, so the verify step can
//! never be reached without the email it verifies. Steps only move forward:
//! `Register -> Verify -> Success`.
//!
//! Each action has its own in-flight flag. `begin_*` hands out the request to
//! send, or `None` while that action is already running (the page disables
//! the matching button off the same flag). `finish_*` applies the outcome.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::net::error::ApiError;
use crate::net::types::{ResendVerificationRequest, UserRequest, VerifyRegistrationRequest};

pub const REGISTER_FAILED: &str = "Registration failed.";
pub const VERIFY_FAILED: &str = "Verification failed.";
pub const RESEND_FAILED: &str = "Failed to resend verification code.";

/// Sign-up fields, kept in memory only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_no: String,
    pub address: String,
    pub password: String,
}

impl RegistrationDraft {
    pub fn to_request(&self) -> UserRequest {
        UserRequest {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone_no: self.phone_no.trim().to_owned(),
            password: Some(self.password.clone()),
            address: self.address.trim().to_owned(),
        }
    }

    /// Label of the first blank required field.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Email", &self.email),
            ("Phone number", &self.phone_no),
            ("Address", &self.address),
            ("Password", &self.password),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardStep {
    Register(RegistrationDraft),
    Verify(RegistrationDraft),
    Success,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardAction {
    Register,
    Verify,
    Resend,
}

impl WizardAction {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Register => REGISTER_FAILED,
            Self::Verify => VERIFY_FAILED,
            Self::Resend => RESEND_FAILED,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationWizard {
    step: WizardStep,
    registering: bool,
    verifying: bool,
    resending: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Register(RegistrationDraft::default()),
            registering: false,
            verifying: false,
            resending: false,
            message: None,
            error: None,
        }
    }

    pub fn step(&self) -> &WizardStep {
        &self.step
    }

    /// Editable draft; only while still on the register step.
    pub fn draft_mut(&mut self) -> Option<&mut RegistrationDraft> {
        match &mut self.step {
            WizardStep::Register(draft) => Some(draft),
            _ => None,
        }
    }

    /// Email being registered, until the wizard completes.
    pub fn email(&self) -> Option<&str> {
        match &self.step {
            WizardStep::Register(draft) | WizardStep::Verify(draft) => Some(draft.email.trim()),
            WizardStep::Success => None,
        }
    }

    pub fn is_busy(&self, action: WizardAction) -> bool {
        match action {
            WizardAction::Register => self.registering,
            WizardAction::Verify => self.verifying,
            WizardAction::Resend => self.resending,
        }
    }

    fn start(&mut self, action: WizardAction) {
        match action {
            WizardAction::Register => self.registering = true,
            WizardAction::Verify => self.verifying = true,
            WizardAction::Resend => self.resending = true,
        }
        self.message = None;
        self.error = None;
    }

    fn done(&mut self, action: WizardAction) {
        match action {
            WizardAction::Register => self.registering = false,
            WizardAction::Verify => self.verifying = false,
            WizardAction::Resend => self.resending = false,
        }
    }

    fn fail(&mut self, action: WizardAction, err: &ApiError) {
        self.error = Some(err.user_message(action.fallback_message()));
    }

    pub fn begin_register(&mut self) -> Option<UserRequest> {
        if self.registering {
            return None;
        }
        let WizardStep::Register(draft) = &self.step else {
            return None;
        };
        if let Some(field) = draft.missing_field() {
            self.message = None;
            self.error = Some(format!("{field} is required."));
            return None;
        }
        let request = draft.to_request();
        self.start(WizardAction::Register);
        Some(request)
    }

    pub fn finish_register(&mut self, result: Result<String, ApiError>) {
        self.done(WizardAction::Register);
        let WizardStep::Register(draft) = &self.step else {
            return;
        };
        match result {
            Ok(message) => {
                self.step = WizardStep::Verify(draft.clone());
                self.message = Some(message);
            }
            Err(e) => self.fail(WizardAction::Register, &e),
        }
    }

    pub fn begin_verify(&mut self, code: &str) -> Option<VerifyRegistrationRequest> {
        if self.verifying {
            return None;
        }
        let WizardStep::Verify(draft) = &self.step else {
            return None;
        };
        let code = code.trim();
        if code.is_empty() {
            self.message = None;
            self.error = Some("Enter the verification code.".to_owned());
            return None;
        }
        let request = VerifyRegistrationRequest { email: draft.email.trim().to_owned(), code: code.to_owned() };
        self.start(WizardAction::Verify);
        Some(request)
    }

    pub fn finish_verify(&mut self, result: Result<String, ApiError>) {
        self.done(WizardAction::Verify);
        if !matches!(self.step, WizardStep::Verify(_)) {
            return;
        }
        match result {
            Ok(message) => {
                // Drops the draft, password included.
                self.step = WizardStep::Success;
                self.message = Some(message);
            }
            Err(e) => self.fail(WizardAction::Verify, &e),
        }
    }

    pub fn begin_resend(&mut self) -> Option<ResendVerificationRequest> {
        if self.resending {
            return None;
        }
        let WizardStep::Verify(draft) = &self.step else {
            return None;
        };
        let request = ResendVerificationRequest { email: draft.email.trim().to_owned() };
        self.start(WizardAction::Resend);
        Some(request)
    }

    pub fn finish_resend(&mut self, result: Result<String, ApiError>) {
        self.done(WizardAction::Resend);
        match result {
            Ok(message) => self.message = Some(message),
            Err(e) => self.fail(WizardAction::Resend, &e),
        }
    }
}

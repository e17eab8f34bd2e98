//! Registration page: sign-up form, then email verification.
//!
//! The wizard lives in a page-local signal, so leaving the page drops the
//! draft (password included).

use leptos::prelude::*;

use crate::components::verification::Verification;
use crate::net::users;
use crate::state::auth::AuthContext;
use crate::state::registration::{RegistrationDraft, RegistrationWizard, WizardAction, WizardStep};
use crate::util::mount_guard::{MountGuard, spawn_guarded};

/// Which step to render; the payload stays inside the wizard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StepKind {
    Register,
    Verify,
    Success,
}

fn step_kind(wizard: &RegistrationWizard) -> StepKind {
    match wizard.step() {
        WizardStep::Register(_) => StepKind::Register,
        WizardStep::Verify(_) => StepKind::Verify,
        WizardStep::Success => StepKind::Success,
    }
}

/// One text input bound to a draft field.
#[component]
fn DraftField(
    wizard: RwSignal<RegistrationWizard>,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
    read: fn(&RegistrationDraft) -> &String,
    write: fn(&mut RegistrationDraft) -> &mut String,
) -> impl IntoView {
    let value = move || {
        wizard.with(|w| match w.step() {
            WizardStep::Register(draft) => read(draft).clone(),
            _ => String::new(),
        })
    };
    view! {
        <input
            type=kind
            placeholder=placeholder
            required
            prop:value=value
            on:input=move |ev| {
                let text = event_target_value(&ev);
                wizard.update(|w| {
                    if let Some(draft) = w.draft_mut() {
                        *write(draft) = text;
                    }
                });
            }
        />
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let guard = MountGuard::install();
    let wizard = RwSignal::new(RegistrationWizard::new());
    let step = Memo::new(move |_| wizard.with(step_kind));
    let registering = move || wizard.with(|w| w.is_busy(WizardAction::Register));

    let on_register = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = wizard.try_update(RegistrationWizard::begin_register).flatten() else {
            return;
        };
        let api = auth.api();
        spawn_guarded(
            &guard,
            async move { users::register(&api, &request).await },
            move |result| wizard.update(|w| w.finish_register(result)),
        );
    });

    view! {
        <div class="auth-page">
            {move || match step.get() {
                StepKind::Register => {
                    view! {
                        <form class="auth-form" on:submit=move |ev| on_register.run(ev)>
                            <h2>"Register"</h2>
                            {move || wizard.with(|w| w.error.clone()).map(|e| view! { <p class="form-error">{e}</p> })}
                            <DraftField wizard=wizard placeholder="First Name" read=|d| &d.first_name write=|d| &mut d.first_name/>
                            <DraftField wizard=wizard placeholder="Last Name" read=|d| &d.last_name write=|d| &mut d.last_name/>
                            <DraftField wizard=wizard placeholder="Email" kind="email" read=|d| &d.email write=|d| &mut d.email/>
                            <DraftField wizard=wizard placeholder="Phone Number" read=|d| &d.phone_no write=|d| &mut d.phone_no/>
                            <DraftField wizard=wizard placeholder="Address" read=|d| &d.address write=|d| &mut d.address/>
                            <DraftField
                                wizard=wizard
                                placeholder="Password"
                                kind="password"
                                read=|d| &d.password
                                write=|d| &mut d.password
                            />
                            <button class="btn btn--primary" type="submit" disabled=registering>
                                {move || if registering() { "Registering..." } else { "Register" }}
                            </button>
                        </form>
                    }
                        .into_any()
                }
                StepKind::Verify => view! { <Verification wizard=wizard/> }.into_any(),
                StepKind::Success => {
                    view! {
                        <div class="auth-form auth-form--done">
                            <h2>"Registration Successful"</h2>
                            <p class="form-message">"Your account has been verified. You can now log in."</p>
                            <a href="/login">"Go to Login"</a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

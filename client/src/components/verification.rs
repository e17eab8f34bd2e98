//! Email verification step of the registration wizard.
//!
//! Verify and Resend each disable only their own button while in flight.

use leptos::prelude::*;

use crate::net::users;
use crate::state::auth::AuthContext;
use crate::state::registration::{RegistrationWizard, WizardAction};
use crate::util::mount_guard::{MountGuard, spawn_guarded};

#[component]
pub fn Verification(wizard: RwSignal<RegistrationWizard>) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let guard = MountGuard::install();
    let code = RwSignal::new(String::new());

    let email = move || wizard.with(|w| w.email().unwrap_or_default().to_owned());
    let verifying = move || wizard.with(|w| w.is_busy(WizardAction::Verify));
    let resending = move || wizard.with(|w| w.is_busy(WizardAction::Resend));

    let verify_guard = guard.clone();
    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let entered = code.get_untracked();
        let Some(request) = wizard.try_update(|w| w.begin_verify(&entered)).flatten() else {
            return;
        };
        let api = auth.api();
        spawn_guarded(
            &verify_guard,
            async move { users::verify(&api, &request).await },
            move |result| wizard.update(|w| w.finish_verify(result)),
        );
    };

    let on_resend = move |_| {
        let Some(request) = wizard.try_update(RegistrationWizard::begin_resend).flatten() else {
            return;
        };
        let api = auth.api();
        spawn_guarded(
            &guard,
            async move { users::resend_verification(&api, &request).await },
            move |result| wizard.update(|w| w.finish_resend(result)),
        );
    };

    view! {
        <form class="auth-form" on:submit=on_verify>
            <h2>"Verify Your Email"</h2>
            <p class="auth-form__hint">{move || format!("A verification code was sent to {}", email())}</p>
            {move || wizard.with(|w| w.error.clone()).map(|e| view! { <p class="form-error">{e}</p> })}
            {move || wizard.with(|w| w.message.clone()).map(|m| view! { <p class="form-message">{m}</p> })}
            <input
                type="text"
                placeholder="Verification Code"
                autocomplete="one-time-code"
                required
                prop:value=move || code.get()
                on:input=move |ev| code.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit" disabled=verifying>
                {move || if verifying() { "Verifying..." } else { "Verify" }}
            </button>
            <button class="btn btn--link" type="button" disabled=resending on:click=on_resend>
                {move || if resending() { "Sending..." } else { "Resend Code" }}
            </button>
        </form>
    }
}

//! Login page: email + password against the backend.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginRequest;
use crate::state::auth::AuthContext;
use crate::util::mount_guard::{MountGuard, spawn_guarded};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let guard = MountGuard::install();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = LoginRequest {
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
        };
        if credentials.email.is_empty() || credentials.password.is_empty() {
            error.set(Some("Enter both email and password.".to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        let navigate = navigate.clone();
        spawn_guarded(&guard, async move { auth.login(&credentials).await }, move |result| {
            busy.set(false);
            match result {
                Ok(_) => navigate("/", NavigateOptions::default()),
                Err(e) => {
                    leptos::logging::log!("login: rejected: {e}");
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Login"</h2>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <input
                    type="email"
                    placeholder="Email"
                    autocomplete="username"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
                <p class="auth-form__hint">"No account yet? " <a href="/register">"Register"</a></p>
            </form>
        </div>
    }
}

//! Top navigation bar.

use leptos::prelude::*;

use crate::state::auth::{AuthContext, AuthState};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let signed_in = move || auth.state.with(AuthState::is_authenticated);
    let anonymous = move || auth.state.with(|s| s.is_resolved() && !s.is_authenticated());

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"ArtStore"</a>
            <Show when=anonymous>
                <span class="navbar__hint">"Login or register to purchase"</span>
            </Show>
            <div class="navbar__links">
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <a href="/login">"Login"</a>
                            <a href="/register">"Register"</a>
                        }
                    }
                >
                    <Show when=move || auth.is_owner()>
                        <a href="/dashboard">"Dashboard"</a>
                    </Show>
                    <a href="/orders">"Orders"</a>
                    <a href="/cart">"Cart"</a>
                    <a href="/profile">"Profile"</a>
                    <button class="btn btn--link" on:click=move |_| auth.logout()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}

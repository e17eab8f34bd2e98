//! Profile page: view, edit or delete the signed-in account.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{User, UserRequest};
use crate::net::users;
use crate::state::auth::AuthContext;
use crate::util::auth::install_unauth_redirect;
use crate::util::dialog;
use crate::util::mount_guard::{MountGuard, spawn_guarded};

/// Edit form seeded from the loaded profile. The password field starts blank
/// and is only sent when filled in.
fn draft_from(user: &User) -> UserRequest {
    UserRequest {
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        email: user.email.clone(),
        phone_no: user.phone_no.clone(),
        password: None,
        address: user.address.clone(),
    }
}

#[component]
fn ProfileField(
    draft: RwSignal<UserRequest>,
    name: &'static str,
    #[prop(default = "text")] kind: &'static str,
    read: fn(&UserRequest) -> &String,
    write: fn(&mut UserRequest) -> &mut String,
) -> impl IntoView {
    view! {
        <input
            name=name
            type=kind
            required
            prop:value=move || draft.with(|d| read(d).clone())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                draft.update(|d| *write(d) = value);
            }
        />
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());
    let guard = MountGuard::install();

    let profile = RwSignal::new(None::<User>);
    let draft = RwSignal::new(UserRequest::default());
    let password = RwSignal::new(String::new());
    let editing = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let deleted = RwSignal::new(false);

    Effect::new(move || {
        if deleted.get() {
            navigate("/", NavigateOptions::default());
        }
    });

    let load_guard = guard.clone();
    Effect::new(move || {
        let Some(user_id) = auth.state.with(|s| s.session().map(|s| s.user_id)) else {
            return;
        };
        let api = auth.api();
        spawn_guarded(&load_guard, async move { users::find_by_id(&api, user_id).await }, move |result| {
            match result {
                Ok(user) => {
                    draft.set(draft_from(&user));
                    profile.set(Some(user));
                }
                Err(e) => error.set(Some(e.user_message("Failed to load profile."))),
            }
        });
    });

    let save_guard = guard.clone();
    let on_save = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = auth.session().map(|s| s.user_id) else {
            return;
        };
        let mut request = draft.get_untracked();
        let new_password = password.get_untracked();
        request.password = (!new_password.is_empty()).then_some(new_password);
        message.set(None);
        error.set(None);

        let api = auth.api();
        spawn_guarded(&save_guard, async move { users::update(&api, user_id, &request).await }, move |result| {
            match result {
                Ok(user) => {
                    draft.set(draft_from(&user));
                    profile.set(Some(user));
                    password.set(String::new());
                    editing.set(false);
                    message.set(Some("Profile updated successfully.".to_owned()));
                }
                Err(e) => error.set(Some(e.user_message("Failed to update profile."))),
            }
        });
    });

    let on_delete = Callback::new(move |()| {
        let Some(user_id) = auth.session().map(|s| s.user_id) else {
            return;
        };
        if !dialog::confirm("Are you sure you want to delete your account?") {
            return;
        }
        error.set(None);
        let api = auth.api();
        spawn_guarded(&guard, async move { users::delete_by_id(&api, user_id).await }, move |result| {
            match result {
                Ok(()) => {
                    auth.logout();
                    deleted.set(true);
                }
                Err(e) => error.set(Some(e.user_message("Failed to delete account."))),
            }
        });
    });

    let on_cancel = move |_| {
        if let Some(user) = profile.get_untracked() {
            draft.set(draft_from(&user));
        }
        password.set(String::new());
        editing.set(false);
    };

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || message.get().map(|m| view! { <p class="form-message">{m}</p> })}
            {move || match profile.get() {
                None => view! { <p class="page-loading">"Loading..."</p> }.into_any(),
                Some(user) if !editing.get() => {
                    view! {
                        <dl class="profile-details">
                            <dt>"First Name"</dt>
                            <dd>{user.first_name}</dd>
                            <dt>"Last Name"</dt>
                            <dd>{user.last_name}</dd>
                            <dt>"Email"</dt>
                            <dd>{user.email}</dd>
                            <dt>"Phone"</dt>
                            <dd>{user.phone_no}</dd>
                            <dt>"Address"</dt>
                            <dd>{user.address}</dd>
                            <dt>"Role"</dt>
                            <dd>{user.role.as_str()}</dd>
                        </dl>
                        <div class="profile-actions">
                            <button class="btn" on:click=move |_| editing.set(true)>"Edit"</button>
                            <button class="btn btn--danger" on:click=move |_| on_delete.run(())>
                                "Delete Account"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                Some(_) => {
                    view! {
                        <form class="profile-form" on:submit=move |ev| on_save.run(ev)>
                            <ProfileField draft=draft name="firstName" read=|d| &d.first_name write=|d| &mut d.first_name/>
                            <ProfileField draft=draft name="lastName" read=|d| &d.last_name write=|d| &mut d.last_name/>
                            <ProfileField
                                draft=draft
                                name="email"
                                kind="email"
                                read=|d| &d.email
                                write=|d| &mut d.email
                            />
                            <ProfileField draft=draft name="phoneNo" read=|d| &d.phone_no write=|d| &mut d.phone_no/>
                            <ProfileField draft=draft name="address" read=|d| &d.address write=|d| &mut d.address/>
                            <input
                                name="password"
                                type="password"
                                placeholder="New Password (optional)"
                                autocomplete="new-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button class="btn btn--primary" type="submit">"Save"</button>
                            <button class="btn" type="button" on:click=on_cancel>"Cancel"</button>
                        </form>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

//! Dashboard tab: user accounts and roles.

use leptos::prelude::*;

use crate::net::types::User;
use crate::net::users;
use crate::state::auth::AuthContext;
use crate::state::dashboard::RoleChange;
use crate::util::dialog;
use crate::util::mount_guard::{MountGuard, spawn_guarded};

#[component]
pub fn UsersTab() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let guard = MountGuard::install();
    let rows = RwSignal::new(Vec::<User>::new());
    let error = RwSignal::new(None::<String>);

    let load_guard = guard.clone();
    Effect::new(move || {
        let api = auth.api();
        spawn_guarded(&load_guard, async move { users::find_all(&api).await }, move |result| match result {
            Ok(list) => rows.set(list),
            Err(e) => {
                leptos::logging::warn!("dashboard: users load failed: {e}");
                error.set(Some(e.user_message("Failed to load users.")));
            }
        });
    });

    let role_guard = guard.clone();
    let on_role = Callback::new(move |change: RoleChange| {
        let api = auth.api();
        spawn_guarded(&role_guard, async move { change.apply(&api).await }, move |result| match result {
            Ok(updated) => rows.update(|list| {
                if let Some(row) = list.iter_mut().find(|u| u.id == updated.id) {
                    *row = updated;
                }
            }),
            Err(e) => error.set(Some(e.user_message("Failed to change role."))),
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        if !dialog::confirm("Delete this user?") {
            return;
        }
        let api = auth.api();
        spawn_guarded(&guard, async move { users::delete_by_id(&api, id).await }, move |result| match result {
            Ok(()) => rows.update(|list| list.retain(|u| u.id != id)),
            Err(e) => error.set(Some(e.user_message("Failed to delete user."))),
        });
    });

    view! {
        <section class="dashboard-tab">
            <h2>"Users"</h2>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Role"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|user| {
                                let change = RoleChange::toggle(&user);
                                let id = user.id;
                                view! {
                                    <tr>
                                        <td>{format!("{} {}", user.first_name, user.last_name)}</td>
                                        <td>{user.email}</td>
                                        <td>{user.phone_no}</td>
                                        <td>{user.role.as_str()}</td>
                                        <td>
                                            <button class="btn" on:click=move |_| on_role.run(change)>
                                                {change.label()}
                                            </button>
                                            <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}

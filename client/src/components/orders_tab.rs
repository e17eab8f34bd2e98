//! Dashboard tab: every order, filterable by status, with status transitions.

use leptos::prelude::*;

use super::choose::Choose;
use crate::net::orders;
use crate::net::types::{Order, OrderStatus};
use crate::state::auth::AuthContext;
use crate::state::dashboard::OrderAction;
use crate::util::dialog;
use crate::util::format::{format_price, format_timestamp};
use crate::util::mount_guard::{MountGuard, spawn_guarded};

const ALL_STATUSES: &str = "ALL";

#[component]
pub fn OrdersTab() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let guard = MountGuard::install();
    let rows = RwSignal::new(Vec::<Order>::new());
    let status_filter = RwSignal::new(ALL_STATUSES.to_owned());
    let error = RwSignal::new(None::<String>);

    let load_guard = guard.clone();
    Effect::new(move || {
        let selected = status_filter.get().parse::<OrderStatus>().ok();
        let api = auth.api();
        spawn_guarded(
            &load_guard,
            async move {
                match selected {
                    Some(status) => orders::get_orders_by_status(&api, status).await,
                    None => orders::get_all_orders(&api).await,
                }
            },
            move |result| match result {
                Ok(list) => rows.set(list),
                Err(e) => {
                    leptos::logging::warn!("dashboard: orders load failed: {e}");
                    error.set(Some(e.user_message("Failed to load orders.")));
                }
            },
        );
    });

    let action_guard = guard.clone();
    let on_action = Callback::new(move |(action, id): (OrderAction, i64)| {
        let api = auth.api();
        spawn_guarded(&action_guard, async move { action.run(&api, id).await }, move |result| match result {
            Ok(updated) => rows.update(|list| {
                if let Some(row) = list.iter_mut().find(|o| o.id == updated.id) {
                    *row = updated;
                }
            }),
            Err(e) => error.set(Some(e.user_message("Order update failed."))),
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        if !dialog::confirm("Delete this order?") {
            return;
        }
        let api = auth.api();
        spawn_guarded(&guard, async move { orders::delete_order(&api, id).await }, move |result| match result {
            Ok(()) => rows.update(|list| list.retain(|o| o.id != id)),
            Err(e) => error.set(Some(e.user_message("Failed to delete order."))),
        });
    });

    let status_options = std::iter::once(ALL_STATUSES.to_owned())
        .chain(OrderStatus::ALL.iter().map(|s| s.as_str().to_owned()))
        .collect::<Vec<_>>();

    view! {
        <section class="dashboard-tab">
            <h2>"Orders"</h2>
            <Choose
                label="Status"
                value=status_filter
                options=status_options
                on_change=Callback::new(move |v: String| status_filter.set(v))
            />
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"User"</th>
                        <th>"Placed"</th>
                        <th>"Items"</th>
                        <th>"Total"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|order| {
                                let id = order.id;
                                let actions = OrderAction::available_for(order.status)
                                    .iter()
                                    .map(|&action| {
                                        view! {
                                            <button class="btn" on:click=move |_| on_action.run((action, id))>
                                                {action.label()}
                                            </button>
                                        }
                                    })
                                    .collect_view();
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>{order.user_id}</td>
                                        <td>{format_timestamp(&order.ordered_at)}</td>
                                        <td>{order.items.len()}</td>
                                        <td>{format_price(order.total_price)}</td>
                                        <td>{order.status.as_str()}</td>
                                        <td>
                                            {actions}
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

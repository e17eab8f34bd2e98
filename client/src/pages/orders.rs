//! Order history for the signed-in member.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::orders;
use crate::net::types::Order;
use crate::state::auth::AuthContext;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::{format_price, format_timestamp};
use crate::util::mount_guard::{MountGuard, spawn_guarded};

fn order_card(order: Order) -> impl IntoView {
    let items = order
        .items
        .into_iter()
        .map(|item| {
            view! {
                <li class="order-item">
                    {item.artwork_img_url.map(|src| view! { <img class="order-item__thumb" src=src alt=""/> })}
                    <a href=format!("/artwork/{}", item.artwork_id)>{item.artwork_title}</a>
                    {format!(" x{} ", item.quantity)}
                    {format_price(item.price_at_purchase)}
                </li>
            }
        })
        .collect_view();
    view! {
        <article class="order-card">
            <header class="order-card__header">
                <h2>{format!("Order #{}", order.id)}</h2>
                <span class=format!("status status--{}", order.status.as_str().to_lowercase())>
                    {order.status.as_str()}
                </span>
            </header>
            <p>{format!("Placed: {}", format_timestamp(&order.ordered_at))}</p>
            <p>{format!("Ship to: {}", order.address)}</p>
            <ul class="order-card__items">{items}</ul>
            <p class="order-card__total">{format_price(order.total_price)}</p>
        </article>
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    install_unauth_redirect(auth, use_navigate());
    let guard = MountGuard::install();
    let list = RwSignal::new(None::<Vec<Order>>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(user_id) = auth.state.with(|s| s.session().map(|s| s.user_id)) else {
            return;
        };
        let api = auth.api();
        spawn_guarded(&guard, async move { orders::get_orders_by_user_id(&api, user_id).await }, move |result| {
            match result {
                Ok(mut found) => {
                    found.sort_by(|a, b| b.ordered_at.cmp(&a.ordered_at));
                    list.set(Some(found));
                }
                Err(e) => {
                    leptos::logging::warn!("orders: load failed: {e}");
                    error.set(Some(e.user_message("Failed to load orders.")));
                    list.set(Some(Vec::new()));
                }
            }
        });
    });

    view! {
        <div class="orders-page">
            <h1>"My Orders"</h1>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || match list.get() {
                None => view! { <p class="page-loading">"Loading..."</p> }.into_any(),
                Some(found) if found.is_empty() && error.with(Option::is_none) => {
                    view! { <p class="empty-state">"No orders yet."</p> }.into_any()
                }
                Some(found) => found.into_iter().map(order_card).collect_view().into_any(),
            }}
        </div>
    }
}

//! Cart page: line items with quantity controls and a checkout link.
//!
//! The backend owns totals. Every mutation is followed by a full reload so the
//! page never computes prices locally.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::Cart;
use crate::net::{artworks, cart};
use crate::state::auth::AuthContext;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::format_price;
use crate::util::mount_guard::{MountGuard, spawn_guarded};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ItemOp {
    Increase,
    Decrease,
    Remove,
}

#[derive(Clone, Debug, PartialEq)]
struct CartView {
    cart: Cart,
    titles: HashMap<i64, String>,
}

impl CartView {
    fn title(&self, artwork_id: i64) -> String {
        self.titles.get(&artwork_id).cloned().unwrap_or_else(|| format!("Artwork #{artwork_id}"))
    }
}

/// What the body of the page shows under the error line.
#[derive(Clone, Debug, PartialEq)]
enum CartPhase {
    Loading,
    /// The first load failed; the error line is all there is to show.
    Unavailable,
    Empty,
    Items(CartView),
}

/// A failed reload keeps the last good cart on screen.
fn cart_phase(loaded: Option<CartView>, load_failed: bool) -> CartPhase {
    match loaded {
        None if load_failed => CartPhase::Unavailable,
        None => CartPhase::Loading,
        Some(current) if current.cart.cart_items.is_empty() => CartPhase::Empty,
        Some(current) => CartPhase::Items(current),
    }
}

async fn load_cart(api: &ApiClient, user_id: i64) -> Result<CartView, ApiError> {
    let cart = cart::ensure_cart(api, user_id).await?;
    let titles = if cart.cart_items.is_empty() {
        HashMap::new()
    } else {
        artworks::find_all(api).await?.into_iter().map(|a| (a.id, a.title)).collect()
    };
    Ok(CartView { cart, titles })
}

#[component]
pub fn CartPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    install_unauth_redirect(auth, use_navigate());
    let guard = MountGuard::install();
    let loaded = RwSignal::new(None::<CartView>);
    let error = RwSignal::new(None::<String>);
    let load_failed = RwSignal::new(false);
    let busy = RwSignal::new(false);
    // Bumped after each mutation to re-run the loader.
    let revision = RwSignal::new(0_u32);

    let load_guard = guard.clone();
    Effect::new(move || {
        revision.track();
        let Some(user_id) = auth.state.with(|s| s.session().map(|s| s.user_id)) else {
            return;
        };
        let api = auth.api();
        spawn_guarded(&load_guard, async move { load_cart(&api, user_id).await }, move |result| {
            busy.set(false);
            match result {
                Ok(current) => {
                    load_failed.set(false);
                    loaded.set(Some(current));
                }
                Err(e) => {
                    leptos::logging::warn!("cart: load failed: {e}");
                    load_failed.set(true);
                    error.set(Some(e.user_message("Failed to load cart.")));
                }
            }
        });
    });

    let op_guard = guard.clone();
    let on_item = Callback::new(move |(op, item_id): (ItemOp, i64)| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let api = auth.api();
        spawn_guarded(
            &op_guard,
            async move {
                match op {
                    ItemOp::Increase => cart::increase_quantity(&api, item_id).await,
                    ItemOp::Decrease => cart::decrease_quantity(&api, item_id).await,
                    ItemOp::Remove => cart::remove_item(&api, item_id).await,
                }
            },
            move |result| {
                if let Err(e) = result {
                    error.set(Some(e.user_message("Could not update cart.")));
                }
                revision.update(|r| *r += 1);
            },
        );
    });

    let on_clear = Callback::new(move |()| {
        let Some(cart_id) = loaded.with_untracked(|v| v.as_ref().map(|v| v.cart.id)) else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let api = auth.api();
        spawn_guarded(&guard, async move { cart::clear_cart(&api, cart_id).await }, move |result| {
            if let Err(e) = result {
                error.set(Some(e.user_message("Could not clear cart.")));
            }
            revision.update(|r| *r += 1);
        });
    });

    view! {
        <div class="cart-page">
            <h1>"Cart"</h1>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || match cart_phase(loaded.get(), load_failed.get()) {
                CartPhase::Loading => view! { <p class="page-loading">"Loading..."</p> }.into_any(),
                CartPhase::Unavailable => ().into_any(),
                CartPhase::Empty => {
                    view! {
                        <p class="empty-state">"Your cart is empty. " <a href="/">"Browse artworks"</a></p>
                    }
                        .into_any()
                }
                CartPhase::Items(current) => {
                    let rows = current
                        .cart
                        .cart_items
                        .iter()
                        .map(|item| {
                            let id = item.id;
                            view! {
                                <li class="cart-item">
                                    <a class="cart-item__title" href=format!("/artwork/{}", item.artwork_id)>
                                        {current.title(item.artwork_id)}
                                    </a>
                                    <span class="cart-item__qty">
                                        <button
                                            class="btn"
                                            disabled=move || busy.get()
                                            on:click=move |_| on_item.run((ItemOp::Decrease, id))
                                        >
                                            "-"
                                        </button>
                                        {item.quantity}
                                        <button
                                            class="btn"
                                            disabled=move || busy.get()
                                            on:click=move |_| on_item.run((ItemOp::Increase, id))
                                        >
                                            "+"
                                        </button>
                                    </span>
                                    <button
                                        class="btn btn--danger"
                                        disabled=move || busy.get()
                                        on:click=move |_| on_item.run((ItemOp::Remove, id))
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view();
                    view! {
                        <ul class="cart-items">{rows}</ul>
                        <p class="cart-summary">
                            {format!("{} item(s), total ", current.cart.total_items)}
                            <strong>{format_price(current.cart.total_price)}</strong>
                        </p>
                        <div class="cart-actions">
                            <button class="btn" disabled=move || busy.get() on:click=move |_| on_clear.run(())>
                                "Clear Cart"
                            </button>
                            <a class="btn btn--primary" href="/checkout">"Checkout"</a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

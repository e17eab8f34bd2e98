//! Checkout page: shipping address in, placed order and payment hand-off out.
//!
//! The payment intent's client secret is written to a `data-client-secret`
//! attribute for the external payment widget. It is never logged.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthContext;
use crate::state::checkout::{self, CheckoutError, CheckoutOutcome, DEFAULT_CURRENCY};
use crate::util::auth::install_unauth_redirect;
use crate::util::format::{format_price, format_timestamp};
use crate::util::mount_guard::{MountGuard, spawn_guarded};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    install_unauth_redirect(auth, use_navigate());
    let guard = MountGuard::install();
    let address = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let outcome = RwSignal::new(None::<CheckoutOutcome>);

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let shipping = address.get_untracked();
        if shipping.trim().is_empty() {
            error.set(Some(CheckoutError::MissingAddress.to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        let api = auth.api();
        spawn_guarded(
            &guard,
            async move { checkout::checkout(&api, &shipping, DEFAULT_CURRENCY).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(done) => {
                        leptos::logging::log!("checkout: order {} placed", done.order.id);
                        outcome.set(Some(done));
                    }
                    Err(e) => {
                        if let CheckoutError::Payment { order_id, .. } = &e {
                            leptos::logging::warn!("checkout: payment intent failed for order {order_id}");
                        }
                        error.set(Some(match e {
                            CheckoutError::Order(source) => source.user_message("Failed to place order."),
                            other => other.to_string(),
                        }));
                    }
                }
            },
        );
    });

    view! {
        <div class="checkout-page">
            <h1>"Checkout"</h1>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            {move || match outcome.get() {
                None => {
                    view! {
                        <form class="checkout-form" on:submit=move |ev| on_submit.run(ev)>
                            <label>
                                "Shipping address"
                                <input
                                    type="text"
                                    required
                                    autocomplete="street-address"
                                    prop:value=move || address.get()
                                    on:input=move |ev| address.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Placing order..." } else { "Place Order" }}
                            </button>
                        </form>
                    }
                        .into_any()
                }
                Some(CheckoutOutcome { order, intent }) => {
                    let items = order
                        .items
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li>
                                    {format!("{} x{} ", item.artwork_title, item.quantity)}
                                    {format_price(item.price_at_purchase)}
                                </li>
                            }
                        })
                        .collect_view();
                    view! {
                        <section class="checkout-result">
                            <h2>{format!("Order #{} placed", order.id)}</h2>
                            <p>{format!("Status: {}", order.status)}</p>
                            <p>{format!("Placed: {}", format_timestamp(&order.ordered_at))}</p>
                            <p>{format!("Ship to: {}", order.address)}</p>
                            <ul class="checkout-result__items">{items}</ul>
                            <p class="checkout-result__total">{format_price(order.total_price)}</p>
                            <div
                                id="payment-element"
                                data-order-id=order.id.to_string()
                                data-currency=DEFAULT_CURRENCY
                                data-client-secret=intent.client_secret
                            ></div>
                            <a href="/orders">"View my orders"</a>
                        </section>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

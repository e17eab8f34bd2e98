//! Dashboard tab: payments, filterable by status.

use leptos::prelude::*;

use super::choose::Choose;
use crate::net::payments;
use crate::net::types::{Payment, PaymentStatus};
use crate::state::auth::AuthContext;
use crate::util::dialog;
use crate::util::format::{format_amount, format_timestamp};
use crate::util::mount_guard::{MountGuard, spawn_guarded};

const ALL_STATUSES: &str = "ALL";

#[component]
pub fn PaymentsTab() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let guard = MountGuard::install();
    let rows = RwSignal::new(Vec::<Payment>::new());
    let statuses = RwSignal::new(PaymentStatus::ALL.iter().map(|s| s.as_str().to_owned()).collect::<Vec<_>>());
    let status_filter = RwSignal::new(ALL_STATUSES.to_owned());
    let error = RwSignal::new(None::<String>);

    let status_guard = guard.clone();
    Effect::new(move || {
        let api = auth.api();
        spawn_guarded(
            &status_guard,
            async move { payments::payment_statuses(&api).await },
            move |result| match result {
                Ok(list) if !list.is_empty() => statuses.set(list),
                Ok(_) => {}
                Err(e) => leptos::logging::warn!("dashboard: payment statuses failed: {e}"),
            },
        );
    });

    let load_guard = guard.clone();
    Effect::new(move || {
        let selected = status_filter.get().parse::<PaymentStatus>().ok();
        let api = auth.api();
        spawn_guarded(
            &load_guard,
            async move {
                match selected {
                    Some(status) => payments::get_payments_by_status(&api, status).await,
                    None => payments::get_all_payments(&api).await,
                }
            },
            move |result| match result {
                Ok(list) => rows.set(list),
                Err(e) => {
                    leptos::logging::warn!("dashboard: payments load failed: {e}");
                    error.set(Some(e.user_message("Failed to load payments.")));
                }
            },
        );
    });

    let on_delete = Callback::new(move |id: i64| {
        if !dialog::confirm("Delete this payment record?") {
            return;
        }
        let api = auth.api();
        spawn_guarded(&guard, async move { payments::delete_payment(&api, id).await }, move |result| match result {
            Ok(()) => rows.update(|list| list.retain(|p| p.id != id)),
            Err(e) => error.set(Some(e.user_message("Failed to delete payment."))),
        });
    });

    let options = Signal::derive(move || {
        std::iter::once(ALL_STATUSES.to_owned())
            .chain(statuses.get())
            .collect::<Vec<_>>()
    });

    view! {
        <section class="dashboard-tab">
            <h2>"Payments"</h2>
            <Choose
                label="Status"
                value=status_filter
                options=options
                on_change=Callback::new(move |v: String| status_filter.set(v))
            />
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Order"</th>
                        <th>"User"</th>
                        <th>"Amount"</th>
                        <th>"Method"</th>
                        <th>"Status"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|payment| {
                                let id = payment.id;
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>{payment.order_id}</td>
                                        <td>{payment.user_id}</td>
                                        <td>{format_amount(payment.amount, &payment.currency)}</td>
                                        <td>{payment.method.unwrap_or_else(|| "-".to_owned())}</td>
                                        <td>{payment.status.as_str()}</td>
                                        <td>{format_timestamp(&payment.created_at)}</td>
                                        <td>
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

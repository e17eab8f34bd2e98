//! Owner dashboard: artworks, users, orders and payments administration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Access is checked against the resolved auth state. Non-owners get a notice
//! rather than a redirect; the backend rejects their calls regardless.

use leptos::prelude::*;

use crate::components::artworks_tab::ArtworksTab;
use crate::components::orders_tab::OrdersTab;
use crate::components::payments_tab::PaymentsTab;
use crate::components::tabs::Tabs;
use crate::components::users_tab::UsersTab;
use crate::state::auth::AuthContext;
use crate::state::dashboard::{DashboardTab, can_access};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let selected = RwSignal::new(DashboardTab::default());

    let labels = DashboardTab::ALL.iter().map(|t| t.label().to_owned()).collect::<Vec<_>>();
    let on_change = Callback::new(move |label: String| {
        if let Some(tab) = DashboardTab::from_label(&label) {
            selected.set(tab);
        }
    });

    view! {
        <div class="dashboard-page">
            {move || {
                let state = auth.state.get();
                if !state.is_resolved() {
                    return view! { <p class="page-loading">"Loading..."</p> }.into_any();
                }
                if !can_access(&state) {
                    return view! { <p class="notice">"Only owner has access to dashboard..."</p> }.into_any();
                }
                let labels = labels.clone();
                view! {
                    <h1>"Dashboard"</h1>
                    <Tabs
                        tabs=labels
                        active=Signal::derive(move || selected.get().label().to_owned())
                        on_change=on_change
                    />
                    {move || match selected.get() {
                        DashboardTab::Artworks => view! { <ArtworksTab/> }.into_any(),
                        DashboardTab::Users => view! { <UsersTab/> }.into_any(),
                        DashboardTab::Orders => view! { <OrdersTab/> }.into_any(),
                        DashboardTab::Payments => view! { <PaymentsTab/> }.into_any(),
                    }}
                }
                    .into_any()
            }}
        </div>
    }
}

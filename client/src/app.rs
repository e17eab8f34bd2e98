//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::config::ClientConfig;
use crate::net::http::ApiClient;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    artwork::ArtworkPage, cart::CartPage, checkout::CheckoutPage, dashboard::DashboardPage, feed::FeedPage,
    login::LoginPage, orders::OrdersPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::auth::AuthContext;
use crate::state::session::SessionStore;
use crate::util::storage::default_storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing. The stored
/// session is read from an effect, so it only happens in the browser after
/// hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = SessionStore::new(default_storage());
    let api = ApiClient::new(&config.api_base_url, Arc::new(BrowserTransport), session);
    let auth = AuthContext::new(api);
    provide_context(auth);

    Effect::new(move || auth.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/artstore.css"/>
        <Title text="ArtStore"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=FeedPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=(StaticSegment("artwork"), ParamSegment("id")) view=ArtworkPage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route path=StaticSegment("checkout") view=CheckoutPage/>
                    <Route path=StaticSegment("orders") view=OrdersPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}

//! Landing page: artwork feed with category tabs.

use leptos::prelude::*;

use crate::components::art_card::ArtCard;
use crate::components::tabs::Tabs;
use crate::net::types::{ArtCategory, Artwork};
use crate::net::{artworks, cart};
use crate::state::auth::{AuthContext, AuthState};
use crate::state::feed::{self, FeedFilter};
use crate::util::mount_guard::{MountGuard, spawn_guarded};

#[component]
pub fn FeedPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let guard = MountGuard::install();
    let categories = RwSignal::new(Vec::<ArtCategory>::new());
    let filter = RwSignal::new(FeedFilter::All);
    let items = RwSignal::new(Vec::<Artwork>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let categories_guard = guard.clone();
    Effect::new(move || {
        let api = auth.api();
        spawn_guarded(
            &categories_guard,
            async move { artworks::categories(&api).await },
            move |result| match result {
                Ok(list) => categories.set(list),
                Err(e) => leptos::logging::warn!("feed: categories load failed: {e}"),
            },
        );
    });

    let feed_guard = guard.clone();
    Effect::new(move || {
        let selected = filter.get();
        let api = auth.api();
        loading.set(true);
        spawn_guarded(&feed_guard, async move { feed::load(&api, selected).await }, move |result| {
            // A slower response for a tab the visitor already left is dropped.
            if filter.get_untracked() != selected {
                return;
            }
            loading.set(false);
            match result {
                Ok(list) => {
                    error.set(None);
                    items.set(list);
                }
                Err(e) => {
                    leptos::logging::warn!("feed: artworks load failed: {e}");
                    error.set(Some(e.user_message("Failed to load artworks.")));
                }
            }
        });
    });

    let on_add_to_cart = Callback::new(move |artwork_id: i64| {
        let Some(user_id) = auth.state.with_untracked(|s| s.session().map(|s| s.user_id)) else {
            return;
        };
        let api = auth.api();
        spawn_guarded(
            &guard,
            async move { cart::add_artwork(&api, user_id, artwork_id).await },
            move |result| {
                notice.set(Some(match result {
                    Ok(_) => "Added to cart.".to_owned(),
                    Err(e) => e.user_message("Could not add to cart."),
                }));
            },
        );
    });

    let tab_labels = Signal::derive(move || {
        feed::tabs(&categories.get()).into_iter().map(|f| f.label().to_owned()).collect::<Vec<_>>()
    });
    let active = Signal::derive(move || filter.get().label().to_owned());
    let on_tab = Callback::new(move |label: String| {
        if let Some(next) = FeedFilter::from_label(&label) {
            filter.set(next);
        }
    });

    view! {
        <div class="feed-page">
            <h1>"Art Feed"</h1>
            <Tabs tabs=tab_labels active=active on_change=on_tab/>
            {move || notice.get().map(|n| view! { <p class="form-message">{n}</p> })}
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-loading">"Loading..."</p> }>
                <div class="art-grid">
                    {move || {
                        let logged_in = auth.state.with(AuthState::is_authenticated);
                        items
                            .get()
                            .into_iter()
                            .map(|artwork| {
                                view! {
                                    <ArtCard
                                        artwork=artwork
                                        is_logged_in=logged_in
                                        on_add_to_cart=on_add_to_cart
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

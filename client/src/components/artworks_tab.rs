//! Dashboard tab: artwork catalogue administration.

use leptos::prelude::*;

use super::art_card::ArtCard;
use super::art_form_overlay::ArtFormOverlay;
use crate::net::artworks;
use crate::net::types::{ArtCategory, Artwork};
use crate::state::artwork_form::{ArtworkDraft, ArtworkFormMode};
use crate::state::auth::AuthContext;
use crate::util::mount_guard::{MountGuard, spawn_guarded};

/// Which form the overlay shows, if any.
#[derive(Clone, Debug, PartialEq)]
enum FormState {
    Closed,
    Create,
    Edit(Artwork),
}

#[component]
pub fn ArtworksTab() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let guard = MountGuard::install();
    let items = RwSignal::new(Vec::<Artwork>::new());
    let categories = RwSignal::new(Vec::<ArtCategory>::new());
    let form = RwSignal::new(FormState::Closed);
    let error = RwSignal::new(None::<String>);

    let reload = Callback::new({
        let guard = guard.clone();
        move |()| {
            let api = auth.api();
            spawn_guarded(&guard, async move { artworks::find_all(&api).await }, move |result| match result {
                Ok(list) => items.set(list),
                Err(e) => {
                    leptos::logging::warn!("dashboard: artworks load failed: {e}");
                    error.set(Some(e.user_message("Failed to load artworks.")));
                }
            });
        }
    });

    let categories_guard = guard.clone();
    Effect::new(move || {
        reload.run(());
        let api = auth.api();
        spawn_guarded(
            &categories_guard,
            async move { artworks::categories(&api).await },
            move |result| match result {
                Ok(list) => categories.set(list),
                Err(e) => leptos::logging::warn!("dashboard: categories load failed: {e}"),
            },
        );
    });

    let on_delete = Callback::new(move |id: i64| {
        let api = auth.api();
        spawn_guarded(&guard, async move { artworks::delete_by_id(&api, id).await }, move |result| match result {
            Ok(()) => reload.run(()),
            Err(e) => error.set(Some(e.user_message("Failed to delete artwork."))),
        });
    });
    let on_edit = Callback::new(move |artwork: Artwork| form.set(FormState::Edit(artwork)));
    let on_close = Callback::new(move |()| form.set(FormState::Closed));
    let on_saved = Callback::new(move |_: Artwork| reload.run(()));

    view! {
        <section class="dashboard-tab">
            <button class="btn btn--primary" on:click=move |_| form.set(FormState::Create)>
                "Create Artwork"
            </button>
            {move || match form.get() {
                FormState::Closed => None,
                FormState::Create => Some(
                    view! {
                        <ArtFormOverlay
                            mode=ArtworkFormMode::Create
                            initial=ArtworkDraft::blank()
                            categories=categories
                            on_close=on_close
                            on_saved=on_saved
                        />
                    }
                        .into_any(),
                ),
                FormState::Edit(artwork) => Some(
                    view! {
                        <ArtFormOverlay
                            mode=ArtworkFormMode::for_artwork(Some(&artwork))
                            initial=ArtworkDraft::from_artwork(&artwork)
                            categories=categories
                            on_close=on_close
                            on_saved=on_saved
                        />
                    }
                        .into_any(),
                ),
            }}
            <h2>"Artworks List"</h2>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <div class="art-grid">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|artwork| {
                            view! {
                                <ArtCard
                                    artwork=artwork
                                    is_owner=true
                                    is_logged_in=true
                                    on_edit=on_edit
                                    on_delete=on_delete
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

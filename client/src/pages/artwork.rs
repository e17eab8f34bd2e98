//! Single artwork page at `/artwork/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::Artwork;
use crate::net::{artworks, cart};
use crate::state::auth::AuthContext;
use crate::util::format::format_price;
use crate::util::mount_guard::{MountGuard, spawn_guarded};

#[derive(Clone, Debug, PartialEq)]
enum Loaded {
    Pending,
    Found(Artwork),
    Missing(String),
}

#[component]
pub fn ArtworkPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let params = use_params_map();
    let guard = MountGuard::install();
    let loaded = RwSignal::new(Loaded::Pending);
    let notice = RwSignal::new(None::<String>);

    let artwork_id = move || params.with(|p| p.get("id")).and_then(|raw| raw.parse::<i64>().ok());

    let load_guard = guard.clone();
    Effect::new(move || {
        let Some(id) = artwork_id() else {
            loaded.set(Loaded::Missing("Artwork not found.".to_owned()));
            return;
        };
        loaded.set(Loaded::Pending);
        let api = auth.api();
        spawn_guarded(&load_guard, async move { artworks::find_by_id(&api, id).await }, move |result| {
            loaded.set(match result {
                Ok(artwork) => Loaded::Found(artwork),
                Err(e) if e.is_not_found() => Loaded::Missing("Artwork not found.".to_owned()),
                Err(e) => Loaded::Missing(e.user_message("Failed to load artwork.")),
            });
        });
    });

    let on_add = Callback::new(move |()| {
        let Loaded::Found(artwork) = loaded.get_untracked() else {
            return;
        };
        let Some(user_id) = auth.state.with_untracked(|s| s.session().map(|s| s.user_id)) else {
            return;
        };
        let api = auth.api();
        spawn_guarded(
            &guard,
            async move { cart::add_artwork(&api, user_id, artwork.id).await },
            move |result| {
                notice.set(Some(match result {
                    Ok(_) => "Added to cart.".to_owned(),
                    Err(e) => e.user_message("Could not add to cart."),
                }));
            },
        );
    });

    let can_buy = move || auth.state.with(|s| s.is_authenticated() && !s.is_owner());

    view! {
        <div class="artwork-page">
            {move || match loaded.get() {
                Loaded::Pending => view! { <p class="page-loading">"Loading..."</p> }.into_any(),
                Loaded::Missing(message) => view! { <p class="form-error">{message}</p> }.into_any(),
                Loaded::Found(artwork) => {
                    view! {
                        <article class="artwork-detail">
                            <img class="artwork-detail__image" src=artwork.img_url alt=artwork.title.clone()/>
                            <header>
                                <h1>{artwork.title.clone()}</h1>
                                <p class="artwork-detail__category">{artwork.category.as_str()}</p>
                            </header>
                            <p>{artwork.description}</p>
                            {artwork.label.map(|l| view! { <p class="artwork-detail__label">{l}</p> })}
                            <p class="artwork-detail__price">{format_price(artwork.price)}</p>
                        </article>
                    }
                        .into_any()
                }
            }}
            <Show when=move || can_buy() && matches!(loaded.get(), Loaded::Found(_))>
                <button class="btn btn--primary" on:click=move |_| on_add.run(())>"Add to Cart"</button>
            </Show>
            {move || notice.get().map(|n| view! { <p class="form-message">{n}</p> })}
        </div>
    }
}

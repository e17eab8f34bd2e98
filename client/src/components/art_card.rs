//! Artwork card for the feed and the owner dashboard.
//!
//! DESIGN
//! ======
//! Owners get Update/Delete; other signed-in visitors get Add to Cart.
//! Anonymous visitors only browse.

use leptos::prelude::*;

use super::art_overlay::ArtOverlay;
use crate::net::types::Artwork;
use crate::util::format::format_price;

#[component]
pub fn ArtCard(
    artwork: Artwork,
    #[prop(optional)] is_owner: bool,
    #[prop(optional)] is_logged_in: bool,
    #[prop(optional)] on_edit: Option<Callback<Artwork>>,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
    #[prop(optional)] on_add_to_cart: Option<Callback<i64>>,
) -> impl IntoView {
    let overlay_open = RwSignal::new(false);
    let id = artwork.id;
    let overlay_artwork = StoredValue::new(artwork.clone());
    let edit_artwork = StoredValue::new(artwork.clone());
    let close_overlay = Callback::new(move |()| overlay_open.set(false));

    let on_edit_click = move |_| {
        if let Some(on_edit) = on_edit.as_ref() {
            on_edit.run(edit_artwork.get_value());
        }
    };
    let on_delete_click = move |_| {
        if let Some(on_delete) = on_delete.as_ref() {
            on_delete.run(id);
        }
    };
    let on_cart_click = move |_| {
        if let Some(on_add) = on_add_to_cart.as_ref() {
            on_add.run(id);
        }
    };

    view! {
        <div class="art-card">
            <div class="art-card__body" on:click=move |_| overlay_open.set(true)>
                <img class="art-card__image" src=artwork.img_url alt=artwork.title.clone() width="150"/>
                <h3 class="art-card__title">{artwork.title.clone()}</h3>
                <p class="art-card__category">{artwork.category.as_str()}</p>
                <p class="art-card__price">{format_price(artwork.price)}</p>
            </div>
            <Show when=move || overlay_open.get()>
                <ArtOverlay artwork=overlay_artwork.get_value() on_close=close_overlay/>
            </Show>
            {is_owner
                .then(|| {
                    view! {
                        <div class="art-card__actions">
                            <button class="btn" on:click=on_edit_click>"Update"</button>
                            <button class="btn btn--danger" on:click=on_delete_click>"Delete"</button>
                        </div>
                    }
                })}
            {(!is_owner && is_logged_in)
                .then(|| {
                    view! {
                        <button class="btn btn--primary art-card__cart" on:click=on_cart_click>
                            "Add to Cart"
                        </button>
                    }
                })}
        </div>
    }
}

//! Detail overlay opened from an artwork card.

use leptos::prelude::*;

use crate::net::types::Artwork;
use crate::util::format::format_price;

#[component]
pub fn ArtOverlay(artwork: Artwork, on_close: Callback<()>) -> impl IntoView {
    let href = format!("/artwork/{}", artwork.id);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog art-overlay" on:click=move |ev| ev.stop_propagation()>
                <button
                    class="dialog__close"
                    type="button"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
                <h4>{artwork.title}</h4>
                <p>{artwork.description}</p>
                {artwork.label.map(|label| view! { <p class="art-overlay__label">{label}</p> })}
                <p class="art-overlay__category">{artwork.category.as_str()}</p>
                <p class="art-overlay__price">{format_price(artwork.price)}</p>
                <a href=href>"View page"</a>
            </div>
        </div>
    }
}

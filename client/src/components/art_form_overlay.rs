//! Create/update artwork form shown as an overlay on the dashboard.
//!
//! The draft and the chosen image live only as long as the overlay. Closing
//! it discards both.

use leptos::prelude::*;

use super::choose::Choose;
use crate::net::types::{ArtCategory, Artwork, ImageUpload};
use crate::state::artwork_form::{self, ArtworkDraft, ArtworkFormMode};
use crate::state::auth::AuthContext;
use crate::util::mount_guard::{MountGuard, spawn_guarded};

#[component]
pub fn ArtFormOverlay(
    mode: ArtworkFormMode,
    initial: ArtworkDraft,
    #[prop(into)] categories: Signal<Vec<ArtCategory>>,
    on_close: Callback<()>,
    on_saved: Callback<Artwork>,
) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let guard = MountGuard::install();

    let title = RwSignal::new(initial.title);
    let description = RwSignal::new(initial.description);
    let category = RwSignal::new(initial.category);
    let price = RwSignal::new(initial.price);
    let label = RwSignal::new(initial.label);
    let image = RwSignal::new(None::<ImageUpload>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let heading = mode.title();
    let submit_label = mode.submit_label();
    let existing_image = match &mode {
        ArtworkFormMode::Update { image_url, .. } => image_url.clone(),
        ArtworkFormMode::Create => None,
    };
    let mode = StoredValue::new(mode);

    let category_options = Signal::derive(move || {
        let listed = categories.get();
        let source = if listed.is_empty() { ArtCategory::ALL.to_vec() } else { listed };
        source.iter().map(|c| c.as_str().to_owned()).collect::<Vec<_>>()
    });
    let on_category = Callback::new(move |tag: String| {
        if let Ok(parsed) = tag.parse() {
            category.set(parsed);
        }
    });

    let file_guard = guard.clone();
    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = crate::util::file::selected_file(&ev) else {
                image.set(None);
                return;
            };
            spawn_guarded(
                &file_guard,
                async move { crate::util::file::read_image(&file).await },
                move |result| match result {
                    Ok(upload) => image.set(Some(upload)),
                    Err(e) => error.set(Some(e)),
                },
            );
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &file_guard);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = ArtworkDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
            price: price.get_untracked(),
            label: label.get_untracked(),
        };
        let upload = image.get_untracked();
        let mode = mode.get_value();
        if let Err(e) = artwork_form::validate(&mode, &draft, upload.as_ref()) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        busy.set(true);
        let api = auth.api();
        spawn_guarded(
            &guard,
            async move { artwork_form::submit(&api, &mode, &draft, upload.as_ref()).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(saved) => {
                        on_saved.run(saved);
                        on_close.run(());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            },
        );
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog art-form">
                <button
                    class="dialog__close"
                    type="button"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    "×"
                </button>
                <h2>{heading}</h2>
                <form on:submit=on_submit>
                    {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                    <input
                        placeholder="Title"
                        required
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <input
                        placeholder="Description"
                        required
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                    <Choose
                        label="Category"
                        value=Signal::derive(move || category.get().as_str().to_owned())
                        options=category_options
                        on_change=on_category
                    />
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="Price"
                        required
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                    <input
                        placeholder="Label"
                        prop:value=move || label.get()
                        on:input=move |ev| label.set(event_target_value(&ev))
                    />
                    <input type="file" accept="image/*" on:change=on_file/>
                    {move || {
                        image
                            .with(|i| i.as_ref().map(|upload| upload.filename.clone()))
                            .map(|name| view! { <p class="art-form__file">{name}</p> })
                    }}
                    {existing_image
                        .map(|src| {
                            view! {
                                <div class="art-form__preview">
                                    <p>"Current image:"</p>
                                    <img src=src alt="Artwork preview" width="150"/>
                                </div>
                            }
                        })}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {submit_label}
                    </button>
                </form>
            </div>
        </div>
    }
}

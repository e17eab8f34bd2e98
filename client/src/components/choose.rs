//! Labelled `<select>` over string options.

use leptos::prelude::*;

#[component]
pub fn Choose(
    #[prop(optional, into)] label: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<String>>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="choose">
            {label.map(|text| view! { <span class="choose__label">{text}</span> })}
            <select
                class="choose__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let selected = option == current;
                            let text = option.clone();
                            view! {
                                <option value=option selected=selected>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

//! Row of tab buttons keyed by label.

use leptos::prelude::*;

#[component]
pub fn Tabs(
    #[prop(into)] tabs: Signal<Vec<String>>,
    #[prop(into)] active: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="tabs" role="tablist">
            {move || {
                tabs.get()
                    .into_iter()
                    .map(|tab| {
                        let selected = tab.clone();
                        let clicked = tab.clone();
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class="tabs__tab"
                                class:tabs__tab--active=move || active.get() == selected
                                on:click=move |_| on_change.run(clicked.clone())
                            >
                                {tab}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

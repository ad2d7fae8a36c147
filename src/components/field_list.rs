//! Key/value listing used by the dashboard cards.

use leptos::prelude::*;

/// Render `(label, value)` rows, or `empty` when there are none.
#[component]
pub fn FieldList(#[prop(into)] rows: Signal<Vec<(String, String)>>, #[prop(into)] empty: String) -> impl IntoView {
    view! {
        <Show
            when=move || !rows.get().is_empty()
            fallback=move || view! { <p class="field-list__empty">{empty.clone()}</p> }
        >
            <dl class="field-list">
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="field-list__row">
                                    <dt class="field-list__key">{label}</dt>
                                    <dd class="field-list__value">{value}</dd>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </dl>
        </Show>
    }
}

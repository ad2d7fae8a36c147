//! Notification stack rendered in the page corner.
//!
//! Reads the [`ToastQueue`] from context. Clicking a toast dismisses it;
//! otherwise its timer does.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;

use crate::state::toast::{ToastQueue, ToastVariant};

pub fn toast_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast--destructive",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let queue = expect_context::<ToastQueue>();

    view! {
        <Show when=move || !queue.list().get().is_empty()>
            <div class="toast-host" role="status" aria-live="polite">
                {move || {
                    queue
                        .list()
                        .get()
                        .items()
                        .iter()
                        .cloned()
                        .map(|toast| {
                            let id = toast.id;
                            view! {
                                <div class=toast_class(toast.variant) on:click=move |_| queue.dismiss(id)>
                                    <p class="toast__title">{toast.title}</p>
                                    <p class="toast__description">{toast.description}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}

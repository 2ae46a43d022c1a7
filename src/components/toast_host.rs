//! Renders the toast notification stack.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, Toasts};

/// Fixed overlay listing active toasts; clicking one dismisses it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .read()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        let kind_class = match toast.kind {
                            ToastKind::Success => "toast--success",
                            ToastKind::Error => "toast--error",
                        };
                        view! {
                            <button
                                class=format!("toast {kind_class}")
                                on:click=move |_| toasts.dismiss(&id)
                            >
                                {toast.message.clone()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

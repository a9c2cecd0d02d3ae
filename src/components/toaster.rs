use crate::state::{AppContext, Toast, ToastKind};
use icons::X;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

const TOAST_TIMEOUT_MS: i32 = 3000;

/// Renders the notifier's queue in the top-right corner. Each toast dismisses itself.
#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = expect_context::<AppContext>().0.notifier;

    view! {
        <div class="pointer-events-none fixed right-4 top-4 z-[60] flex w-80 flex-col gap-2">
            <For
                each=move || notifier.toasts().get()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let notifier = expect_context::<AppContext>().0.notifier;
    let id = toast.id;

    let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
        wasm_bindgen::closure::Closure::once_into_js(move || notifier.dismiss(id))
            .as_ref()
            .unchecked_ref(),
        TOAST_TIMEOUT_MS,
    );

    let accent = match toast.kind {
        ToastKind::Success => "border-l-emerald-500",
        ToastKind::Error => "border-l-red-500",
        ToastKind::Info => "border-l-indigo-500",
    };

    view! {
        <div
            role="status"
            class=format!(
                "pointer-events-auto flex items-start gap-3 rounded-lg border border-l-4 border-gray-200 bg-white px-4 py-3 text-sm text-gray-800 shadow-lg dark:border-[#565449]/30 dark:bg-[#1A1A21] dark:text-[#fffbf4] {accent}"
            )
        >
            <p class="flex-1">{toast.message}</p>
            <button
                type="button"
                class="text-gray-400 hover:cursor-pointer hover:text-gray-600"
                aria-label="Dismiss"
                on:click=move |_| notifier.dismiss(id)
            >
                <X class="size-4" />
            </button>
        </div>
    }
}

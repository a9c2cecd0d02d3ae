use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-lg border border-red-100 bg-red-50 px-4 py-3 text-sm text-red-500 dark:border-[#ff6b6b]/30 dark:bg-[#2c1515] dark:text-[#ff6b6b]"}
    clx! {AlertDescription, p, "text-sm [&_p]:leading-relaxed"}
}

pub use components::*;

/// Inline error line under a form. Renders nothing while `message` is `None`.
#[component]
pub fn FormError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|m| {
            view! {
                <Alert attr:role="alert">
                    <AlertDescription>{m}</AlertDescription>
                </Alert>
            }
        })
    }
}

use crate::state::AppContext;
use icons::{Moon, Sun};
use leptos::prelude::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<AppContext>().0.theme;

    let class = move || {
        let t = theme.current_tokens();
        format!(
            "inline-flex size-9 items-center justify-center rounded-full transition-colors hover:cursor-pointer {} {}",
            t.toggle_bg, t.toggle_icon
        )
    };

    view! {
        <button
            type="button"
            class=class
            aria-label=move || if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| theme.toggle()
        >
            {move || if theme.is_dark() {
                view! { <Sun class="size-5" /> }.into_any()
            } else {
                view! { <Moon class="size-5" /> }.into_any()
            }}
        </button>
    }
}

use crate::state::AppContext;
use icons::{Search, X};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Query box: Enter or the search icon submits, the clear icon resets.
#[component]
pub fn SearchBar(on_search: Callback<String>, on_clear: Callback<()>) -> impl IntoView {
    let theme = expect_context::<AppContext>().0.theme;
    let query = RwSignal::new(String::new());

    let submit = move || {
        let q = query.get_untracked();
        if !q.trim().is_empty() {
            on_search.run(q);
        }
    };

    let clear = move || {
        query.set(String::new());
        on_clear.run(());
    };

    let class = move || {
        let t = theme.current_tokens();
        format!(
            "flex w-full max-w-md items-center gap-2 rounded-full border px-4 py-2 {} {}",
            t.input_bg, t.input_border
        )
    };

    view! {
        <div class=class>
            <input
                type="search"
                class=move || format!(
                    "w-full bg-transparent text-sm outline-none {}",
                    theme.current_tokens().input_text
                )
                placeholder="Search notes..."
                aria-label="Search notes"
                prop:value=move || query.get()
                on:input=move |ev: web_sys::Event| {
                    if let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    {
                        query.set(input.value());
                    }
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit();
                    }
                }
            />
            <Show when=move || !query.get().is_empty()>
                <button
                    type="button"
                    class=move || format!("hover:cursor-pointer {}", theme.current_tokens().icon)
                    aria-label="Clear search"
                    on:click=move |_| clear()
                >
                    <X class="size-4" />
                </button>
            </Show>
            <button
                type="button"
                class=move || format!("hover:cursor-pointer {}", theme.current_tokens().icon)
                aria-label="Search"
                on:click=move |_| submit()
            >
                <Search class="size-4" />
            </button>
        </div>
    }
}

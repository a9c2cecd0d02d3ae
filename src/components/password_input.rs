use crate::components::ui::Input;
use icons::{Eye, EyeOff};
use leptos::prelude::*;

/// Password field with a show/hide toggle.
#[component]
pub fn PasswordInput(
    #[prop(into)] id: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, default = "current-password".to_string())] autocomplete: String,
    #[prop(into)] bind_value: RwSignal<String>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="relative">
            {move || {
                let kind = if visible.get() { "text" } else { "password" };
                view! {
                    <Input
                        id=id.clone()
                        r#type=kind
                        placeholder=placeholder.clone()
                        autocomplete=autocomplete.clone()
                        bind_value=bind_value
                        class="pr-11"
                    />
                }
            }}
            <button
                type="button"
                class="absolute inset-y-0 right-0 flex items-center px-3 text-gray-400 hover:cursor-pointer hover:text-[#6610f2]"
                aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() {
                    view! { <EyeOff class="size-4" /> }.into_any()
                } else {
                    view! { <Eye class="size-4" /> }.into_any()
                }}
            </button>
        </div>
    }
}

use crate::components::ui::{Button, ButtonSize};
use crate::dashboard::EmptyReason;
use crate::state::AppContext;
use leptos::prelude::*;

fn message(reason: EmptyReason) -> &'static str {
    match reason {
        EmptyReason::NoNotes => "Ready to capture your ideas? Click the 'Add' button to start noting down your thoughts, inspiration and reminders. Let's get started!",
        EmptyReason::NoSearchResults => "Oops! No notes found matching your search.",
        EmptyReason::LoadFailed => "We couldn't load your notes.",
    }
}

#[component]
pub fn EmptyState(
    reason: EmptyReason,
    #[prop(optional_no_strip)] detail: Option<String>,
    on_retry: Callback<()>,
) -> impl IntoView {
    let theme = expect_context::<AppContext>().0.theme;

    view! {
        <div class="mx-auto mt-24 flex max-w-md flex-col items-center gap-4 text-center">
            <p class=move || format!("text-base leading-relaxed {}", theme.current_tokens().secondary_text)>
                {message(reason)}
            </p>
            {detail.map(|d| view! {
                <p class=move || format!("text-xs {}", theme.current_tokens().light_text)>{d}</p>
            })}
            <Show when=move || reason == EmptyReason::LoadFailed>
                <Button size=ButtonSize::Sm on:click=move |_| on_retry.run(())>"Try again"</Button>
            </Show>
        </div>
    }
}

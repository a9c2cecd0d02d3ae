use crate::api::ApiClient;
use crate::components::ui::{Button, FormError, Input, Label, Spinner, Textarea};
use crate::components::TagInput;
use crate::dashboard::DashboardController;
use crate::drafts::EditorDraft;
use crate::state::AppContext;
use icons::X;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Add/edit overlay. Mounted only while the dashboard has an editor session; the fields
/// start from that session's draft.
///
/// The backdrop and the close icon cancel. Escape is handled by the page.
#[component]
pub fn NoteEditor(dash: StoredValue<DashboardController<ApiClient>>) -> impl IntoView {
    let theme = expect_context::<AppContext>().0.theme;
    let state = dash.with_value(|d| d.state());

    let Some(initial) = state.with_untracked(|s| s.editor().map(|e| e.draft.clone())) else {
        return ().into_any();
    };

    let mode = initial.mode.clone();
    let submit_label = initial.submit_label();
    let title = RwSignal::new(initial.title);
    let content = RwSignal::new(initial.content);
    let tags = RwSignal::new(initial.tags);

    let error = Memo::new(move |_| state.with(|s| s.editor().and_then(|e| e.error.clone())));
    let submitting = Memo::new(move |_| state.with(|s| s.editor().is_some_and(|e| e.submitting)));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = EditorDraft {
            mode: mode.clone(),
            title: title.get_untracked(),
            content: content.get_untracked(),
            tags: tags.get_untracked(),
        };
        let dash = dash.get_value();
        spawn_local(async move {
            // Failures stay visible inline through the editor session.
            let _ = dash.submit_editor(draft).await;
        });
    };

    let close = move || dash.with_value(|d| d.close_editor());

    view! {
        <div
            class=move || format!(
                "fixed inset-0 z-50 flex items-center justify-center p-4 backdrop-blur-sm {}",
                theme.current_tokens().modal_overlay
            )
            on:click=move |_| close()
        >
            <div
                role="dialog"
                aria-modal="true"
                class=move || format!(
                    "relative w-full max-w-2xl rounded-2xl border p-6 shadow-2xl {}",
                    theme.current_tokens().modal_content
                )
                on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
            >
                <button
                    type="button"
                    class=move || format!(
                        "absolute right-4 top-4 rounded-full p-1 hover:cursor-pointer {}",
                        theme.current_tokens().icon
                    )
                    aria-label="Close"
                    on:click=move |_| close()
                >
                    <X class="size-5" />
                </button>

                <form class="flex flex-col gap-4" on:submit=on_submit>
                    <div class="flex flex-col gap-1.5">
                        <Label html_for="note-title">"Title"</Label>
                        <Input
                            id="note-title"
                            placeholder="Your title here..."
                            bind_value=title
                            autofocus=true
                            disabled=submitting
                            class="text-lg font-medium"
                        />
                    </div>

                    <div class="flex flex-col gap-1.5">
                        <Label html_for="note-content">"Content"</Label>
                        <Textarea
                            id="note-content"
                            placeholder="Write your notes here..."
                            rows=10
                            bind_value=content
                            disabled=submitting
                        />
                    </div>

                    <div class="flex flex-col gap-1.5">
                        <Label>"Tags"</Label>
                        <TagInput tags=tags disabled=submitting />
                    </div>

                    <FormError message=error />

                    <Button class="w-full" attr:disabled=move || submitting.get()>
                        <Show when=move || submitting.get()>
                            <Spinner />
                        </Show>
                        {submit_label}
                    </Button>
                </form>
            </div>
        </div>
    }
    .into_any()
}

use crate::components::ui::{Button, ButtonSize, ButtonVariant, Input};
use crate::drafts::{add_tag, remove_tag};
use crate::state::AppContext;
use icons::{Plus, X};
use leptos::prelude::*;

/// Tag chips plus an entry field. Enter or `+` commits the trimmed value; duplicates and
/// blanks are ignored.
#[component]
pub fn TagInput(
    tags: RwSignal<Vec<String>>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let theme = expect_context::<AppContext>().0.theme;
    let pending = RwSignal::new(String::new());

    let commit = move || {
        let raw = pending.get_untracked();
        if tags.try_update(|t| add_tag(t, &raw)).unwrap_or(false) {
            pending.set(String::new());
        }
    };

    view! {
        <div class="flex flex-col gap-2">
            <div class="flex flex-wrap gap-2">
                <For
                    each=move || tags.get()
                    key=|tag| tag.clone()
                    children=move |tag| {
                        let label = format!("#{tag}");
                        let remove_label = format!("Remove tag {tag}");
                        view! {
                            <span class=move || format!(
                                "inline-flex items-center gap-1 rounded-full px-2.5 py-1 text-xs font-medium {}",
                                theme.current_tokens().tag
                            )>
                                {label}
                                <button
                                    type="button"
                                    class="hover:cursor-pointer hover:text-red-500"
                                    aria-label=remove_label
                                    disabled=move || disabled.get()
                                    on:click=move |_| {
                                        tags.update(|t| {
                                            remove_tag(t, &tag);
                                        });
                                    }
                                >
                                    <X class="size-3" />
                                </button>
                            </span>
                        }
                    }
                />
            </div>
            <div
                class="flex items-center gap-2"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        commit();
                    }
                }
            >
                <Input
                    id="note-tag"
                    placeholder="Add tags"
                    bind_value=pending
                    disabled=disabled
                    class="h-9"
                />
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Icon
                    attr:aria-label="Add tag"
                    attr:disabled=move || disabled.get() || pending.get().trim().is_empty()
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        commit();
                    }
                >
                    <Plus />
                </Button>
            </div>
        </div>
    }
}

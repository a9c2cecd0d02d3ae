use crate::models::Note;
use crate::state::AppContext;
use crate::util::format_note_date;
use icons::{Pencil, Pin, Trash2};
use leptos::prelude::*;

#[component]
pub fn NoteCard(
    note: Note,
    on_edit: Callback<Note>,
    on_delete: Callback<String>,
    on_toggle_pin: Callback<Note>,
) -> impl IntoView {
    let theme = expect_context::<AppContext>().0.theme;
    let note = StoredValue::new(note);
    let date = note.with_value(|n| format_note_date(n.created_at.as_ref()));
    let is_pinned = note.with_value(|n| n.is_pinned);

    let tokens = move || theme.current_tokens();

    view! {
        <article
            data-name="NoteCard"
            class=move || {
                let t = tokens();
                format!(
                    "group flex flex-col gap-3 rounded-xl border p-5 transition-all hover:shadow-xl {} {} {}",
                    t.note_bg, t.card_border, t.card_shadow
                )
            }
        >
            <header class="flex items-start justify-between gap-3">
                <div class="min-w-0">
                    <h3 class=move || format!("truncate text-base font-semibold {}", tokens().text)>
                        {note.with_value(|n| n.title.clone())}
                    </h3>
                    <span class=move || format!("text-xs {}", tokens().light_text)>{date}</span>
                </div>
                <button
                    type="button"
                    class=move || {
                        let t = tokens();
                        let color = if is_pinned { t.pinned } else { t.icon };
                        format!("shrink-0 hover:cursor-pointer {color}")
                    }
                    aria-label=if is_pinned { "Unpin note" } else { "Pin note" }
                    aria-pressed=is_pinned.to_string()
                    on:click=move |_| on_toggle_pin.run(note.get_value())
                >
                    <Pin class=if is_pinned { "size-4 fill-current" } else { "size-4" } />
                </button>
            </header>

            <p class=move || format!("line-clamp-3 whitespace-pre-line text-sm {}", tokens().secondary_text)>
                {note.with_value(|n| n.content.clone())}
            </p>

            <footer class="mt-auto flex items-end justify-between gap-3">
                <div class="flex flex-wrap gap-1.5">
                    {note.with_value(|n| n.tags.clone()).into_iter().map(|tag| view! {
                        <span class=move || format!("rounded-full px-2 py-0.5 text-xs font-medium {}", tokens().tag)>
                            {format!("#{tag}")}
                        </span>
                    }).collect_view()}
                </div>
                <div class="flex shrink-0 items-center gap-2">
                    <button
                        type="button"
                        class=move || format!("hover:cursor-pointer {}", tokens().icon)
                        aria-label="Edit note"
                        on:click=move |_| on_edit.run(note.get_value())
                    >
                        <Pencil class="size-4" />
                    </button>
                    <button
                        type="button"
                        class=move || format!("hover:cursor-pointer hover:text-red-500 {}", tokens().icon)
                        aria-label="Delete note"
                        on:click=move |_| on_delete.run(note.with_value(|n| n.id.clone()))
                    >
                        <Trash2 class="size-4" />
                    </button>
                </div>
            </footer>
        </article>
    }
}

use crate::components::ui::{Button, ButtonSize, Spinner};
use crate::components::{EmptyState, Navbar, NoteCard, NoteEditor};
use crate::dashboard::{DashboardController, DashboardPhase, ReadyState};
use crate::models::Note;
use crate::state::AppContext;
use icons::Plus;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dom::helpers::window_event_listener;
use leptos_router::hooks::use_navigate;

/// The notes dashboard. Redirects to `/login` whenever the session has no user.
#[component]
pub fn HomePage() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let session = app.session;
    let theme = app.theme;
    let navigate = StoredValue::new(use_navigate());

    let dash = StoredValue::new(DashboardController::new(
        app.api_client.clone(),
        session,
        app.notifier,
    ));
    let state = dash.with_value(|d| d.state());

    // Gate on the session: load on sign-in, reset and leave on sign-out or expiry.
    Effect::new(move |_| {
        let authenticated = session.is_authenticated();
        let d = dash.get_value();
        spawn_local(async move { d.on_session_changed(authenticated).await });
        if !authenticated {
            navigate.with_value(|n| n("/login", Default::default()));
        }
    });

    on_cleanup(move || {
        dash.try_with_value(|d| d.teardown());
    });

    let _key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let editor_open = state
            .try_with_untracked(|s| s.editor().is_some())
            .unwrap_or(false);
        if ev.key() == "Escape" && editor_open {
            ev.prevent_default();
            dash.try_with_value(|d| d.close_editor());
        }
    });

    // Editing is shown by the overlay, so the body only cares whether the list is ready.
    let phase = Memo::new(move |_| {
        state.with(|s| match s.phase() {
            DashboardPhase::Ready(_) => DashboardPhase::Ready(ReadyState::Viewing),
            other => other,
        })
    });
    let empty = Memo::new(move |_| state.with(|s| s.empty_reason()));
    let view_model = Memo::new(move |_| state.with(|s| s.view()));
    let load_error = Memo::new(move |_| state.with(|s| s.load_error().map(str::to_string)));
    let editor_open = Memo::new(move |_| state.with(|s| s.editor().is_some()));
    // A list request is in flight while something is already on screen.
    let refreshing = Memo::new(move |_| {
        state.with(|s| s.is_refreshing()) && matches!(phase.get(), DashboardPhase::Ready(_))
    });

    let on_search = Callback::new(move |query: String| {
        let d = dash.get_value();
        spawn_local(async move { d.search(&query).await });
    });
    let on_clear = Callback::new(move |_: ()| {
        let d = dash.get_value();
        spawn_local(async move { d.clear_search().await });
    });
    let on_retry = Callback::new(move |_: ()| {
        let d = dash.get_value();
        spawn_local(async move { d.refresh_list().await });
    });
    let on_edit = Callback::new(move |note: Note| dash.with_value(|d| d.open_edit(&note)));
    let on_delete = Callback::new(move |id: String| {
        let d = dash.get_value();
        spawn_local(async move { d.delete_note(&id).await });
    });
    let on_toggle_pin = Callback::new(move |note: Note| {
        let d = dash.get_value();
        spawn_local(async move { d.toggle_pin(&note).await });
    });

    let body = move || match (phase.get(), empty.get()) {
        (DashboardPhase::Unauthenticated, _) => ().into_any(),
        (DashboardPhase::Loading, _) => view! {
            <div class="flex justify-center pt-24">
                <Spinner class="size-8 text-[#6610f2]" />
            </div>
        }
        .into_any(),
        (DashboardPhase::Ready(_), Some(reason)) => view! {
            <EmptyState reason=reason detail=load_error.get() on_retry=on_retry />
        }
        .into_any(),
        (DashboardPhase::Ready(_), None) => view! {
            <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-3">
                <For
                    each=move || view_model.get().notes
                    key=|note| (note.id.clone(), note.is_pinned, note.title.clone(), note.content.clone(), note.tags.clone())
                    children=move |note| view! {
                        <NoteCard
                            note=note
                            on_edit=on_edit
                            on_delete=on_delete
                            on_toggle_pin=on_toggle_pin
                        />
                    }
                />
            </div>
        }
        .into_any(),
    };

    view! {
        <div class=move || format!("min-h-screen {}", theme.current_tokens().bg)>
            <Navbar on_search=on_search on_clear=on_clear />

            <main class="relative mx-auto max-w-6xl px-6 py-8">
                <Show when=move || refreshing.get()>
                    <Spinner class="absolute right-6 top-2 text-[#6610f2]" />
                </Show>
                <Show when=move || view_model.get().is_search_active>
                    <div class="mb-4 flex items-center justify-between text-sm">
                        <span class=move || theme.current_tokens().secondary_text.to_string()>
                            "Showing search results"
                        </span>
                        <Button size=ButtonSize::Sm on:click=move |_| on_clear.run(())>
                            "Show all notes"
                        </Button>
                    </div>
                </Show>
                {body}
            </main>

            <Button
                size=ButtonSize::Fab
                class="fixed bottom-8 right-8"
                attr:aria-label="Add note"
                on:click=move |_| dash.with_value(|d| d.open_add())
            >
                <Plus class="size-6" />
            </Button>

            <Show when=move || editor_open.get()>
                <NoteEditor dash=dash />
            </Show>
        </div>
    }
}

use crate::components::{SearchBar, ThemeToggle};
use crate::components::ui::{Button, ButtonSize, ButtonVariant, Spinner};
use crate::models::UserSummary;
use crate::state::AppContext;
use crate::util::initials;
use icons::LogOut;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Navbar(on_search: Callback<String>, on_clear: Callback<()>) -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let theme = app.theme;
    let session = app.session;
    let policy = app.config.sign_out_policy;
    let api = StoredValue::new(app.api_client);

    let on_logout = Callback::new(move |_: ()| {
        let api = api.get_value();
        spawn_local(async move {
            // Outcome is already surfaced through the notifier and the session signal.
            let _ = session.sign_out(&api, policy).await;
        });
    });

    let class = move || {
        let t = theme.current_tokens();
        format!(
            "sticky top-0 z-40 flex items-center justify-between gap-4 border-b px-6 py-3 backdrop-blur-md {} {}",
            t.nav_bg, t.divider
        )
    };

    view! {
        <nav class=class>
            <a
                href="/home"
                class="bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-xl font-bold text-transparent dark:from-[#6610f2] dark:to-[#9668f5]"
            >
                "Notes"
            </a>

            <SearchBar on_search=on_search on_clear=on_clear />

            <div class="flex items-center gap-3">
                <ThemeToggle />
                {move || session.user().map(|user| view! {
                    <ProfileInfo user=user on_logout=on_logout busy=Signal::derive(move || session.is_loading()) />
                })}
            </div>
        </nav>
    }
}

/// Avatar with the user's initials, their name, and a logout button.
#[component]
pub fn ProfileInfo(
    user: UserSummary,
    on_logout: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let theme = expect_context::<AppContext>().0.theme;
    let badge = initials(&user.username);

    view! {
        <div class="flex items-center gap-3">
            <div
                class="flex size-10 items-center justify-center rounded-full bg-gradient-to-br from-indigo-500 to-purple-500 text-sm font-semibold text-white"
                title=user.email.clone()
            >
                {badge}
            </div>
            <div class="hidden flex-col sm:flex">
                <span class=move || format!("text-sm font-medium {}", theme.current_tokens().text)>
                    {user.username.clone()}
                </span>
                <Button
                    variant=ButtonVariant::Link
                    size=ButtonSize::Sm
                    class="h-auto justify-start gap-1 px-0 text-xs"
                    attr:disabled=move || busy.get()
                    on:click=move |_| on_logout.run(())
                >
                    <Show when=move || busy.get() fallback=|| view! { <LogOut class="size-3" /> }>
                        <Spinner class="size-3" />
                    </Show>
                    "Logout"
                </Button>
            </div>
        </div>
    }
}

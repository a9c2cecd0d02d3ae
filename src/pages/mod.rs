mod home;
mod login;
mod signup;

pub use home::HomePage;
pub use login::LoginPage;
pub use signup::SignupPage;

use crate::components::ThemeToggle;
use crate::state::AppContext;
use leptos::prelude::*;
use leptos_router::components::Redirect;

/// Centered card layout shared by the login and signup pages.
#[component]
pub fn AuthShell(children: Children) -> impl IntoView {
    let theme = expect_context::<AppContext>().0.theme;

    view! {
        <div class=move || format!("relative min-h-screen {}", theme.current_tokens().bg)>
            <div class="absolute right-4 top-4">
                <ThemeToggle />
            </div>
            <div class="mx-auto flex min-h-screen w-full max-w-md flex-col justify-center px-4 py-10">
                {children()}
            </div>
        </div>
    }
}

/// `/` sends signed-in users to the dashboard and everyone else to the login form.
#[component]
pub fn RootPage() -> impl IntoView {
    let session = expect_context::<AppContext>().0.session;

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            <Redirect path="/home" />
        </Show>
    }
}

use crate::components::Toaster;
use crate::config::EnvConfig;
use crate::pages::{HomePage, LoginPage, RootPage, SignupPage};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::init(EnvConfig::new());
    let theme = state.theme;
    provide_context(AppContext(state.clone()));

    // Keep `<html class="dark">` in step with the theme signal.
    Effect::new(move |_| theme.apply_to_document());

    on_cleanup(move || state.teardown());

    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-gray-500">"Not found"</div> }>
                <Route path=path!("login") view=LoginPage />
                <Route path=path!("signup") view=SignupPage />
                <Route path=path!("home") view=HomePage />
                <Route path=path!("") view=RootPage />
            </Routes>
        </Router>
        <Toaster />
    }
}

use crate::components::ui::{
    Button, ButtonSize, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    FormError, Input, Label, Spinner,
};
use crate::components::PasswordInput;
use crate::pages::AuthShell;
use crate::state::{AppContext, AuthError};
use crate::validation::Registration;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

#[component]
pub fn SignupPage() -> impl IntoView {
    let username: RwSignal<String> = RwSignal::new(String::new());
    let email: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let confirm_password: RwSignal<String> = RwSignal::new(String::new());
    let accepted_terms: RwSignal<bool> = RwSignal::new(false);
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    let app = expect_context::<AppContext>().0;
    let session = app.session;
    let api = StoredValue::new(app.api_client);
    let navigate = StoredValue::new(use_navigate());

    Effect::new(move |_| {
        if session.is_authenticated() {
            navigate.with_value(|n| n("/home", Default::default()));
        }
    });

    // Local validation first, then whatever the server last said.
    let shown_error = Signal::derive(move || error.get().or_else(|| session.last_error()));
    on_cleanup(move || session.teardown());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let registration = Registration {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            accepted_terms: accepted_terms.get_untracked(),
        };
        let api = api.get_value();
        error.set(None);

        spawn_local(async move {
            if let Err(AuthError::Validation(e)) = session.sign_up(&api, &registration).await {
                error.set(Some(e.to_string()));
            }
        });
    };

    view! {
        <AuthShell>
            <Card>
                <CardHeader>
                    <CardTitle>"Create Account"</CardTitle>
                    <CardDescription>"Sign up to get started"</CardDescription>
                </CardHeader>

                <CardContent>
                    <form class="flex flex-col gap-4" on:submit=on_submit novalidate=true>
                        <div class="flex flex-col gap-1.5">
                            <Label html_for="username">"Username"</Label>
                            <Input id="username" placeholder="Username" autocomplete="username" bind_value=username />
                        </div>

                        <div class="flex flex-col gap-1.5">
                            <Label html_for="email">"Email Address"</Label>
                            <Input
                                id="email"
                                r#type="email"
                                placeholder="you@example.com"
                                autocomplete="email"
                                bind_value=email
                            />
                        </div>

                        <div class="flex flex-col gap-1.5">
                            <Label html_for="password">"Password"</Label>
                            <PasswordInput
                                id="password"
                                placeholder="At least 6 characters"
                                autocomplete="new-password"
                                bind_value=password
                            />
                        </div>

                        <div class="flex flex-col gap-1.5">
                            <Label html_for="confirm_password">"Confirm Password"</Label>
                            <PasswordInput
                                id="confirm_password"
                                placeholder="Confirm Password"
                                autocomplete="new-password"
                                bind_value=confirm_password
                            />
                        </div>

                        <label class="flex items-start gap-2 text-sm text-gray-600 dark:text-[#d8cfbc]">
                            <input
                                type="checkbox"
                                class="mt-0.5 size-4 accent-[#6610f2]"
                                prop:checked=move || accepted_terms.get()
                                on:change=move |ev: web_sys::Event| {
                                    if let Some(input) = ev
                                        .target()
                                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                                    {
                                        accepted_terms.set(input.checked());
                                    }
                                }
                            />
                            <span>"I agree to the Terms of Service and Privacy Policy"</span>
                        </label>

                        <FormError message=shown_error />

                        <Button
                            class="w-full"
                            size=ButtonSize::Lg
                            attr:disabled=move || session.is_loading()
                        >
                            <Show when=move || session.is_loading()>
                                <Spinner />
                            </Show>
                            {move || if session.is_loading() { "Creating account..." } else { "Sign Up" }}
                        </Button>
                    </form>
                </CardContent>

                <CardFooter>
                    "Already have an account?"
                    <a class="font-medium text-[#6610f2] hover:text-[#9668f5]" href="/login">"Sign in"</a>
                </CardFooter>
            </Card>
        </AuthShell>
    }
}

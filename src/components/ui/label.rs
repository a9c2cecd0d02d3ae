use leptos::prelude::*;
use tw_merge::*;

#[component]
pub fn Label(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] html_for: String,
    children: Children,
) -> impl IntoView {
    let class = tw_merge!(
        "flex items-center gap-2 text-sm font-medium leading-none text-gray-700 select-none dark:text-[#d8cfbc]",
        class
    );

    view! {
        <label class=class r#for=html_for>
            {children()}
        </label>
    }
}

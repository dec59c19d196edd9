//! Credential form shown until all four bucket credentials are in the URL.

use leptos::prelude::*;

use crate::components::router::use_navigation;
use crate::models::PartialCredentials;

stylance::import_crate_style!(css, "src/components/login.module.css");

#[component]
pub fn Login() -> impl IntoView {
    let nav = use_navigation();
    let initial = nav.credentials();

    let key = RwSignal::new(initial.key.unwrap_or_default());
    let secret = RwSignal::new(initial.secret.unwrap_or_default());
    let endpoint = RwSignal::new(initial.endpoint.unwrap_or_default());
    let bucket = RwSignal::new(initial.bucket.unwrap_or_default());
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitted.set(true);

        let filled = |s: RwSignal<String>| {
            let v = s.get_untracked().trim().to_string();
            (!v.is_empty()).then_some(v)
        };
        let partial = PartialCredentials {
            key: filled(key),
            secret: filled(secret),
            endpoint: filled(endpoint),
            bucket: filled(bucket),
        };
        if let Ok(credentials) = partial.complete() {
            nav.set_oss_info(credentials);
        }
    };

    view! {
        <div class=css::login>
            <h1 class=css::title>"Connect to a bucket"</h1>
            <p class=css::hint>
                "Credentials are kept in the page URL only and never stored by the server."
            </p>
            <form class=css::form on:submit=on_submit novalidate=true>
                <Field label="key" value=key submitted=submitted />
                <Field label="secret" value=secret submitted=submitted />
                <Field label="endpoint" value=endpoint submitted=submitted />
                <Field label="bucket" value=bucket submitted=submitted />
                <div class=css::actions>
                    <button class=css::submit type="submit">"Open"</button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn Field(label: &'static str, value: RwSignal<String>, submitted: RwSignal<bool>) -> impl IntoView {
    let missing = move || submitted.get() && value.with(|v| v.trim().is_empty());

    view! {
        <label class=css::field>
            <span class=css::label>{label}</span>
            <input
                class=move || {
                    if missing() {
                        format!("{} {}", css::input, css::invalid)
                    } else {
                        css::input.to_string()
                    }
                }
                type="text"
                name=label
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=missing>
                <span class=css::error>{format!("{label} is required")}</span>
            </Show>
        </label>
    }
}

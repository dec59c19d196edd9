//! Logged-in page: bucket heading plus the root listing.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::file_list::FileList;
use crate::components::icons as ic;
use crate::components::notify::use_notifier;
use crate::components::router::use_oss_path;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/browser.module.css");

#[component]
pub fn Browser() -> impl IntoView {
    let oss = use_oss_path();
    let notifier = use_notifier();
    let bucket = format!("oss://{}", oss.credentials.bucket);

    let oss = StoredValue::new(oss);
    let copy_command = move |_| {
        // Read at click time so the command follows navigation.
        let command = oss.with_value(|o| o.credentials.ossutil_command(&o.path_untracked()));
        spawn_local(async move {
            match dom::copy_to_clipboard(&command).await {
                Ok(()) => notifier.success_with("Copied to clipboard", command),
                Err(e) => notifier.error(e),
            }
        });
    };

    view! {
        <main class=css::browser>
            <header class=css::header>
                <h1 class=css::bucket>{bucket}</h1>
                <button class=css::copyCommand on:click=copy_command>
                    <Icon icon=ic::COPY_KEY />
                    "Copy ossutil command"
                </button>
            </header>
            <FileList />
        </main>
    }
}

//! Action bar above the listing.
//!
//! Picker lists only get the favorites toggle and "load all"; the batch
//! operations, upload and refresh need the full list.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::context::use_list;
use super::upload::UploadButton;
use crate::components::icons as ic;
use crate::models::TransferMode;

stylance::import_crate_style!(css, "src/components/file_list/file_list.module.css");

#[component]
pub fn Toolbar() -> impl IntoView {
    let list = use_list();

    let mutations = (!list.picker).then(|| {
        view! {
            <span class=css::toolSeparator aria-hidden="true"><Icon icon=ic::MORE /></span>
            <button
                class=css::toolButton
                on:click=move |_| list.open_batch_transfer(TransferMode::Move)
            >
                "Move selected"
            </button>
            <button
                class=css::toolButton
                on:click=move |_| list.open_batch_transfer(TransferMode::Copy)
            >
                "Copy selected"
            </button>
            <button
                class=format!("{} {}", css::toolButton, css::danger)
                on:click=move |_| list.open_batch_delete()
            >
                <Icon icon=ic::DELETE />
                "Delete selected"
            </button>
            <UploadButton />
            <button class=css::toolButton on:click=move |_| list.refresh()>
                <Icon icon=ic::REFRESH />
                "Refresh"
            </button>
            <span class=css::selectionCount>
                {move || match list.engine.with(|e| e.selection_len()) {
                    0 => String::new(),
                    n => format!("{n} selected"),
                }}
            </span>
        }
    });

    view! {
        <div class=css::toolbar role="toolbar">
            <button class=css::toolButton on:click=move |_| list.toggle_show_favorite()>
                {move || if list.show_favorite.get() { "Hide favorites" } else { "Show favorites" }}
            </button>
            <button
                class=css::toolButton
                disabled=move || !list.engine.with(|e| e.has_more())
                on:click=move |_| list.load_all()
            >
                "Load all"
            </button>
            {mutations}
        </div>
    }
}

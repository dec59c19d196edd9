//! Breadcrumb path bar with an inline raw-path editor.
//!
//! Home, one button per ancestor, then a star for the current directory.
//! Clicking the edit icon or any separator swaps in a text input; Enter or
//! blur commits it.

use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::context::use_list;
use crate::components::icons as ic;
use crate::core::path::{breadcrumbs, normalize_dir_input};

stylance::import_crate_style!(css, "src/components/file_list/file_list.module.css");

#[component]
pub fn Breadcrumb() -> impl IntoView {
    let editing = RwSignal::new(false);

    view! {
        <nav class=css::breadcrumb aria-label="Path">
            <Show
                when=move || editing.get()
                fallback=move || view! { <Segments editing=editing /> }
            >
                <PathEditor editing=editing />
            </Show>
        </nav>
    }
}

#[component]
fn Segments(editing: RwSignal<bool>) -> impl IntoView {
    let list = use_list();
    let is_favorite = move || {
        let dir = list.cur_dir.get();
        list.favorites.with(|f| f.contains(&dir))
    };

    view! {
        <button class=css::crumbEdit title="Edit path" on:click=move |_| editing.set(true)>
            <Icon icon=ic::EDIT />
        </button>
        <button class=css::crumb title="Bucket root" on:click=move |_| list.change_root(String::new())>
            <Icon icon=ic::HOME />
        </button>
        <For
            each=move || breadcrumbs(&list.cur_dir.get())
            key=|crumb| crumb.target.clone()
            children=move |crumb| {
                let target = crumb.target;
                let label = if crumb.label.is_empty() {
                    "(empty)".to_string()
                } else {
                    crumb.label
                };
                view! {
                    <span class=css::separator on:click=move |_| editing.set(true)>
                        <Icon icon=ic::SEPARATOR />
                    </span>
                    <button class=css::crumb on:click=move |_| list.change_root(target.clone())>
                        {label}
                    </button>
                }
            }
        />
        <span class=css::separator on:click=move |_| editing.set(true)>
            <Icon icon=ic::SEPARATOR />
        </span>
        <button
            class=css::iconButton
            title="Favorite this directory"
            on:click=move |_| list.toggle_current_favorite()
        >
            {move || {
                if is_favorite() {
                    view! { <span class=css::starred><Icon icon=ic::STAR_FILLED /></span> }.into_any()
                } else {
                    view! { <span class=css::unstarred><Icon icon=ic::STAR /></span> }.into_any()
                }
            }}
        </button>
    }
}

#[component]
fn PathEditor(editing: RwSignal<bool>) -> impl IntoView {
    let list = use_list();
    let input_ref = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    // Enter and the blur caused by unmounting may both fire; commit once.
    let commit = move |raw: String| {
        if !editing.get_untracked() {
            return;
        }
        editing.set(false);
        list.change_root(normalize_dir_input(&raw));
    };

    view! {
        <input
            class=css::pathInput
            type="text"
            node_ref=input_ref
            value=list.cur_dir.get_untracked()
            on:keydown=move |ev| {
                if ev.key() == "Enter" {
                    commit(event_target_value(&ev));
                } else if ev.key() == "Escape" {
                    editing.set(false);
                }
            }
            on:blur=move |ev| commit(event_target_value(&ev))
        />
    }
}

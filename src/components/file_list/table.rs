//! Listing table: sortable header and one row per entry.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::context::{ListContext, use_list};
use crate::components::icons as ic;
use crate::core::ListingPhase;
use crate::models::{Entry, RenameRequest, SortDirection, SortField, TransferMode};
use crate::utils::format::{format_datetime, format_size};

stylance::import_crate_style!(css, "src/components/file_list/file_list.module.css");

fn grid_class(picker: bool) -> &'static str {
    if picker { css::pickerGrid } else { css::fullGrid }
}

#[component]
pub fn ListTable() -> impl IntoView {
    let list = use_list();
    let picker = list.picker;
    let is_empty = move || {
        list.engine
            .with(|e| e.phase() == ListingPhase::Loaded && e.is_empty())
    };

    view! {
        <div
            class=move || {
                if list.engine.with(|e| e.is_loading()) {
                    format!("{} {}", css::table, css::loading)
                } else {
                    css::table.to_string()
                }
            }
            role="grid"
            aria-label="Objects"
            aria-busy=move || list.engine.with(|e| e.is_loading()).to_string()
        >
            <div class=format!("{} {}", css::headerRow, grid_class(picker)) role="row">
                {(!picker).then(|| view! {
                    <span class=css::check>
                        <input
                            type="checkbox"
                            title="Select all"
                            prop:checked=move || list.engine.with(|e| e.all_selected())
                            on:change=move |_| list.engine.update(|e| e.toggle_all())
                        />
                    </span>
                })}
                <SortHeader field=SortField::Name label="Name" />
                {(!picker).then(|| view! { <SortHeader field=SortField::Size label="Size" /> })}
                <SortHeader field=SortField::LastModified label="Modified" />
                {(!picker).then(|| view! { <span class=css::headerCell>"Actions"</span> })}
            </div>
            <For
                each=move || list.engine.with(|e| e.rows())
                key=|entry| (entry.key.clone(), entry.size, entry.last_modified)
                children=move |entry| view! { <Row entry=entry /> }
            />
            <Show when=is_empty>
                <div class=css::emptyRow>"This directory is empty"</div>
            </Show>
        </div>
    }
}

#[component]
fn SortHeader(field: SortField, label: &'static str) -> impl IntoView {
    let list = use_list();
    let direction = move || list.engine.with(|e| e.sort().direction_for(field));

    view! {
        <button
            class=css::sortHeader
            on:click=move |_| list.engine.update(|e| e.cycle_sort(field))
            aria-sort=move || match direction() {
                Some(SortDirection::Ascend) => "ascending",
                Some(SortDirection::Descend) => "descending",
                None => "none",
            }
        >
            {label}
            <span class=css::sortMark>
                {move || match direction() {
                    Some(SortDirection::Ascend) => "▲",
                    Some(SortDirection::Descend) => "▼",
                    None => "",
                }}
            </span>
        </button>
    }
}

/// Size and time cells share the same "dash when missing" rendering.
fn meta_cell<T>(value: Option<T>, render: fn(T) -> String, hidden: bool) -> AnyView {
    match value {
        _ if hidden => ().into_any(),
        Some(v) => render(v).into_any(),
        None => view! { <Icon icon=ic::EMPTY /> }.into_any(),
    }
}

#[component]
fn Row(entry: Entry) -> impl IntoView {
    let list = use_list();
    let picker = list.picker;
    let is_parent = entry.is_parent();

    let key = entry.key.clone();
    let selected = {
        let key = key.clone();
        move || list.engine.with(|e| e.is_selected(&key))
    };
    let row_class = {
        let selected = selected.clone();
        move || {
            let mut class = format!("{} {}", css::row, grid_class(picker));
            if selected() {
                class.push(' ');
                class.push_str(css::selected);
            }
            class
        }
    };

    let check = (!picker).then(|| {
        let key = key.clone();
        view! {
            <span class=css::check>
                {(!is_parent).then(|| view! {
                    <input
                        type="checkbox"
                        aria-label="Select"
                        prop:checked=selected
                        on:change=move |_| list.engine.update(|e| e.toggle_selected(&key))
                    />
                })}
            </span>
        }
    });

    let size = (!picker).then(|| {
        view! { <span class=css::size>{meta_cell(entry.size, format_size, is_parent)}</span> }
    });
    let modified = view! {
        <span class=css::date>{meta_cell(entry.last_modified, format_datetime, is_parent)}</span>
    };

    let actions = (!picker).then(|| {
        view! {
            <span class=css::actions>
                {(!is_parent).then(|| view! { <RowActions entry=entry.clone() /> })}
            </span>
        }
    });

    view! {
        <div class=row_class role="row">
            {check}
            <span class=css::nameCell>
                <EntryName entry=entry.clone() />
            </span>
            {size}
            {modified}
            {actions}
        </div>
    }
}

#[component]
fn EntryName(entry: Entry) -> impl IntoView {
    let list = use_list();

    if entry.is_parent() {
        let at_root = move || list.cur_dir.with(String::is_empty);
        return view! {
            <button
                class=format!("{} {}", css::entryButton, css::parentButton)
                disabled=at_root
                on:click=move |_| {
                    if !at_root() {
                        let parent = list.engine.with_untracked(|e| e.parent().to_string());
                        list.change_root(parent);
                    }
                }
            >
                <Icon icon=ic::PARENT_DIR />
                "Up one level"
            </button>
        }
        .into_any();
    }

    if entry.is_dir() {
        let key = entry.key.clone();
        return view! {
            <button class=css::entryButton on:click=move |_| list.change_root(key.clone())>
                <Icon icon=ic::FOLDER />
                {entry.name}
            </button>
        }
        .into_any();
    }

    view! {
        <span class=css::fileName>
            <Icon icon=ic::FILE />
            {entry.name}
        </span>
    }
    .into_any()
}

#[component]
fn RowActions(entry: Entry) -> impl IntoView {
    let list = use_list();
    let is_dir = entry.is_dir();
    let confirming = RwSignal::new(false);

    let key = StoredValue::new(entry.key.clone());
    let entry = StoredValue::new(entry);
    let is_favorite = move || list.favorites.with(|f| key.with_value(|k| f.contains(k)));

    view! {
        <button
            class=css::iconButton
            title=move || if is_favorite() { "Remove from favorites" } else { "Add to favorites" }
            on:click=move |_| key.with_value(|k| list.toggle_favorite(k))
        >
            {move || {
                if is_favorite() {
                    view! { <span class=css::starred><Icon icon=ic::STAR_FILLED /></span> }.into_any()
                } else {
                    view! { <span class=css::unstarred><Icon icon=ic::STAR /></span> }.into_any()
                }
            }}
        </button>
        <ActionButton label="Key" title="Copy key" on_click=move || list.copy_key(key.get_value()) />
        <ActionButton
            label="Move"
            on_click=move || list.open_transfer(TransferMode::Move, vec![key.get_value()])
        />
        <ActionButton
            label="Copy"
            on_click=move || list.open_transfer(TransferMode::Copy, vec![key.get_value()])
        />
        <ActionButton label="Rename" on_click=move || open_rename(list, entry) />
        <ActionButton
            label="Preview"
            icon=ic::PREVIEW
            disabled=is_dir
            on_click=move || list.preview(key.get_value())
        />
        <ActionButton
            label="Download"
            icon=ic::DOWNLOAD
            disabled=is_dir
            on_click=move || entry.with_value(|e| list.download(e))
        />
        <ActionButton
            label="Share"
            icon=ic::SHARE
            disabled=is_dir
            on_click=move || list.share(key.get_value())
        />
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button class=css::dangerButton on:click=move |_| confirming.set(true)>
                    "Delete"
                </button>
            }
        >
            <span class=css::confirm>
                "Delete?"
                <button
                    class=css::dangerButton
                    on:click=move |_| {
                        confirming.set(false);
                        list.delete(vec![key.get_value()]);
                    }
                >
                    "Yes"
                </button>
                <button class=css::actionButton on:click=move |_| confirming.set(false)>
                    "No"
                </button>
            </span>
        </Show>
    }
}

fn open_rename(list: ListContext, entry: StoredValue<Entry>) {
    let req = entry.with_value(|e| RenameRequest::new(e.key.clone(), e.name.clone()));
    list.rename.set(Some(req));
}

#[component]
fn ActionButton<F>(
    label: &'static str,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] icon: Option<icondata::Icon>,
    #[prop(optional)] disabled: bool,
    on_click: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button
            class=css::actionButton
            title=title.unwrap_or(label)
            disabled=disabled
            on:click=move |_| on_click()
        >
            {icon.map(|icon| view! { <Icon icon=icon /> })}
            {label}
        </button>
    }
}

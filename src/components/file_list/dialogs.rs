//! Move/copy, rename and batch delete dialogs.
//!
//! The move/copy dialog embeds a picker-mode [`FileList`] to choose the
//! target directory, so that component is recursive. The nested instance is
//! erased to [`AnyView`] to give the recursion a concrete type.

use leptos::prelude::*;

use super::FileList;
use super::context::use_list;

stylance::import_crate_style!(css, "src/components/file_list/file_list.module.css");

#[component]
fn Modal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(default = "OK")] ok_label: &'static str,
    #[prop(optional)] danger: bool,
    on_ok: Callback<()>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    let ok_class = if danger {
        format!("{} {}", css::primaryButton, css::danger)
    } else {
        css::primaryButton.to_string()
    };

    view! {
        <div class=css::backdrop on:click=move |_| on_cancel.run(())>
            <div
                class=css::dialog
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <header class=css::dialogTitle>{move || title.get()}</header>
                <div class=move || {
                    if busy.get() {
                        format!("{} {}", css::dialogBody, css::busy)
                    } else {
                        css::dialogBody.to_string()
                    }
                }>
                    {children()}
                </div>
                <footer class=css::dialogFooter>
                    <button class=css::actionButton on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class=ok_class disabled=move || busy.get() on:click=move |_| on_ok.run(())>
                        {ok_label}
                    </button>
                </footer>
            </div>
        </div>
    }
}

#[component]
pub fn TransferDialog() -> AnyView {
    let list = use_list();

    view! {
        <Show when=move || list.transfer.with(Option::is_some)>
            {move || {
                let Some(req) = list.transfer.get_untracked() else {
                    return ().into_any();
                };
                let on_target = Callback::new(move |dir: String| {
                    list.transfer.update(|t| {
                        if let Some(t) = t {
                            t.target_dir = Some(dir);
                        }
                    })
                });
                let picker = view! {
                    <FileList root=req.source_dir.clone() picker=true on_change=on_target />
                }
                .into_any();

                view! {
                    <Modal
                        title=req.title()
                        busy=Signal::derive(move || {
                            list.transfer.with(|t| t.as_ref().is_some_and(|t| t.loading))
                        })
                        on_ok=Callback::new(move |_| list.submit_transfer())
                        on_cancel=Callback::new(move |_| list.transfer.set(None))
                    >
                        <div class=css::pickerFrame>{picker}</div>
                        <label class=css::renameRow>
                            <span>"Also rename to"</span>
                            <input
                                class=css::textInput
                                type="text"
                                disabled=!req.can_rename()
                                placeholder=req.rename_placeholder()
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    list.transfer.update(|t| {
                                        if let Some(t) = t {
                                            t.rename = (!value.is_empty()).then_some(value);
                                        }
                                    })
                                }
                            />
                        </label>
                    </Modal>
                }
                .into_any()
            }}
        </Show>
    }
    .into_any()
}

#[component]
pub fn RenameDialog() -> impl IntoView {
    let list = use_list();

    view! {
        <Show when=move || list.rename.with(Option::is_some)>
            {move || {
                let name = list
                    .rename
                    .with_untracked(|r| r.as_ref().map(|r| r.name.clone()))
                    .unwrap_or_default();
                view! {
                    <Modal
                        title=format!("Rename: {name}")
                        busy=Signal::derive(move || {
                            list.rename.with(|r| r.as_ref().is_some_and(|r| r.loading))
                        })
                        on_ok=Callback::new(move |_| list.submit_rename())
                        on_cancel=Callback::new(move |_| list.rename.set(None))
                    >
                        <input
                            class=css::textInput
                            type="text"
                            placeholder=name
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                list.rename.update(|r| {
                                    if let Some(r) = r {
                                        r.new_name = value;
                                    }
                                })
                            }
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    list.submit_rename();
                                }
                            }
                        />
                    </Modal>
                }
            }}
        </Show>
    }
}

#[component]
pub fn DeleteDialog() -> impl IntoView {
    let list = use_list();
    let count = move || list.pending_delete.with(|k| k.as_ref().map_or(0, Vec::len));

    view! {
        <Show when=move || list.pending_delete.with(Option::is_some)>
            <Modal
                title="Delete selected objects?".to_string()
                busy=false
                ok_label="Delete"
                danger=true
                on_ok=Callback::new(move |_| {
                    if let Some(keys) = list.pending_delete.get_untracked() {
                        list.delete(keys);
                    }
                    list.pending_delete.set(None);
                })
                on_cancel=Callback::new(move |_| list.pending_delete.set(None))
            >
                <p>
                    {move || format!("{} items selected. ", count())}
                    <strong>"Directories are deleted recursively."</strong>
                </p>
            </Modal>
        </Show>
    }
}

//! File upload button and per-file status list.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use super::context::{ListContext, use_list};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/file_list/file_list.module.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UploadStatus {
    Uploading,
    Done,
    Failed,
}

impl UploadStatus {
    fn label(self) -> &'static str {
        match self {
            Self::Uploading => "uploading",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadItem {
    pub id: u32,
    pub name: String,
    pub status: UploadStatus,
}

fn set_status(list: ListContext, id: u32, status: UploadStatus) {
    list.uploads.update(|items| {
        if let Some(item) = items.iter_mut().find(|i| i.id == id) {
            item.status = status;
        }
    });
}

/// Upload every chosen file into the current directory, one request each.
fn upload_files(list: ListContext, files: web_sys::FileList, next_id: StoredValue<u32>) {
    let dir = list.cur_dir.get_untracked();

    for file in (0..files.length()).filter_map(|i| files.get(i)) {
        let id = next_id.get_value();
        next_id.set_value(id.wrapping_add(1));
        let name = file.name();
        list.uploads.update(|items| {
            items.push(UploadItem {
                id,
                name: name.clone(),
                status: UploadStatus::Uploading,
            })
        });

        let api = list.api();
        let dir = dir.clone();
        spawn_local(async move {
            match api.upload(&dir, &file).await {
                Ok(()) => {
                    set_status(list, id, UploadStatus::Done);
                    list.notifier.success(format!("Uploaded {name}"));
                    list.refresh();
                }
                Err(e) => {
                    set_status(list, id, UploadStatus::Failed);
                    list.notifier.api_error_titled(format!("Upload of {name} failed"), &e);
                }
            }
        });
    }
}

/// Toolbar button opening the browser's file chooser.
#[component]
pub fn UploadButton() -> impl IntoView {
    let list = use_list();
    let next_id = StoredValue::new(0u32);

    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(files) = input.files() {
            upload_files(list, files, next_id);
        }
        // Allow choosing the same file again.
        input.set_value("");
    };

    view! {
        <label class=css::toolButton>
            <Icon icon=ic::UPLOAD />
            "Upload"
            <input type="file" multiple class=css::hiddenInput on:change=on_change />
        </label>
    }
}

/// Status of uploads started from this list.
#[component]
pub fn UploadList() -> impl IntoView {
    let list = use_list();

    view! {
        <Show when=move || list.uploads.with(|u| !u.is_empty())>
            <ul class=css::uploads>
                <For
                    each=move || list.uploads.get()
                    key=|item| (item.id, item.status)
                    children=move |item| {
                        let id = item.id;
                        let status_class = match item.status {
                            UploadStatus::Uploading => css::uploading,
                            UploadStatus::Done => css::uploadDone,
                            UploadStatus::Failed => css::uploadFailed,
                        };
                        view! {
                            <li class=css::upload>
                                <Icon icon=ic::FILE />
                                <span class=css::uploadName>{item.name}</span>
                                <span class=status_class>{item.status.label()}</span>
                                <button
                                    class=css::iconButton
                                    title="Remove from list"
                                    disabled=item.status == UploadStatus::Uploading
                                    on:click=move |_| {
                                        list.uploads.update(|u| u.retain(|i| i.id != id))
                                    }
                                >
                                    <Icon icon=ic::CLOSE />
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(UploadStatus::Uploading.label(), "uploading");
        assert_eq!(UploadStatus::Done.label(), "done");
        assert_eq!(UploadStatus::Failed.label(), "failed");
    }
}

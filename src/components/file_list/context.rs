//! Per-instance state shared by the pieces of one [`super::FileList`].
//!
//! Each list provides its own [`ListContext`]; the picker nested inside the
//! transfer dialog shadows the outer one for its subtree.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::upload::UploadItem;
use crate::components::notify::Notifier;
use crate::components::router::NavigationContext;
use crate::core::error::ValidationError;
use crate::core::transfer::{validate_delete, validate_rename, validate_transfer};
use crate::core::{FetchOutcome, ListingEngine, PreferencesStore, StorageApi};
use crate::models::{Credentials, Entry, RenameRequest, TransferMode, TransferRequest};
use crate::utils::dom;

#[derive(Clone, Copy)]
pub(super) struct ListContext {
    pub engine: RwSignal<ListingEngine>,
    /// Directory being listed: the URL path, or local state in picker mode.
    pub cur_dir: Memo<String>,
    pub picker: bool,
    pub favorites: RwSignal<Vec<String>>,
    pub show_favorite: RwSignal<bool>,
    pub transfer: RwSignal<Option<TransferRequest>>,
    pub rename: RwSignal<Option<RenameRequest>>,
    /// Keys awaiting the batch delete confirmation.
    pub pending_delete: RwSignal<Option<Vec<String>>>,
    pub uploads: RwSignal<Vec<UploadItem>>,
    pub notifier: Notifier,
    api: StoredValue<StorageApi>,
    nav: NavigationContext,
    local_dir: RwSignal<String>,
    on_change: Option<Callback<String>>,
}

impl ListContext {
    pub fn new(
        credentials: Credentials,
        nav: NavigationContext,
        notifier: Notifier,
        root: String,
        picker: bool,
        on_change: Option<Callback<String>>,
    ) -> Self {
        let local_dir = RwSignal::new(root);
        let cur_dir = Memo::new(move |_| if picker { local_dir.get() } else { nav.path() });
        let prefs = PreferencesStore::for_bucket(&credentials).load();

        Self {
            engine: RwSignal::new(ListingEngine::new(&cur_dir.get_untracked())),
            cur_dir,
            picker,
            favorites: RwSignal::new(prefs.favorites),
            show_favorite: RwSignal::new(prefs.show_favorite),
            transfer: RwSignal::new(None),
            rename: RwSignal::new(None),
            pending_delete: RwSignal::new(None),
            uploads: RwSignal::new(Vec::new()),
            notifier,
            api: StoredValue::new(StorageApi::new(credentials)),
            nav,
            local_dir,
            on_change,
        }
    }

    pub fn api(&self) -> StorageApi {
        self.api.get_value()
    }

    fn prefs(&self) -> PreferencesStore {
        self.api
            .with_value(|api| PreferencesStore::for_bucket(api.credentials()))
    }

    /// Re-list whenever the directory, page limit or refresh counter changes.
    ///
    /// The engine is written with `update`, which does not subscribe, so the
    /// effect only re-runs when the fetch key itself changes.
    pub fn start_fetching(&self) {
        let this = *self;

        // Directory changes reach the engine here, including back/forward.
        Effect::new(move |_| {
            let dir = this.cur_dir.get();
            if this.engine.with_untracked(|e| e.dir() != dir) {
                this.engine.update(|e| {
                    e.enter_dir(&dir);
                });
            }
        });

        let fetch_key = Memo::new(move |_| this.engine.with(|e| e.fetch_key(this.picker)));

        Effect::new(move |_| {
            let key = fetch_key.get();
            let Some(generation) = this.engine.try_update(|e| e.begin()) else {
                return;
            };
            let api = this.api();
            spawn_local(async move {
                let result = api.list(&key.request).await;
                if let Some(FetchOutcome::Failed(e)) =
                    this.engine.try_update(|e| e.finish(generation, result))
                {
                    this.notifier.api_error(&e);
                }
            });
        });
    }

    // ---- navigation -------------------------------------------------------

    /// Navigate to `dir`. Per-directory state is reset by the engine once
    /// the new directory arrives; staying put resets it immediately.
    pub fn change_root(&self, dir: String) {
        if self.cur_dir.with_untracked(|cur| *cur == dir) {
            self.engine.update(|e| e.change_root());
        }
        if self.picker {
            self.local_dir.set(dir.clone());
        } else {
            self.nav.set_path(dir.clone());
        }
        if let Some(on_change) = self.on_change {
            on_change.run(dir);
        }
    }

    pub fn refresh(&self) {
        self.engine.update(|e| e.refresh());
    }

    pub fn load_all(&self) {
        self.engine.update(|e| e.load_all());
    }

    // ---- favorites --------------------------------------------------------

    pub fn toggle_favorite(&self, key: &str) {
        let prefs = self.prefs();
        match prefs.toggle_favorite(key) {
            Ok(true) => self.notifier.info("Added to favorites"),
            Ok(false) => self.notifier.info("Removed from favorites"),
            Err(e) => self.notifier.error(e.to_string()),
        }
        self.favorites.set(prefs.load().favorites);
    }

    pub fn toggle_current_favorite(&self) {
        let dir = self.cur_dir.get_untracked();
        if dir.is_empty() {
            self.notifier.validation(ValidationError::FavoriteRoot);
        } else {
            self.toggle_favorite(&dir);
        }
    }

    pub fn toggle_show_favorite(&self) {
        let show = !self.show_favorite.get_untracked();
        if let Err(e) = self.prefs().set_show_favorite(show) {
            self.notifier.error(e.to_string());
        }
        self.show_favorite.set(show);
    }

    // ---- single-object actions --------------------------------------------

    pub fn copy_key(&self, key: String) {
        let notifier = self.notifier;
        spawn_local(async move {
            match dom::copy_to_clipboard(&key).await {
                Ok(()) => notifier.success_with("Copied", key),
                Err(e) => notifier.error(e),
            }
        });
    }

    pub fn download(&self, entry: &Entry) {
        let (api, notifier) = (self.api(), self.notifier);
        let (key, name) = (entry.key.clone(), entry.name.clone());
        spawn_local(async move {
            match api.share_url(&key, None).await {
                Ok(url) => {
                    if dom::trigger_download(&url, &name).is_err() {
                        notifier.error("Cannot start the download");
                    }
                }
                Err(e) => notifier.api_error_titled("Download failed", &e),
            }
        });
    }

    pub fn share(&self, key: String) {
        let (api, notifier) = (self.api(), self.notifier);
        spawn_local(async move {
            let url = match api.long_share_url(&key).await {
                Ok(url) => url,
                Err(e) => return notifier.api_error_titled("Share failed", &e),
            };
            match dom::copy_to_clipboard(&url).await {
                Ok(()) => notifier.success_with("Share link copied, valid for 1 year", url),
                Err(e) => notifier.error(e),
            }
        });
    }

    pub fn preview(&self, key: String) {
        let (api, notifier) = (self.api(), self.notifier);
        spawn_local(async move {
            match api.preview(&key).await {
                Ok(body) => {
                    if dom::open_blob(&body.bytes, body.content_type.as_deref()).is_err() {
                        notifier.error("Cannot open the preview");
                    }
                }
                Err(e) => notifier.api_error_titled("Preview failed", &e),
            }
        });
    }

    pub fn delete(&self, keys: Vec<String>) {
        let req = match validate_delete(keys) {
            Ok(req) => req,
            Err(e) => return self.notifier.validation(e),
        };
        let this = *self;
        let api = self.api();
        spawn_local(async move {
            match api.delete(&req).await {
                Ok(()) => {
                    this.notifier.success("Deleted");
                    this.engine.update(|e| {
                        e.clear_selection();
                        e.refresh();
                    });
                }
                Err(e) => this.notifier.api_error_titled("Delete failed", &e),
            }
        });
    }

    // ---- dialogs ----------------------------------------------------------

    pub fn open_transfer(&self, mode: TransferMode, keys: Vec<String>) {
        if keys.is_empty() {
            return self.notifier.validation(ValidationError::EmptySelection);
        }
        let dir = self.cur_dir.get_untracked();
        self.transfer.set(Some(TransferRequest::new(mode, keys, dir)));
    }

    pub fn open_batch_transfer(&self, mode: TransferMode) {
        let keys = self.engine.with_untracked(|e| e.selected());
        self.open_transfer(mode, keys);
    }

    pub fn open_batch_delete(&self) {
        let keys = self.engine.with_untracked(|e| e.selected());
        if keys.is_empty() {
            return self.notifier.validation(ValidationError::EmptySelection);
        }
        self.pending_delete.set(Some(keys));
    }

    /// Send the open move/copy dialog. Invalid input leaves it open.
    pub fn submit_transfer(&self) {
        let Some(req) = self.transfer.get_untracked() else {
            return;
        };
        let body = match validate_transfer(&req) {
            Ok(body) => body,
            Err(e) => return self.notifier.validation(e),
        };
        self.transfer.update(|t| {
            if let Some(t) = t {
                t.loading = true;
            }
        });

        let this = *self;
        let api = self.api();
        let verb = req.mode.verb();
        spawn_local(async move {
            match api.transfer(req.mode, &body).await {
                Ok(()) => {
                    this.notifier.success(format!("{verb} succeeded"));
                    this.refresh();
                }
                Err(e) => this.notifier.api_error_titled(format!("{verb} failed"), &e),
            }
            this.transfer.set(None);
        });
    }

    /// Send the open rename dialog. Invalid input leaves it open.
    pub fn submit_rename(&self) {
        let Some(req) = self.rename.get_untracked() else {
            return;
        };
        let body = match validate_rename(&req) {
            Ok(body) => body,
            Err(e) => return self.notifier.validation(e),
        };
        self.rename.update(|r| {
            if let Some(r) = r {
                r.loading = true;
            }
        });

        let this = *self;
        let api = self.api();
        spawn_local(async move {
            match api.rename(&body).await {
                Ok(()) => {
                    this.notifier.success("Renamed");
                    this.refresh();
                }
                Err(e) => this.notifier.api_error_titled("Rename failed", &e),
            }
            this.rename.set(None);
        });
    }
}

pub(super) fn use_list() -> ListContext {
    use_context::<ListContext>().expect("ListContext must be provided")
}

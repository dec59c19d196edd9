//! Directory listing state machine.
//!
//! One [`ListingEngine`] backs each mounted file list, including the nested
//! directory picker inside the move/copy dialog. The engine is plain data;
//! the component owns it in a signal and performs the fetches it describes.
//!
//! ```text
//! Idle ──begin──▶ Loading ──finish(Ok)──▶ Loaded
//!                    │  ▲                   │
//!          finish(Err)  └──────begin────────┘
//!                    ▼
//!                LoadFailed
//! ```
//!
//! Each `begin` hands out a generation number. A response carrying an older
//! generation than the latest `begin` is dropped, so a slow reply for a
//! directory the user already left cannot overwrite the newer listing.

use std::collections::BTreeSet;

use crate::core::error::ApiError;
use crate::core::path::parent_dir;
use crate::core::sort::display_rows;
use crate::models::api::{ListRequest, ListResponse};
use crate::models::{Entry, SortField, SortState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListingPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadFailed,
}

/// What happened to a finished fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The listing was replaced.
    Applied,
    /// A newer fetch was started since; the result was discarded.
    Stale,
    /// The fetch failed; the previous listing is kept.
    Failed(ApiError),
}

/// Everything that, when it changes, requires a new listing request.
///
/// Credentials are tracked separately by the component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchKey {
    pub request: ListRequest,
    pub refresh: u32,
}

/// Per-instance listing state.
#[derive(Clone, Debug, Default)]
pub struct ListingEngine {
    phase: ListingPhase,
    /// Directory being listed.
    dir: String,
    files: Option<Vec<Entry>>,
    parent: String,
    has_more: bool,
    /// `None` uses the backend page size, `Some(0)` asks for everything.
    limit: Option<u32>,
    refresh: u32,
    generation: u64,
    selection: BTreeSet<String>,
    sort: SortState,
}

impl ListingEngine {
    /// Engine for a list opened at `dir`.
    ///
    /// The parent is guessed locally until the first response replaces it
    /// with the backend's value.
    pub fn new(dir: &str) -> Self {
        Self {
            dir: dir.to_string(),
            parent: parent_dir(dir),
            ..Self::default()
        }
    }

    // ---- fetch cycle ------------------------------------------------------

    /// Key for the current directory and mode.
    pub fn fetch_key(&self, picker: bool) -> FetchKey {
        FetchKey {
            request: ListRequest {
                path: self.dir.clone(),
                limit: self.limit,
                dir: picker,
            },
            refresh: self.refresh,
        }
    }

    /// Enter `Loading`; returns the generation the response must carry.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.phase = ListingPhase::Loading;
        self.generation
    }

    /// Apply a finished fetch.
    pub fn finish(
        &mut self,
        generation: u64,
        result: Result<ListResponse, ApiError>,
    ) -> FetchOutcome {
        if generation != self.generation {
            return FetchOutcome::Stale;
        }
        match result {
            Ok(rsp) => {
                self.files = Some(rsp.files);
                self.parent = rsp.parent;
                self.has_more = rsp.has_more;
                self.phase = ListingPhase::Loaded;
                FetchOutcome::Applied
            }
            Err(e) => {
                self.phase = ListingPhase::LoadFailed;
                FetchOutcome::Failed(e)
            }
        }
    }

    /// Force a re-fetch of the current directory.
    pub fn refresh(&mut self) {
        self.refresh = self.refresh.wrapping_add(1);
    }

    /// Drop the page limit and re-fetch.
    pub fn load_all(&mut self) {
        self.limit = Some(0);
        self.refresh();
    }

    /// Reset per-directory state: page limit and selection.
    pub fn change_root(&mut self) {
        self.limit = None;
        self.selection.clear();
    }

    /// Follow the directory shown by the URL or picker.
    ///
    /// Any change resets per-directory state, whatever caused it (a click,
    /// history navigation). Returns whether the directory changed.
    pub fn enter_dir(&mut self, dir: &str) -> bool {
        if self.dir == dir {
            return false;
        }
        self.dir = dir.to_string();
        self.parent = parent_dir(dir);
        self.change_root();
        true
    }

    // ---- accessors --------------------------------------------------------

    pub fn phase(&self) -> ListingPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListingPhase::Loading
    }

    pub fn dir(&self) -> &str {
        &self.dir
    }

    pub fn parent(&self) -> &str {
        &self.parent
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether a listing arrived and holds no entries.
    pub fn is_empty(&self) -> bool {
        self.files.as_ref().is_some_and(Vec::is_empty)
    }

    /// Parent row followed by the sorted entries; empty before first load.
    pub fn rows(&self) -> Vec<Entry> {
        display_rows(self.files.as_deref(), self.sort)
    }

    // ---- sorting ----------------------------------------------------------

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn cycle_sort(&mut self, field: SortField) {
        self.sort = self.sort.cycle(field);
    }

    // ---- selection --------------------------------------------------------

    pub fn selected(&self) -> Vec<String> {
        self.selection.iter().cloned().collect()
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selection.contains(key)
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Toggle one row. The parent row (empty key) is never selectable.
    pub fn toggle_selected(&mut self, key: &str) {
        if key.is_empty() {
            return;
        }
        if !self.selection.remove(key) {
            self.selection.insert(key.to_string());
        }
    }

    /// Whether every selectable row is selected.
    pub fn all_selected(&self) -> bool {
        let files = self.files.as_deref().unwrap_or_default();
        !files.is_empty() && files.iter().all(|e| self.selection.contains(&e.key))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Select every loaded entry, or clear when all are already selected.
    pub fn toggle_all(&mut self) {
        if self.all_selected() {
            self.selection.clear();
        } else if let Some(files) = &self.files {
            self.selection = files
                .iter()
                .filter(|e| !e.key.is_empty())
                .map(|e| e.key.clone())
                .collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, key: &str) -> Entry {
        Entry {
            name: name.into(),
            key: key.into(),
            size: if name.ends_with('/') { None } else { Some(1) },
            last_modified: None,
        }
    }

    fn response(names: &[(&str, &str)], parent: &str, has_more: bool) -> ListResponse {
        ListResponse {
            files: names.iter().map(|(n, k)| entry(n, k)).collect(),
            parent: parent.into(),
            has_more,
        }
    }

    #[test]
    fn test_initial_state() {
        let engine = ListingEngine::new("a/b/");
        assert_eq!(engine.phase(), ListingPhase::Idle);
        assert_eq!(engine.parent(), "a/");
        assert!(engine.rows().is_empty());
    }

    #[test]
    fn test_request_limit_unset_then_zero_after_load_all() {
        let mut engine = ListingEngine::new("a/");
        let key = engine.fetch_key(false);
        assert_eq!(
            key.request,
            ListRequest {
                path: "a/".into(),
                limit: None,
                dir: false
            }
        );

        engine.load_all();
        let next = engine.fetch_key(false);
        assert_eq!(next.request.limit, Some(0));
        assert_ne!(next, key);
    }

    #[test]
    fn test_change_root_resets_limit_and_selection() {
        let mut engine = ListingEngine::new("");
        let generation = engine.begin();
        engine.finish(generation, Ok(response(&[("x", "x"), ("y/", "y/")], "", true)));
        engine.toggle_selected("x");
        engine.load_all();

        engine.change_root();
        assert_eq!(engine.selection_len(), 0);
        assert_eq!(engine.fetch_key(false).request.limit, None);

        // Idempotent.
        engine.change_root();
        assert_eq!(engine.selection_len(), 0);
    }

    #[test]
    fn test_enter_dir_resets_state_from_history_navigation() {
        let mut engine = ListingEngine::new("a/");
        let generation = engine.begin();
        engine.finish(generation, Ok(response(&[("x", "a/x"), ("y", "a/y")], "", true)));
        engine.toggle_selected("a/x");
        engine.toggle_selected("a/y");
        engine.load_all();

        // Same directory: nothing to reset.
        assert!(!engine.enter_dir("a/"));
        assert_eq!(engine.selection_len(), 2);

        assert!(engine.enter_dir("b/"));
        assert_eq!(engine.dir(), "b/");
        assert_eq!(engine.parent(), "");
        assert_eq!(engine.selection_len(), 0);
        assert_eq!(
            engine.fetch_key(false).request,
            ListRequest {
                path: "b/".into(),
                limit: None,
                dir: false
            }
        );
    }

    #[test]
    fn test_is_empty_only_after_a_listing_arrives() {
        let mut engine = ListingEngine::new("a/");
        let generation = engine.begin();
        assert!(!engine.is_empty());

        let err = ApiError::Backend {
            status: 500,
            detail: None,
        };
        engine.finish(generation, Err(err));
        assert_eq!(engine.phase(), ListingPhase::LoadFailed);
        assert!(!engine.is_empty());

        let generation = engine.begin();
        engine.finish(generation, Ok(response(&[], "", false)));
        assert!(engine.is_empty());
        assert_eq!(engine.rows().len(), 1);
    }

    #[test]
    fn test_success_stores_backend_parent() {
        let mut engine = ListingEngine::new("a/b/");
        let generation = engine.begin();
        assert!(engine.is_loading());
        let outcome = engine.finish(generation, Ok(response(&[("c", "a/b/c")], "a/", false)));
        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(engine.phase(), ListingPhase::Loaded);
        assert_eq!(engine.parent(), "a/");
        assert_eq!(engine.rows().len(), 2);
    }

    #[test]
    fn test_failure_keeps_previous_listing() {
        let mut engine = ListingEngine::new("");
        let generation = engine.begin();
        engine.finish(generation, Ok(response(&[("x", "x")], "", true)));

        let generation = engine.begin();
        let err = ApiError::Backend {
            status: 403,
            detail: Some("AccessDenied".into()),
        };
        let outcome = engine.finish(generation, Err(err.clone()));
        assert_eq!(outcome, FetchOutcome::Failed(err));
        assert_eq!(engine.phase(), ListingPhase::LoadFailed);
        assert!(!engine.is_loading());
        assert_eq!(engine.rows().len(), 2);
        assert!(engine.has_more());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut engine = ListingEngine::new("");
        let old = engine.begin();
        let new = engine.begin();

        let outcome = engine.finish(old, Ok(response(&[("old", "old")], "", false)));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert!(engine.is_loading());

        engine.finish(new, Ok(response(&[("new", "new")], "", false)));
        assert_eq!(engine.rows()[1].name, "new");
    }

    #[test]
    fn test_refresh_changes_key() {
        let mut engine = ListingEngine::new("");
        let before = engine.fetch_key(true);
        engine.refresh();
        let after = engine.fetch_key(true);
        assert_eq!(before.request, after.request);
        assert_ne!(before.refresh, after.refresh);
        assert!(after.request.dir);
    }

    #[test]
    fn test_parent_row_not_selectable() {
        let mut engine = ListingEngine::new("");
        engine.toggle_selected("");
        assert_eq!(engine.selection_len(), 0);
        engine.toggle_selected("k");
        engine.toggle_selected("k");
        assert!(!engine.is_selected("k"));
    }

    #[test]
    fn test_toggle_all() {
        let mut engine = ListingEngine::new("");
        let generation = engine.begin();
        engine.finish(generation, Ok(response(&[("x", "x"), ("y/", "y/")], "", false)));

        engine.toggle_all();
        assert!(engine.all_selected());
        assert_eq!(engine.selected(), vec!["x".to_string(), "y/".to_string()]);

        engine.toggle_all();
        assert_eq!(engine.selection_len(), 0);
    }
}

//! URL query routing.
//!
//! Credentials and the current directory live in the page's query string.
//! Uses native `popstate` events instead of leptos_router so the query
//! string stays the only source of truth.
//!
//! # Architecture
//!
//! - **URL is the source of truth**: [`NavigationContext`] mirrors it in a signal
//! - **Single writer**: every mutation serializes through [`NavigationQuery::to_search`]
//! - **popstate events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::config::APP_NAME;
use crate::core::NavigationQuery;
use crate::models::{Credentials, PartialCredentials};
use crate::utils::dom;

/// Reactive view of the URL query, provided at the app root.
#[derive(Clone, Copy)]
pub struct NavigationContext {
    query: RwSignal<NavigationQuery>,
}

impl NavigationContext {
    /// Read the current URL and start following back/forward navigation.
    pub fn new() -> Self {
        let ctx = Self {
            query: RwSignal::new(NavigationQuery::parse(&dom::get_search())),
        };
        ctx.listen();
        ctx
    }

    #[cfg(target_arch = "wasm32")]
    fn listen(&self) {
        use wasm_bindgen::JsCast;

        let query = self.query;
        let closure = Closure::wrap(Box::new(move || {
            query.set(NavigationQuery::parse(&dom::get_search()));
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn listen(&self) {}

    /// Credentials as currently in the URL (tracked).
    pub fn credentials(&self) -> PartialCredentials {
        self.query.with(|q| q.credentials.clone())
    }

    /// Current directory (tracked), `""` for the root.
    pub fn path(&self) -> String {
        self.query.with(|q| q.path.clone())
    }

    fn commit(&self, next: NavigationQuery, replace: bool) {
        let search = next.to_search();
        if replace {
            dom::replace_search(&search);
        } else {
            dom::push_search(&search);
        }
        dom::set_title(next.title().unwrap_or(APP_NAME));
        self.query.set(next);
    }

    /// Replace all four credentials, keeping the path.
    pub fn set_oss_info(&self, credentials: Credentials) {
        let next = self.query.with_untracked(|q| q.with_credentials(credentials));
        self.commit(next, false);
    }

    /// Navigate to another directory, keeping the credentials.
    pub fn set_path(&self, path: impl Into<String>) {
        let path = path.into();
        let next = self.query.with_untracked(|q| q.with_path(path));
        self.commit(next, false);
    }

    /// Normalize the URL once on startup, without a new history entry.
    pub fn initialize(&self) {
        let current = self.query.get_untracked();
        self.commit(current, true);
    }
}

impl Default for NavigationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the navigation context provided by [`crate::app::App`].
pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>().expect("NavigationContext must be provided")
}

/// Credentials and path for components that only exist once logged in.
#[derive(Clone)]
pub struct OssPath {
    pub credentials: Credentials,
    nav: NavigationContext,
}

impl OssPath {
    /// Current directory from the URL, without subscribing.
    pub fn path_untracked(&self) -> String {
        self.nav.query.with_untracked(|q| q.path.clone())
    }
}

/// Credentials for the mounted browser.
///
/// # Panics
///
/// Panics when any credential is missing. The browser is only mounted
/// behind the login gate, so reaching this is a programming error.
pub fn use_oss_path() -> OssPath {
    let nav = use_navigation();
    let credentials = nav
        .query
        .with_untracked(|q| q.credentials.complete())
        .unwrap_or_else(|e| panic!("{e}"));
    OssPath { credentials, nav }
}

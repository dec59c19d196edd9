//! Transient notifications.
//!
//! Every user-facing outcome (success, validation warning, backend error)
//! goes through the [`Notifier`] provided at the app root. Notices dismiss
//! themselves after a delay or when clicked.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::config::{NOTIFICATION_DURATION_MS, NOTIFICATION_LONG_DURATION_MS};
use crate::core::error::{ApiError, ValidationError};

stylance::import_crate_style!(css, "src/components/notify.module.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub title: String,
    /// Secondary line, e.g. a copied URL.
    pub content: Option<String>,
}

/// Handle for raising notifications.
#[derive(Clone, Copy)]
pub struct Notifier {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    fn push(&self, level: NoticeLevel, title: String, content: Option<String>, duration_ms: u32) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.notices.update(|n| {
            n.push(Notice {
                id,
                level,
                title,
                content,
            })
        });

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|n| n.retain(|notice| notice.id != id));
    }

    pub fn info(&self, title: impl Into<String>) {
        self.push(NoticeLevel::Info, title.into(), None, NOTIFICATION_DURATION_MS);
    }

    pub fn success(&self, title: impl Into<String>) {
        self.push(NoticeLevel::Success, title.into(), None, NOTIFICATION_DURATION_MS);
    }

    /// Success with a detail line that stays up long enough to read.
    pub fn success_with(&self, title: impl Into<String>, content: impl Into<String>) {
        self.push(
            NoticeLevel::Success,
            title.into(),
            Some(content.into()),
            NOTIFICATION_LONG_DURATION_MS,
        );
    }

    pub fn warning(&self, title: impl Into<String>) {
        self.push(NoticeLevel::Warning, title.into(), None, NOTIFICATION_DURATION_MS);
    }

    pub fn error(&self, title: impl Into<String>) {
        self.push(NoticeLevel::Error, title.into(), None, NOTIFICATION_DURATION_MS);
    }

    /// Report a blocked request.
    pub fn validation(&self, e: ValidationError) {
        if e.is_warning() {
            self.warning(e.to_string());
        } else {
            self.error(e.to_string());
        }
    }

    /// Report a failed backend call, with the server's detail when present.
    pub fn api_error(&self, e: &ApiError) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&format!("storage backend: {e}").into());
        self.error(e.user_message());
    }

    /// Report a failed call under an operation-specific heading.
    pub fn api_error_titled(&self, title: impl Into<String>, e: &ApiError) {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&format!("storage backend: {e}").into());
        self.push(
            NoticeLevel::Error,
            title.into(),
            Some(e.user_message()),
            NOTIFICATION_DURATION_MS,
        );
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the notifier provided at the app root.
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier must be provided")
}

fn level_class(level: NoticeLevel) -> String {
    let modifier = match level {
        NoticeLevel::Info => css::info,
        NoticeLevel::Success => css::success,
        NoticeLevel::Warning => css::warning,
        NoticeLevel::Error => css::error,
    };
    format!("{} {}", css::notice, modifier)
}

/// Stack of active notices, top right of the page.
#[component]
pub fn Notifications() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class=css::stack role="status" aria-live="polite">
            <For
                each=move || notifier.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=level_class(notice.level) on:click=move |_| notifier.dismiss(id)>
                            <span class=css::title>{notice.title}</span>
                            {notice.content.map(|c| view! { <span class=css::content>{c}</span> })}
                            <span class=css::close aria-hidden="true"><Icon icon=ic::CLOSE /></span>
                        </div>
                    }
                }
            />
        </div>
    }
}

//! Root application module.
//!
//! Provides the navigation and notification contexts, then shows either the
//! login form or the bucket browser depending on the URL.

use leptos::prelude::*;

use crate::components::{Browser, Login, NavigationContext, Notifications, Notifier};

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides [`NavigationContext`] and [`Notifier`]
/// - Rewrites the URL once into canonical form
/// - Remounts the browser whenever the credentials change
#[component]
pub fn App() -> impl IntoView {
    let nav = NavigationContext::new();
    provide_context(nav);
    provide_context(Notifier::new());

    Effect::new(move |_| nav.initialize());

    // Path changes keep this equal, so only new credentials remount.
    let credentials = Memo::new(move |_| nav.credentials().complete().ok());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: var(--color-danger); margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: var(--color-text-3); margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: var(--color-fill);
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer;">"Error details"</summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; color: var(--color-danger);">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: var(--color-primary);
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {move || match credentials.get() {
                Some(_) => view! { <Browser /> }.into_any(),
                None => view! { <Login /> }.into_any(),
            }}
        </ErrorBoundary>
        <Notifications />
    }
}

//! UI components built with Leptos.
//!
//! - [`router`] - URL query state (credentials and current directory)
//! - [`login`] - Credential form shown until the URL is complete
//! - [`browser`] - Bucket page hosting the root listing
//! - [`file_list`] - Directory listing, dialogs and the recursive picker
//! - [`notify`] - Transient notifications
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod file_list;
pub mod icons;
pub mod login;
pub mod notify;
pub mod router;

pub use browser::Browser;
pub use login::Login;
pub use notify::{Notifications, Notifier};
pub use router::NavigationContext;

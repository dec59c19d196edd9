//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`dom`] - Window, storage, history, clipboard, download and blob helpers
//! - [`format`] - Size and timestamp display formatting

pub mod dom;
pub mod format;

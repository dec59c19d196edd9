//! Core logic of the bucket browser, free of rendering concerns.
//!
//! This module provides:
//! - [`StorageApi`] client for the storage backend
//! - [`ListingEngine`] directory listing state machine
//! - [`NavigationQuery`] URL query (credentials + path) codec
//! - [`PreferencesStore`] per-bucket localStorage preferences
//! - [`path`], [`sort`], [`transfer`] helpers and validation

mod api;
pub mod error;
mod listing;
pub mod path;
mod preferences;
mod query;
pub mod sort;
pub mod transfer;

pub use api::StorageApi;
pub use listing::{FetchOutcome, ListingEngine, ListingPhase};
pub use preferences::PreferencesStore;
pub use query::NavigationQuery;

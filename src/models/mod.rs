//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Credentials`], [`PartialCredentials`] - Bucket access carried in the URL
//! - [`Entry`], [`SortState`] - Directory listing rows and their ordering
//! - [`TransferRequest`], [`RenameRequest`] - Dialog state for mutations
//! - [`api`] - Wire bodies for the storage backend

pub mod api;
mod credentials;
mod entry;
mod transfer;

pub use credentials::{Credentials, PartialCredentials};
pub use entry::{Entry, SortDirection, SortField, SortState};
pub use transfer::{RenameRequest, TransferMode, TransferRequest};
